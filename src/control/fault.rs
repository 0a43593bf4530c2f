//! Native faults captured by the `try_catch` constructors.
//!
//! A fault is a panic raised by a factory closure. It is caught once, turned
//! into a [`Fault`] value and never resumed.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

/// A panic captured while running a factory.
///
/// Only the panic message survives; the payload itself is dropped.
///
/// # Examples
///
/// ```rust
/// use railway::control::{Fault, Outcome};
///
/// let outcome: Outcome<Fault, i32> = Outcome::try_catch(|| panic!("disk on fire"), |fault| fault);
/// assert_eq!(outcome.error().message(), "disk on fire");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{message}")]
pub struct Fault {
    message: String,
}

impl Fault {
    /// Creates a fault carrying the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Builds a fault from a panic payload.
    ///
    /// `&str` and `String` payloads keep their text; anything else becomes
    /// `"unknown panic payload"`.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic payload".to_string());
        Self { message }
    }

    /// Returns the panic message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the fault, returning its message.
    pub fn into_message(self) -> String {
        self.message
    }
}

/// Runs `factory`, converting a panic into a [`Fault`].
pub(crate) fn capture<T, F>(operation: &'static str, factory: F) -> Result<T, Fault>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(factory)).map_err(|payload| {
        let fault = Fault::from_panic(payload.as_ref());
        tracing::warn!(target: "railway::fault", operation, fault = %fault, "captured fault");
        fault
    })
}

#[cfg(feature = "async")]
pub(crate) async fn capture_async<T, F, Fut>(operation: &'static str, factory: F) -> Result<T, Fault>
where
    F: FnOnce() -> Fut,
    Fut: std::future::IntoFuture<Output = T>,
{
    use futures::FutureExt;

    let future = capture(operation, || factory().into_future())?;
    AssertUnwindSafe(future)
        .catch_unwind()
        .await
        .map_err(|payload| {
            let fault = Fault::from_panic(payload.as_ref());
            tracing::warn!(target: "railway::fault", operation, fault = %fault, "captured fault");
            fault
        })
}
