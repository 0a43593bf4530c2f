//! Programming-error guards.
//!
//! A [`UsageError`] reports a caller defect: reading the inactive side of an
//! [`Optional`](super::Optional) or [`Outcome`](super::Outcome), or building a
//! strict `Some` from an absent value. It is never a domain failure and is
//! never produced by the combinators themselves.

use thiserror::Error;

/// A misuse of the `Optional` / `Outcome` API detected at the call site.
///
/// # Examples
///
/// ```rust
/// use railway::control::{Outcome, UsageError};
///
/// let outcome: Outcome<String, i32> = Outcome::failure("boom".to_string());
/// assert_eq!(
///     outcome.try_value(),
///     Err(UsageError::InvalidState {
///         accessed: "Value",
///         state: "Failure",
///     })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum UsageError {
    /// The accessed payload is not the active one.
    #[error("Cannot access {accessed} when in a {state} state")]
    InvalidState {
        /// Name of the payload that was read (`"Value"` or `"Error"`).
        accessed: &'static str,
        /// Name of the state the container was actually in.
        state: &'static str,
    },
    /// An absent value was supplied where a present one is required.
    #[error("Value cannot be absent: {parameter}")]
    NullArgument {
        /// Name of the offending parameter.
        parameter: &'static str,
    },
}

impl UsageError {
    pub(crate) const fn invalid_state(accessed: &'static str, state: &'static str) -> Self {
        Self::InvalidState { accessed, state }
    }

    /// Logs the guard violation and panics with its message.
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        tracing::error!(target: "railway::guard", error = %self, "invalid usage");
        panic!("{self}")
    }
}
