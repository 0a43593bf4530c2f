//! A small taxonomy of domain errors for use as `Outcome` error types.
//!
//! Nothing in [`control`](crate::control) depends on this module; it is an
//! optional vocabulary for applications that want coded, classified errors.
//!
//! - [`DomainError`]: the capability (code, message, severity, cause)
//! - [`ContextError`]: a coded error carrying an arbitrary context value
//! - [`AggregateError`]: several parallel failures reported together
//! - [`ExceptionError`]: a native fault (or captured panic) as a domain error
//!
//! # Examples
//!
//! ```rust
//! use railway::control::Outcome;
//! use railway::error::{ExceptionError, Severity, DomainError};
//!
//! let outcome: Outcome<ExceptionError, i32> =
//!     Outcome::try_catch(|| -> i32 { panic!("boom") }, ExceptionError::from);
//!
//! let error = outcome.into_error();
//! assert_eq!(error.code(), "Fault");
//! assert_eq!(error.message(), "boom");
//! assert_eq!(error.severity(), Severity::Critical);
//! ```

mod aggregate;
mod domain_error;
mod exception;
mod severity;

pub use aggregate::AggregateError;
pub use domain_error::{chain, ContextError, DomainError, SharedError};
pub use exception::ExceptionError;
pub use severity::Severity;

static_assertions::assert_impl_all!(AggregateError: Send, Sync, Clone, std::error::Error);
static_assertions::assert_impl_all!(ExceptionError: Send, Sync, Clone, std::error::Error);
static_assertions::assert_impl_all!(ContextError<crate::control::Unit>: Send, Sync, std::error::Error);
