//! Core sum types and their combinators.
//!
//! - [`Optional`]: a value that is present (`Some`) or absent (`None`)
//! - [`Outcome`]: a computation that succeeded (`Success`) or failed (`Failure`)
//! - [`Unit`]: the payload of "completed, nothing to report"
//! - [`Fault`]: a panic captured by `try_catch`
//! - [`UsageError`]: a programming-error guard (wrong-side access, absent value)
//!
//! Domain failures live in the `None` / `Failure` states and travel through
//! combinator chains. Usage errors are caller defects: the unchecked accessors
//! panic, the `try_*` accessors return them.
//!
//! # Examples
//!
//! ```rust
//! use railway::control::{Optional, Outcome};
//!
//! let outcome: Outcome<&str, i32> = Optional::some(2)
//!     .map(|value| value + 1)
//!     .to_outcome("missing")
//!     .ensure(|value| *value > 0, "not positive");
//! assert_eq!(outcome, Outcome::success(3));
//! assert_eq!(outcome.to_optional(), Optional::some(3));
//! ```

mod fault;
mod optional;
mod outcome;
mod unit;
mod usage_error;

pub use fault::Fault;
pub use optional::Optional;
pub use outcome::Outcome;
pub use unit::Unit;
pub use usage_error::UsageError;

#[cfg(feature = "async")]
pub(crate) use fault::capture_async;

static_assertions::assert_impl_all!(Optional<i32>: Copy, Send, Sync);
static_assertions::assert_impl_all!(Outcome<Unit, i32>: Copy, Send, Sync);
static_assertions::assert_impl_all!(Unit: Copy, Send, Sync, Default);
static_assertions::assert_impl_all!(Fault: std::error::Error, Send, Sync);
static_assertions::assert_impl_all!(UsageError: std::error::Error, Copy);
