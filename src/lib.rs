//! # railway
//!
//! Two-state sum types with railway-style combinators.
//!
//! ## Overview
//!
//! A value either stays on the happy track or moves to the failure track, and
//! once there it travels to the end of the chain untouched unless a combinator
//! explicitly brings it back:
//!
//! - **`Optional<T>`**: `Some(value)` or `None`
//! - **`Outcome<E, T>`**: `Success(value)` or `Failure(error)`
//! - **`Unit`**: the payload of "done, nothing to report"
//! - **Async combinators**: `*_async` mirrors for future-returning callbacks,
//!   also available on futures that resolve to `Optional` / `Outcome`
//! - **Type Classes**: Functor, Applicative, Monad and Bifunctor instances
//! - **Error Taxonomy**: coded, severity-ranked domain errors
//!
//! ## Feature Flags
//!
//! - `control`: `Optional`, `Outcome`, `Unit` and their combinators
//! - `typeclass`: Type class traits and instances
//! - `error`: Domain error taxonomy
//! - `async`: Asynchronous combinators (uses `futures`)
//! - `serde`: `Serialize` / `Deserialize` for the data types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use railway::prelude::*;
//!
//! fn parse_port(input: &str) -> Outcome<String, u16> {
//!     Optional::from(input.strip_prefix("port="))
//!         .to_outcome_else(|| format!("missing prefix in {input:?}"))
//!         .bind(|digits| Outcome::from(digits.parse::<u16>()).map_error(|error| error.to_string()))
//!         .ensure(|port| *port >= 1024, "privileged port".to_string())
//! }
//!
//! assert_eq!(parse_port("port=8080"), Outcome::success(8080));
//! assert_eq!(parse_port("port=80"), Outcome::failure("privileged port".to_string()));
//! assert!(parse_port("8080").is_failure());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use railway::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "error")]
    pub use crate::error::*;

    #[cfg(feature = "async")]
    pub use crate::future::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "error")]
pub mod error;

#[cfg(feature = "async")]
pub mod future;
