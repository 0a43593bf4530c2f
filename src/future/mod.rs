//! Asynchronous combinators.
//!
//! Every asynchronous combinator comes in two shapes with the same name:
//!
//! - an inherent `*_async` method on [`Optional`](crate::control::Optional) /
//!   [`Outcome`](crate::control::Outcome), taking a callback that returns a
//!   future;
//! - a method on [`OptionalFutureExt`] / [`OutcomeFutureExt`], available on any
//!   future that resolves to one of those types.
//!
//! The extension methods await the receiver and then delegate to the inherent
//! method, so both shapes share one implementation. A combinator suspends on
//! the receiver (extension form only) and then on the callback's future; side
//! effects run in the order the chain is written. Nothing is spawned and no
//! cancellation is threaded through: dropping the returned future cancels the
//! chain.
//!
//! Callbacks that inspect the payload by reference (`filter_async`,
//! `ensure_async`, `on_some_async`, ...) must return a future that does not
//! borrow from that reference. Copy or clone what the future needs first.
//!
//! # Examples
//!
//! ```rust
//! use std::future::ready;
//!
//! use railway::control::{Optional, Outcome};
//! use railway::future::{OptionalFutureExt, OutcomeFutureExt};
//!
//! async fn find_user(id: u32) -> Optional<String> {
//!     if id == 1 { Optional::some("alice".to_string()) } else { Optional::none() }
//! }
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let greeting = find_user(1)
//!     .to_outcome_async("unknown user")
//!     .map_async(|name| async move { format!("hello, {name}") })
//!     .ensure_async(|text| ready(!text.is_empty()), "empty greeting")
//!     .await;
//! assert_eq!(greeting, Outcome::success("hello, alice".to_string()));
//!
//! let missing = find_user(2).to_outcome_async("unknown user").await;
//! assert_eq!(missing, Outcome::failure("unknown user"));
//! # });
//! ```

mod optional_future;
mod outcome_future;

pub use optional_future::OptionalFutureExt;
pub use outcome_future::OutcomeFutureExt;
