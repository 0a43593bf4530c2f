//! Type class instances for [`Optional`](crate::control::Optional) and
//! [`Outcome`](crate::control::Outcome).
//!
//! The inherent combinators (`map`, `bind`, `map_error`, ...) are the primary
//! API. These traits expose the same behavior generically so that code can be
//! written once against any container:
//!
//! - [`TypeConstructor`]: GAT-based higher-kinded type emulation
//! - [`Functor`]: `fmap`, `fmap_ref`, `replace`, `void`
//! - [`Applicative`]: `pure`, `map2`, `map3`, `product`, `apply`
//! - [`Monad`]: `flat_map`, `and_then`, `then`
//! - [`Bifunctor`]: `bimap`, `first`, `second` for `Outcome`
//!
//! # Examples
//!
//! ```rust
//! use railway::control::{Optional, Outcome};
//! use railway::typeclass::{Functor, Monad};
//!
//! fn double_all<M>(container: M) -> M::WithType<i32>
//! where
//!     M: Functor<Inner = i32>,
//! {
//!     container.fmap(|value| value * 2)
//! }
//!
//! assert_eq!(double_all(Optional::some(4)), Optional::some(8));
//! assert_eq!(double_all(Outcome::<String, i32>::success(4)), Outcome::success(8));
//!
//! let chained = Optional::some(3).flat_map(|value| Optional::some(value + 1));
//! assert_eq!(chained, Optional::some(4));
//! ```

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
