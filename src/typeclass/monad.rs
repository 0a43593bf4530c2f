//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::applicative::Applicative;
use crate::control::{Optional, Outcome};

/// A type class for sequencing computations where the next step depends on
/// the previous value.
///
/// # Examples
///
/// ```rust
/// use railway::control::Optional;
/// use railway::typeclass::Monad;
///
/// let halved = Optional::some(10).flat_map(|n| {
///     if n % 2 == 0 { Optional::some(n / 2) } else { Optional::none() }
/// });
/// assert_eq!(halved, Optional::some(5));
/// ```
pub trait Monad: Applicative {
    /// Applies `function` to the held value and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`flat_map`](Self::flat_map).
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after `self`, discarding `self`'s value. An absent or
    /// failed `self` propagates.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Optional<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        self.bind(function)
    }
}

impl<E: Clone, T> Monad for Outcome<E, T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(T) -> Outcome<E, B>,
    {
        self.bind(function)
    }
}
