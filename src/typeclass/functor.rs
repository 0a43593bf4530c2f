//! Functor type class - mapping over the held value.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! For [`Outcome`] both laws act on the success side only; a `Failure` is
//! returned untouched.
//!
//! # Examples
//!
//! ```rust
//! use railway::control::Optional;
//! use railway::typeclass::Functor;
//!
//! let length = Optional::some("four").fmap(str::len);
//! assert_eq!(length, Optional::some(4));
//! ```

use super::higher::TypeConstructor;
use crate::control::{Optional, Outcome};

/// A type class for containers whose value can be transformed in place.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the held value.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a reference to the held value, leaving `self`
    /// available.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Optional;
    /// use railway::typeclass::Functor;
    ///
    /// let name = Optional::some("ferris".to_string());
    /// assert_eq!(name.fmap_ref(String::len), Optional::some(6));
    /// assert!(name.is_some());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the held value with `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the held value.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Outcome<E, T> Implementation
// =============================================================================

impl<E: Clone, T> Functor for Outcome<E, T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(function(value)),
            Outcome::Failure(error) => Outcome::Failure(error.clone()),
        }
    }
}
