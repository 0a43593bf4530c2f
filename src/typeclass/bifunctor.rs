//! Bifunctor type class - mapping over both sides of a two-parameter type.
//!
//! [`Outcome<E, T>`](Outcome) is the bifunctor here: `first` maps the error,
//! `second` maps the value. Mapping one side never touches the other.
//!
//! # Laws
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```

use crate::control::Outcome;

/// A type with two parameters that can both be mapped.
///
/// # Examples
///
/// ```rust
/// use railway::control::Outcome;
/// use railway::typeclass::Bifunctor;
///
/// let outcome: Outcome<&str, i32> = Outcome::failure("bad input");
/// let mapped = outcome.bimap(str::len, |value| value * 2);
/// assert_eq!(mapped, Outcome::failure(9));
/// ```
pub trait Bifunctor<A, B> {
    /// The same type constructor applied to `C` and `D`.
    type Target<C, D>;

    /// Maps both sides; only the active one is invoked.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Maps the first parameter.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Maps the second parameter.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Maps both sides by reference.
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;

    /// Maps the first parameter by reference, cloning the second.
    #[inline]
    fn first_ref<C, F>(&self, function: F) -> Self::Target<C, B>
    where
        B: Clone,
        F: FnOnce(&A) -> C,
        Self: Sized,
    {
        self.bimap_ref(function, B::clone)
    }

    /// Maps the second parameter by reference, cloning the first.
    #[inline]
    fn second_ref<D, G>(&self, function: G) -> Self::Target<A, D>
    where
        A: Clone,
        G: FnOnce(&B) -> D,
        Self: Sized,
    {
        self.bimap_ref(A::clone, function)
    }
}

impl<E, T> Bifunctor<E, T> for Outcome<E, T> {
    type Target<C, D> = Outcome<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Outcome<C, D>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        match self {
            Self::Success(value) => Outcome::Success(second_function(value)),
            Self::Failure(error) => Outcome::Failure(first_function(error)),
        }
    }

    #[inline]
    fn first<C, F>(self, function: F) -> Outcome<C, T>
    where
        F: FnOnce(E) -> C,
    {
        self.map_error(function)
    }

    #[inline]
    fn second<D, G>(self, function: G) -> Outcome<E, D>
    where
        G: FnOnce(T) -> D,
    {
        self.map(function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Outcome<C, D>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&T) -> D,
    {
        self.as_ref().bimap(first_function, second_function)
    }
}
