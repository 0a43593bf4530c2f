//! Applicative type class - combining independent computations.
//!
//! `Applicative` extends [`Functor`] with `pure` (lift a value) and `map2`
//! (combine two containers). For `Optional` any `None` wins; for `Outcome`
//! the leftmost `Failure` wins.
//!
//! # Laws
//!
//! ```text
//! pure(|x| x).apply(v) == v                        // identity
//! pure(f).apply(pure(x)) == pure(f(x))             // homomorphism
//! ```

use super::functor::Functor;
use crate::control::{Optional, Outcome};

/// A functor that can lift values and combine independent contexts.
///
/// # Examples
///
/// ```rust
/// use railway::control::Outcome;
/// use railway::typeclass::Applicative;
///
/// let width: Outcome<String, u32> = Outcome::success(3);
/// let height: Outcome<String, u32> = Outcome::success(4);
/// assert_eq!(width.map2(height, |w, h| w * h), Outcome::success(12));
/// ```
pub trait Applicative: Functor {
    /// Lifts `value` into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two contexts with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three contexts with a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs the values of two contexts.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a contained function to a contained argument.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Applicative for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Some(a), Optional::Some(b)) => Optional::Some(function(a, b)),
            _ => Optional::None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Optional<B>, third: Optional<C>, function: F) -> Optional<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Some(a), Optional::Some(b), Optional::Some(c)) => {
                Optional::Some(function(a, b, c))
            }
            _ => Optional::None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Optional<B>) -> Optional<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, argument| function(argument))
    }
}

// =============================================================================
// Outcome<E, T> Implementation
// =============================================================================

impl<E: Clone, T> Applicative for Outcome<E, T> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<E, B> {
        Outcome::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<E, B>, function: F) -> Outcome<E, C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Outcome::Success(b)) => Outcome::Success(function(a, b)),
            (Self::Failure(error), _) | (_, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Outcome<E, B>,
        third: Outcome<E, C>,
        function: F,
    ) -> Outcome<E, D>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Success(a), Outcome::Success(b), Outcome::Success(c)) => {
                Outcome::Success(function(a, b, c))
            }
            (Self::Failure(error), _, _)
            | (_, Outcome::Failure(error), _)
            | (_, _, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Outcome<E, B>) -> Outcome<E, Output>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, argument| function(argument))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn optional_map2_with_none() {
        let left = Optional::some(1);
        let right: Optional<i32> = Optional::none();
        assert_eq!(left.map2(right, |a, b| a + b), Optional::none());
    }

    #[rstest]
    fn optional_apply() {
        let function = Optional::some(|value: i32| value * 3);
        assert_eq!(function.apply(Optional::some(4)), Optional::some(12));
    }

    #[rstest]
    fn outcome_map2_leftmost_failure_wins() {
        let left: Outcome<&str, i32> = Outcome::failure("left");
        let right: Outcome<&str, i32> = Outcome::failure("right");
        assert_eq!(left.map2(right, |a, b| a + b), Outcome::failure("left"));
    }

    #[rstest]
    fn outcome_map3_reports_middle_failure() {
        let first: Outcome<&str, i32> = Outcome::success(1);
        let second: Outcome<&str, i32> = Outcome::failure("second");
        let third: Outcome<&str, i32> = Outcome::success(3);
        assert_eq!(
            first.map3(second, third, |a, b, c| a + b + c),
            Outcome::failure("second")
        );
    }

    #[rstest]
    fn outcome_product() {
        let left: Outcome<&str, i32> = Outcome::success(1);
        assert_eq!(left.product(Outcome::success("a")), Outcome::success((1, "a")));
    }
}
