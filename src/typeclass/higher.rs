//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Optional<_>` or `Outcome<E, _>` as type
//! constructors directly. [`TypeConstructor`] names the "hole" with a GAT so
//! that [`Functor`](super::Functor) and [`Monad`](super::Monad) can talk about
//! "the same container, holding a different type".

use crate::control::{Optional, Outcome};

/// A type constructor applied to some inner type.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
///
/// # Example
///
/// ```rust
/// use railway::control::Optional;
/// use railway::typeclass::TypeConstructor;
///
/// fn empty_like<T: TypeConstructor>(_: &T) -> T::WithType<String>
/// where
///     T::WithType<String>: Default,
/// {
///     Default::default()
/// }
///
/// let none: Optional<String> = empty_like(&Optional::some(1));
/// assert!(none.is_none());
/// ```
pub trait TypeConstructor {
    /// The type the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

impl<E, T> TypeConstructor for Outcome<E, T> {
    type Inner = T;
    type WithType<B> = Outcome<E, B>;
}
