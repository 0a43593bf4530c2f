//! Optional type - a value that is either present or absent.
//!
//! `Optional<T>` is in exactly one of two states, `Some(T)` or `None`. Absence
//! propagates through [`map`](Optional::map), [`bind`](Optional::bind) and
//! [`select_many`](Optional::select_many) without invoking any further
//! callback, and only turns into something else through an explicit
//! combinator such as [`or_else`](Optional::or_else),
//! [`value_or`](Optional::value_or) or [`to_outcome`](Optional::to_outcome).
//!
//! # Examples
//!
//! ```rust
//! use railway::control::Optional;
//!
//! let port = Optional::some("8080")
//!     .bind(|text| Optional::from(text.parse::<u16>().ok()))
//!     .filter(|port| *port >= 1024)
//!     .value_or(3000);
//! assert_eq!(port, 8080);
//!
//! let missing: Optional<u16> = Optional::none();
//! assert_eq!(missing.map(|port| port + 1).value_or(3000), 3000);
//! ```

use std::fmt;

use super::fault;
use super::outcome::Outcome;
use super::usage_error::UsageError;

/// A value that is either present (`Some`) or absent (`None`).
///
/// # Type Parameters
///
/// * `T` - The type of the present value
///
/// # Examples
///
/// ```rust
/// use railway::control::Optional;
///
/// let present = Optional::some(2).map(|value| value + 1);
/// assert_eq!(*present.value(), 3);
///
/// let absent = Optional::<i32>::none().map(|value| value + 1);
/// assert!(absent.is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// A present value.
    Some(T),
    /// No value.
    None,
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a present `Optional`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Optional;
    ///
    /// assert!(Optional::some(42).is_some());
    /// ```
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Creates an absent `Optional`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Optional;
    ///
    /// assert!(Optional::<i32>::none().is_none());
    /// ```
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Creates a `Some` from a value that must be present.
    ///
    /// Unlike `Optional::from(Option<T>)`, which maps absence to `None`, this
    /// treats absence as a caller defect.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::NullArgument`] when `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::{Optional, UsageError};
    ///
    /// assert_eq!(Optional::try_some(Some(1)), Ok(Optional::some(1)));
    /// assert_eq!(
    ///     Optional::<i32>::try_some(None),
    ///     Err(UsageError::NullArgument { parameter: "value" })
    /// );
    /// ```
    pub fn try_some(value: Option<T>) -> Result<Self, UsageError> {
        value
            .map(Self::Some)
            .ok_or(UsageError::NullArgument { parameter: "value" })
    }

    /// Runs `factory`, returning `Some` with its result or `None` if it panics.
    ///
    /// The fault itself is discarded; only the fact that it happened is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Optional;
    ///
    /// let parsed = Optional::try_catch(|| "42".parse::<i32>().unwrap());
    /// assert_eq!(parsed, Optional::some(42));
    ///
    /// let failed = Optional::try_catch(|| "forty-two".parse::<i32>().unwrap());
    /// assert!(failed.is_none());
    /// ```
    pub fn try_catch<F>(factory: F) -> Self
    where
        F: FnOnce() -> T,
    {
        fault::capture("Optional::try_catch", factory).map_or(Self::None, Self::Some)
    }

    // =========================================================================
    // State Inspection
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    // =========================================================================
    // Guarded Accessors
    // =========================================================================

    /// Returns a reference to the present value.
    ///
    /// Reserved for call sites that have already established the state. Prefer
    /// [`fold`](Self::fold) everywhere else.
    ///
    /// # Panics
    ///
    /// Panics with "Cannot access Value when in a None state" on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Optional;
    ///
    /// assert_eq!(*Optional::some(3).value(), 3);
    /// ```
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Some(value) => value,
            Self::None => UsageError::invalid_state("Value", "None").raise(),
        }
    }

    /// Returns a reference to the present value, or a [`UsageError`].
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::InvalidState`] on `None`.
    #[inline]
    pub const fn try_value(&self) -> Result<&T, UsageError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(UsageError::invalid_state("Value", "None")),
        }
    }

    /// Consumes the `Optional`, returning the present value.
    ///
    /// # Panics
    ///
    /// Panics with "Cannot access Value when in a None state" on `None`.
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => UsageError::invalid_state("Value", "None").raise(),
        }
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    /// Converts into the standard library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Applies `some_function` to the value if present, otherwise invokes
    /// `none_function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Optional;
    ///
    /// let describe = |optional: Optional<i32>| {
    ///     optional.fold(|value| format!("got {value}"), || "nothing".to_string())
    /// };
    /// assert_eq!(describe(Optional::some(1)), "got 1");
    /// assert_eq!(describe(Optional::none()), "nothing");
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, some_function: F, none_function: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce() -> U,
    {
        match self {
            Self::Some(value) => some_function(value),
            Self::None => none_function(),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Transforms the present value, propagating absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Optional;
    ///
    /// assert_eq!(Optional::some(2).map(|value| value + 1), Optional::some(3));
    /// assert_eq!(Optional::<i32>::none().map(|value| value + 1), Optional::none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Optional::Some(function(value)),
            Self::None => Optional::None,
        }
    }

    /// Chains a computation that may itself be absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Optional;
    ///
    /// let half = |value: i32| {
    ///     if value % 2 == 0 { Optional::some(value / 2) } else { Optional::none() }
    /// };
    /// assert_eq!(Optional::some(8).bind(half), Optional::some(4));
    /// assert_eq!(Optional::some(7).bind(half), Optional::none());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Optional::None,
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Optional;
    ///
    /// assert_eq!(Optional::some(4).filter(|value| value % 2 == 0), Optional::some(4));
    /// assert_eq!(Optional::some(3).filter(|value| value % 2 == 0), Optional::none());
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Self::Some(value) = self {
            if predicate(&value) {
                return Self::Some(value);
            }
        }
        Self::None
    }

    /// Returns `self` if present, otherwise `fallback`.
    #[inline]
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => fallback,
        }
    }

    /// Returns `self` if present, otherwise the result of `factory`.
    ///
    /// `factory` only runs on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Optional;
    ///
    /// let cached = Optional::some("cached");
    /// assert_eq!(cached.or_else(|| unreachable!()), Optional::some("cached"));
    ///
    /// let missing: Optional<&str> = Optional::none();
    /// assert_eq!(missing.or_else(|| Optional::some("loaded")), Optional::some("loaded"));
    /// ```
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, factory: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => factory(),
        }
    }

    /// Returns the value if present, otherwise `default`.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the value if present, otherwise the result of `factory`.
    #[inline]
    pub fn value_or_else<F>(self, factory: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => factory(),
        }
    }

    /// Pairs two present values.
    #[inline]
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        match (self, other) {
            (Self::Some(left), Optional::Some(right)) => Optional::Some((left, right)),
            _ => Optional::None,
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Invokes `action` with the value if present and returns `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Optional;
    ///
    /// let mut seen = Vec::new();
    /// let optional = Optional::some(5).on_some(|value| seen.push(*value));
    /// assert_eq!(optional, Optional::some(5));
    /// assert_eq!(seen, vec![5]);
    /// ```
    #[inline]
    #[must_use]
    pub fn on_some<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            action(value);
        }
        self
    }

    /// Invokes `action` if no value is present and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn on_none<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            action();
        }
        self
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Returns an iterator over zero or one borrowed element.
    ///
    /// Each call starts a fresh traversal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Optional;
    ///
    /// let optional = Optional::some(7);
    /// assert_eq!(optional.iter().count(), 1);
    /// assert_eq!(optional.iter().copied().sum::<i32>(), 7);
    /// assert_eq!(Optional::<i32>::none().iter().next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }

    /// Converts into an [`Outcome`], using `error` for the `None` case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::{Optional, Outcome};
    ///
    /// assert_eq!(Optional::some(1).to_outcome("missing"), Outcome::success(1));
    /// assert_eq!(Optional::<i32>::none().to_outcome("missing"), Outcome::failure("missing"));
    /// ```
    #[inline]
    pub fn to_outcome<E>(self, error: E) -> Outcome<E, T> {
        match self {
            Self::Some(value) => Outcome::Success(value),
            Self::None => Outcome::Failure(error),
        }
    }

    /// Converts into an [`Outcome`], building the error only on `None`.
    #[inline]
    pub fn to_outcome_else<E, F>(self, error_factory: F) -> Outcome<E, T>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Outcome::Success(value),
            Self::None => Outcome::Failure(error_factory()),
        }
    }

    // =========================================================================
    // Query Shape
    // =========================================================================

    /// Alias of [`map`](Self::map).
    #[inline]
    pub fn select<U, F>(self, selector: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(selector)
    }

    /// Binds an intermediate value and projects it together with the source.
    ///
    /// Short-circuits to `None` when either `self` or the bound intermediate
    /// is absent; `projector` only runs when both are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Optional;
    ///
    /// let total = Optional::some(2).select_many(
    ///     |left| Optional::some(left * 10),
    ///     |left, right| left + right,
    /// );
    /// assert_eq!(total, Optional::some(22));
    ///
    /// let skipped = Optional::some(2).select_many(
    ///     |_| Optional::<i32>::none(),
    ///     |left, right| left + right,
    /// );
    /// assert!(skipped.is_none());
    /// ```
    pub fn select_many<U, V, B, P>(self, binder: B, projector: P) -> Optional<V>
    where
        B: FnOnce(&T) -> Optional<U>,
        P: FnOnce(T, U) -> V,
    {
        match self {
            Self::Some(value) => match binder(&value) {
                Optional::Some(intermediate) => Optional::Some(projector(value, intermediate)),
                Optional::None => Optional::None,
            },
            Self::None => Optional::None,
        }
    }
}

impl<T: Default> Optional<T> {
    /// Returns the value if present, otherwise `T::default()`.
    #[inline]
    pub fn value_or_default(self) -> T {
        self.value_or_else(T::default)
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        self.bind(|inner| inner)
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            Self::None => formatter.write_str("None"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    /// Absence maps to `None`, presence to `Some`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> FromIterator<Optional<T>> for Optional<C>
where
    C: FromIterator<T>,
{
    /// Collects every present value, or yields `None` at the first absence.
    fn from_iter<I: IntoIterator<Item = Optional<T>>>(iterable: I) -> Self {
        iterable
            .into_iter()
            .map(Optional::into_option)
            .collect::<Option<C>>()
            .into()
    }
}
