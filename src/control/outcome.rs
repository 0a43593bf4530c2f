//! Outcome type - a computation that either succeeded or failed.
//!
//! `Outcome<E, T>` is in exactly one of two states, `Success(T)` or
//! `Failure(E)`. The error parameter comes first, mirroring `Either<L, R>`
//! where the left side conventionally carries the failure.
//!
//! Failures short-circuit [`map`](Outcome::map), [`bind`](Outcome::bind),
//! [`ensure`](Outcome::ensure) and [`select_many`](Outcome::select_many): once
//! failed, no later callback in a chain runs. A failure only becomes something
//! else through [`recover`](Outcome::recover), [`value_or`](Outcome::value_or),
//! [`value_or_else`](Outcome::value_or_else) or
//! [`to_optional`](Outcome::to_optional).
//!
//! `Outcome` has no `From<T>` or `From<E>` conversion, even when `E` and `T`
//! differ; build it with [`success`](Outcome::success) or
//! [`failure`](Outcome::failure), or convert a `std::result::Result`.
//!
//! # Examples
//!
//! ```rust
//! use railway::control::Outcome;
//!
//! fn parse_age(input: &str) -> Outcome<String, u8> {
//!     Outcome::from(input.parse::<u8>())
//!         .map_error(|error| error.to_string())
//!         .ensure(|age| *age >= 18, "too young".to_string())
//! }
//!
//! assert_eq!(parse_age("42"), Outcome::success(42));
//! assert_eq!(parse_age("12"), Outcome::failure("too young".to_string()));
//! assert!(parse_age("abc").is_failure());
//! ```

use std::fmt;

use super::fault::{self, Fault};
use super::optional::Optional;
use super::unit::Unit;
use super::usage_error::UsageError;

/// The result of a computation: `Success` with a value or `Failure` with an
/// error.
///
/// # Type Parameters
///
/// * `E` - The failure payload
/// * `T` - The success payload
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<E, T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed.
    Failure(E),
}

impl<E, T> Outcome<E, T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful `Outcome`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed `Outcome`.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Runs `factory`; a panic becomes `Failure(error_factory(fault))`.
    ///
    /// The fault is caught once and never resumed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let outcome: Outcome<String, i32> = Outcome::try_catch(
    ///     || "x".parse::<i32>().unwrap(),
    ///     |fault| fault.into_message(),
    /// );
    /// assert!(outcome.error().contains("InvalidDigit"));
    /// ```
    pub fn try_catch<F, G>(factory: F, error_factory: G) -> Self
    where
        F: FnOnce() -> T,
        G: FnOnce(Fault) -> E,
    {
        match fault::capture("Outcome::try_catch", factory) {
            Ok(value) => Self::Success(value),
            Err(fault) => Self::Failure(error_factory(fault)),
        }
    }

    // =========================================================================
    // State Inspection
    // =========================================================================

    /// Returns `true` on `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` on `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Guarded Accessors
    // =========================================================================

    /// Returns a reference to the success value.
    ///
    /// # Panics
    ///
    /// Panics with "Cannot access Value when in a Failure state" on `Failure`.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => UsageError::invalid_state("Value", "Failure").raise(),
        }
    }

    /// Returns a reference to the error.
    ///
    /// # Panics
    ///
    /// Panics with "Cannot access Error when in a Success state" on `Success`.
    #[inline]
    #[track_caller]
    pub fn error(&self) -> &E {
        match self {
            Self::Success(_) => UsageError::invalid_state("Error", "Success").raise(),
            Self::Failure(error) => error,
        }
    }

    /// Returns the success value, or a [`UsageError`] on `Failure`.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::InvalidState`] on `Failure`.
    #[inline]
    pub const fn try_value(&self) -> Result<&T, UsageError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(UsageError::invalid_state("Value", "Failure")),
        }
    }

    /// Returns the error, or a [`UsageError`] on `Success`.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::InvalidState`] on `Success`.
    #[inline]
    pub const fn try_error(&self) -> Result<&E, UsageError> {
        match self {
            Self::Success(_) => Err(UsageError::invalid_state("Error", "Success")),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Consumes the `Outcome`, returning the success value.
    ///
    /// # Panics
    ///
    /// Panics on `Failure`.
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => UsageError::invalid_state("Value", "Failure").raise(),
        }
    }

    /// Consumes the `Outcome`, returning the error.
    ///
    /// # Panics
    ///
    /// Panics on `Success`.
    #[inline]
    #[track_caller]
    pub fn into_error(self) -> E {
        match self {
            Self::Success(_) => UsageError::invalid_state("Error", "Success").raise(),
            Self::Failure(error) => error,
        }
    }

    /// Converts from `&Outcome<E, T>` to `Outcome<&E, &T>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&E, &T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Converts into the standard library `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Dispatches on the state: `success_function` for `Success`,
    /// `failure_function` for `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let outcome: Outcome<&str, i32> = Outcome::failure("timeout");
    /// let status = outcome.fold(|value| value.to_string(), |error| format!("error: {error}"));
    /// assert_eq!(status, "error: timeout");
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, success_function: F, failure_function: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> U,
    {
        match self {
            Self::Success(value) => success_function(value),
            Self::Failure(error) => failure_function(error),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Transforms the success value; failures pass through untouched.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<E, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the error; successes pass through untouched.
    #[inline]
    pub fn map_error<E2, F>(self, function: F) -> Outcome<E2, T>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Chains a computation that may fail. A failure short-circuits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let divide = |value: i32| {
    ///     if value == 0 { Outcome::failure("division by zero") } else { Outcome::success(100 / value) }
    /// };
    /// assert_eq!(Outcome::success(4).bind(divide), Outcome::success(25));
    /// assert_eq!(Outcome::success(0).bind(divide), Outcome::failure("division by zero"));
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Outcome<E, U>
    where
        F: FnOnce(T) -> Outcome<E, U>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Downgrades a `Success` whose value fails `predicate` into
    /// `Failure(error)`. Failures pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// assert!(Outcome::<&str, i32>::success(2).ensure(|value| *value > 1, "bad").is_success());
    /// assert_eq!(*Outcome::<&str, i32>::success(0).ensure(|value| *value > 1, "bad").error(), "bad");
    /// ```
    #[inline]
    #[must_use]
    pub fn ensure<P>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.ensure_else(predicate, |_| error)
    }

    /// Like [`ensure`](Self::ensure), deriving the replacement error from the
    /// rejected value. `error_factory` only runs on rejection.
    #[inline]
    #[must_use]
    pub fn ensure_else<P, F>(self, predicate: P, error_factory: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> E,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(error_factory(value))
                }
            }
            Self::Failure(error) => Self::Failure(error),
        }
    }

    /// Turns a `Failure` into `Success(function(error))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// assert_eq!(*Outcome::<&str, i32>::failure("err").recover(|_| 5).value(), 5);
    /// ```
    #[inline]
    #[must_use]
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Success(function(error)),
        }
    }

    /// Returns the success value, or `default` on failure.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value, or a fallback derived from the error.
    #[inline]
    pub fn value_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => function(error),
        }
    }

    /// Replaces the success payload with [`Unit`].
    #[inline]
    pub fn discard(self) -> Outcome<E, Unit> {
        self.map(|_| Unit)
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Invokes `action` with the value on `Success`; returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn on_success<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Invokes `action` with the error on `Failure`; returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn on_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            action(error);
        }
        self
    }

    /// Invokes exactly one of the two actions; returns `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    /// use std::cell::RefCell;
    ///
    /// let log = RefCell::new(Vec::new());
    /// let outcome: Outcome<&str, i32> = Outcome::failure("offline");
    /// let outcome = outcome.switch(
    ///     |value| log.borrow_mut().push(format!("ok {value}")),
    ///     |error| log.borrow_mut().push(format!("failed {error}")),
    /// );
    /// assert_eq!(outcome, Outcome::failure("offline"));
    /// assert_eq!(log.into_inner(), vec!["failed offline".to_string()]);
    /// ```
    #[inline]
    #[must_use]
    pub fn switch<F, G>(self, on_success: F, on_failure: G) -> Self
    where
        F: FnOnce(&T),
        G: FnOnce(&E),
    {
        match &self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
        self
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// `Some(value)` on success, `None` on failure. The error is discarded.
    #[inline]
    pub fn to_optional(self) -> Optional<T> {
        match self {
            Self::Success(value) => Optional::Some(value),
            Self::Failure(_) => Optional::None,
        }
    }

    // =========================================================================
    // Query Shape
    // =========================================================================

    /// Alias of [`map`](Self::map).
    #[inline]
    pub fn select<U, F>(self, selector: F) -> Outcome<E, U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(selector)
    }

    /// Binds an intermediate outcome and projects both success values.
    ///
    /// Yields the first failure encountered: `self`'s, else the binder's.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let order: Outcome<&str, (u32, u32)> = Outcome::success(7).select_many(
    ///     |customer| Outcome::success(customer * 100),
    ///     |customer, order| (customer, order),
    /// );
    /// assert_eq!(order, Outcome::success((7, 700)));
    /// ```
    pub fn select_many<U, V, B, P>(self, binder: B, projector: P) -> Outcome<E, V>
    where
        B: FnOnce(&T) -> Outcome<E, U>,
        P: FnOnce(T, U) -> V,
    {
        match self {
            Self::Success(value) => match binder(&value) {
                Outcome::Success(intermediate) => Outcome::Success(projector(value, intermediate)),
                Outcome::Failure(error) => Outcome::Failure(error),
            },
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<E, T: Default> Outcome<E, T> {
    /// Returns the success value, or `T::default()` on failure.
    #[inline]
    pub fn value_or_default(self) -> T {
        self.value_or_else(|_| T::default())
    }
}

impl<E: Default, T: Default> Outcome<E, T> {
    /// Splits into `(value, error)`; the inactive slot holds its type's
    /// default instead of signalling an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// let (value, error) = Outcome::<String, i32>::success(3).into_parts();
    /// assert_eq!((value, error.as_str()), (3, ""));
    ///
    /// let (value, error) = Outcome::<String, i32>::failure("bad".to_string()).into_parts();
    /// assert_eq!((value, error.as_str()), (0, "bad"));
    /// ```
    #[inline]
    pub fn into_parts(self) -> (T, E) {
        match self {
            Self::Success(value) => (value, E::default()),
            Self::Failure(error) => (T::default(), error),
        }
    }
}

impl<E> Outcome<E, Unit> {
    /// A success carrying no payload.
    #[inline]
    pub const fn unit() -> Self {
        Self::Success(Unit)
    }
}

impl<E, T> Outcome<E, Outcome<E, T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Outcome<E, T> {
        self.bind(|inner| inner)
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<E: fmt::Debug, T: fmt::Debug> fmt::Debug for Outcome<E, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

impl<E: fmt::Display, T: fmt::Display> fmt::Display for Outcome<E, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(error) => write!(formatter, "Failure({error})"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<E, T> From<Result<T, E>> for Outcome<E, T> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<E, T> From<Outcome<E, T>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<E, T>) -> Self {
        outcome.into_result()
    }
}

impl<E, T, C> FromIterator<Outcome<E, T>> for Outcome<E, C>
where
    C: FromIterator<T>,
{
    /// Collects every success value, or yields the first failure.
    fn from_iter<I: IntoIterator<Item = Outcome<E, T>>>(iterable: I) -> Self {
        iterable
            .into_iter()
            .map(Outcome::into_result)
            .collect::<Result<C, E>>()
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::{Cell, RefCell};

    #[rstest]
    #[should_panic(expected = "Cannot access Value when in a Failure state")]
    fn value_on_failure_panics() {
        let outcome: Outcome<&str, i32> = Outcome::failure("boom");
        let _ = outcome.value();
    }

    #[rstest]
    #[should_panic(expected = "Cannot access Error when in a Success state")]
    fn error_on_success_panics() {
        let outcome: Outcome<&str, i32> = Outcome::success(1);
        let _ = outcome.error();
    }

    #[rstest]
    fn try_error_on_success_reports_invalid_state() {
        let outcome: Outcome<&str, i32> = Outcome::success(1);
        assert_eq!(
            outcome.try_error(),
            Err(UsageError::InvalidState {
                accessed: "Error",
                state: "Success",
            })
        );
        assert_eq!(outcome.try_value(), Ok(&1));
    }

    #[rstest]
    fn ensure_keeps_original_failure() {
        let outcome: Outcome<&str, i32> = Outcome::failure("first");
        assert_eq!(outcome.ensure(|_| false, "second"), Outcome::failure("first"));
    }

    #[rstest]
    fn ensure_else_builds_error_from_value() {
        let outcome: Outcome<String, i32> = Outcome::success(-3);
        assert_eq!(
            outcome.ensure_else(|value| *value >= 0, |value| format!("{value} is negative")),
            Outcome::failure("-3 is negative".to_string())
        );
    }

    #[rstest]
    fn switch_invokes_exactly_one_branch() {
        let successes = Cell::new(0);
        let failures = Cell::new(0);
        let _ = Outcome::<&str, i32>::success(1).switch(
            |_| successes.set(successes.get() + 1),
            |_| failures.set(failures.get() + 1),
        );
        assert_eq!((successes.get(), failures.get()), (1, 0));
    }

    #[rstest]
    fn switch_branches_may_share_a_log() {
        let log = RefCell::new(Vec::new());
        let outcome = Outcome::<&str, i32>::failure("offline").switch(
            |value| log.borrow_mut().push(format!("ok {value}")),
            |error| log.borrow_mut().push(format!("failed {error}")),
        );
        assert_eq!(outcome, Outcome::failure("offline"));
        assert_eq!(log.into_inner(), vec!["failed offline".to_string()]);
    }

    #[rstest]
    fn value_or_else_derives_fallback_from_error() {
        let outcome: Outcome<&str, usize> = Outcome::failure("four");
        assert_eq!(outcome.value_or_else(str::len), 4);
    }

    #[rstest]
    fn select_many_returns_binder_failure() {
        let outcome: Outcome<&str, i32> = Outcome::success(1);
        let result = outcome.select_many(
            |_| Outcome::<&str, i32>::failure("inner"),
            |left, right| left + right,
        );
        assert_eq!(result, Outcome::failure("inner"));
    }

    #[rstest]
    fn unit_and_discard() {
        let outcome: Outcome<&str, Unit> = Outcome::unit();
        assert_eq!(outcome, Outcome::success(Unit));
        assert_eq!(Outcome::<&str, i32>::success(9).discard(), Outcome::unit());
    }

    #[rstest]
    fn collect_returns_first_failure() {
        let collected: Outcome<&str, Vec<i32>> = vec![
            Outcome::success(1),
            Outcome::failure("second"),
            Outcome::failure("third"),
        ]
        .into_iter()
        .collect();
        assert_eq!(collected, Outcome::failure("second"));
    }

    #[rstest]
    fn try_catch_passes_fault_to_error_factory() {
        let outcome: Outcome<String, i32> =
            Outcome::try_catch(|| panic!("exploded"), |fault| fault.into_message());
        assert_eq!(outcome, Outcome::failure("exploded".to_string()));
    }

    #[rstest]
    #[case(Outcome::success(3), "Success(3)")]
    #[case(Outcome::failure("bad"), "Failure(bad)")]
    fn display_format(#[case] outcome: Outcome<&str, i32>, #[case] expected: &str) {
        assert_eq!(outcome.to_string(), expected);
    }
}
