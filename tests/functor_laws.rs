#![cfg(feature = "typeclass")]
//! Property-based tests for Functor laws.
//!
//! This module verifies that the Functor instances satisfy the required laws:
//!
//! - **Identity Law**: `fa.fmap(|x| x) == fa`
//! - **Composition Law**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
//!
//! For `Outcome`, mapping one side must never touch the other: `map` leaves a
//! `Failure` as it is and `map_error` leaves a `Success` as it is.

use proptest::prelude::*;
use railway::control::{Optional, Outcome};
use railway::typeclass::Functor;

fn optional_strategy() -> impl Strategy<Value = Optional<i32>> {
    any::<Option<i32>>().prop_map(Optional::from)
}

fn outcome_strategy() -> impl Strategy<Value = Outcome<String, i32>> {
    prop::result::maybe_ok(any::<i32>(), any::<String>()).prop_map(Outcome::from)
}

// =============================================================================
// Optional<T> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Optional<i32>
    #[test]
    fn prop_optional_identity_law(value in optional_strategy()) {
        prop_assert_eq!(value.map(|x| x), value);
        prop_assert_eq!(value.fmap(|x| x), value);
    }

    /// Composition Law for Optional<i32>
    #[test]
    fn prop_optional_composition_law(value in optional_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// fmap agrees with the inherent map
    #[test]
    fn prop_optional_fmap_is_map(value in optional_strategy()) {
        let function = |n: i32| i64::from(n) * 3;
        prop_assert_eq!(value.fmap(function), value.map(function));
    }
}

// =============================================================================
// Outcome<E, T> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Outcome<String, i32>
    #[test]
    fn prop_outcome_identity_law(value in outcome_strategy()) {
        prop_assert_eq!(value.clone().map(|x| x), value.clone());
        prop_assert_eq!(value.clone().map_error(|e| e), value);
    }

    /// Composition Law for the success side
    #[test]
    fn prop_outcome_composition_law(value in outcome_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.clone().map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// Composition Law for the failure side
    #[test]
    fn prop_outcome_error_composition_law(value in outcome_strategy()) {
        let function1 = |s: String| s.len();
        let function2 = |n: usize| n.wrapping_add(10);

        let left = value.clone().map_error(function1).map_error(function2);
        let right = value.map_error(|e| function2(function1(e)));

        prop_assert_eq!(left, right);
    }

    /// map leaves a failure untouched
    #[test]
    fn prop_map_preserves_failure(error in any::<String>()) {
        let failure: Outcome<String, i32> = Outcome::failure(error.clone());
        prop_assert_eq!(failure.map(|x| x.wrapping_add(1)), Outcome::failure(error));
    }

    /// map_error leaves a success untouched
    #[test]
    fn prop_map_error_preserves_success(value in any::<i32>()) {
        let success: Outcome<String, i32> = Outcome::success(value);
        prop_assert_eq!(success.map_error(|e| e.len()), Outcome::success(value));
    }

    /// fmap agrees with the inherent map
    #[test]
    fn prop_outcome_fmap_is_map(value in outcome_strategy()) {
        let function = |n: i32| i64::from(n) - 1;
        prop_assert_eq!(value.clone().fmap(function), value.map(function));
    }
}
