//! Unit tests for Outcome<E, T>.
//!
//! Outcome represents a computation that either succeeded or failed:
//! - `Success(T)`: the computation produced a value
//! - `Failure(E)`: the computation failed with an error
//!
//! The error parameter comes first. Failures short-circuit `map`, `bind`,
//! `ensure` and `select_many`, and only `recover`, `value_or*` and
//! `to_optional` move a failure off the failure track.

#![cfg(feature = "control")]

use railway::control::{Fault, Optional, Outcome, Unit};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction and Inspection
// =============================================================================

#[rstest]
fn success_and_failure_report_their_state() {
    let success: Outcome<String, i32> = Outcome::success(1);
    let failure: Outcome<String, i32> = Outcome::failure("boom".to_string());

    assert!(success.is_success());
    assert!(!success.is_failure());
    assert!(failure.is_failure());
    assert_eq!(failure.error(), "boom");
}

#[rstest]
#[should_panic(expected = "Cannot access Value when in a Failure state")]
fn into_value_on_failure_panics() {
    let outcome: Outcome<&str, i32> = Outcome::failure("boom");
    let _ = outcome.into_value();
}

#[rstest]
#[should_panic(expected = "Cannot access Error when in a Success state")]
fn into_error_on_success_panics() {
    let outcome: Outcome<&str, i32> = Outcome::success(1);
    let _ = outcome.into_error();
}

#[rstest]
#[case(Ok(1), Outcome::success(1))]
#[case(Err("bad"), Outcome::failure("bad"))]
fn converts_from_std_result(#[case] result: Result<i32, &'static str>, #[case] expected: Outcome<&'static str, i32>) {
    assert_eq!(Outcome::from(result), expected);
    assert_eq!(Result::from(expected), result);
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn ensure_keeps_passing_success() {
    let outcome = Outcome::<String, i32>::success(2).ensure(|value| *value > 1, "bad".to_string());
    assert!(outcome.is_success());
}

#[rstest]
fn ensure_replaces_failing_success() {
    let outcome = Outcome::<String, i32>::success(0).ensure(|value| *value > 1, "bad".to_string());
    assert_eq!(outcome.error(), "bad");
}

#[rstest]
fn recover_turns_failure_into_success() {
    let outcome = Outcome::<String, i32>::failure("err".to_string()).recover(|_| 5);
    assert_eq!(*outcome.value(), 5);
}

#[rstest]
fn recover_leaves_success_untouched() {
    let calls = Cell::new(0);
    let outcome = Outcome::<&str, i32>::success(1).recover(|_| {
        calls.set(calls.get() + 1);
        5
    });
    assert_eq!(outcome, Outcome::success(1));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn map_error_leaves_success_untouched() {
    let outcome = Outcome::<&str, i32>::success(1).map_error(str::len);
    assert_eq!(outcome, Outcome::success(1));
}

#[rstest]
fn map_leaves_failure_untouched() {
    let outcome = Outcome::<&str, i32>::failure("bad").map(|value| value * 2);
    assert_eq!(outcome, Outcome::failure("bad"));
}

#[rstest]
fn failure_short_circuits_whole_chain() {
    let calls = Cell::new(0);
    let count = || calls.set(calls.get() + 1);

    let outcome = Outcome::<&str, i32>::failure("first")
        .map(|value| {
            count();
            value + 1
        })
        .bind(|value| {
            count();
            Outcome::success(value * 2)
        })
        .ensure(
            |_| {
                count();
                false
            },
            "second",
        );

    assert_eq!(outcome, Outcome::failure("first"));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn fold_dispatches_on_state() {
    let render = |outcome: Outcome<&str, i32>| outcome.fold(|value| value.to_string(), |error| format!("error: {error}"));
    assert_eq!(render(Outcome::success(4)), "4");
    assert_eq!(render(Outcome::failure("timeout")), "error: timeout");
}

#[rstest]
fn value_or_variants() {
    assert_eq!(Outcome::<&str, i32>::failure("x").value_or(7), 7);
    assert_eq!(Outcome::<&str, usize>::failure("four").value_or_else(str::len), 4);
    assert_eq!(Outcome::<&str, i32>::failure("x").value_or_default(), 0);
    assert_eq!(Outcome::<&str, i32>::success(1).value_or(7), 1);
}

// =============================================================================
// Side Effects
// =============================================================================

#[rstest]
fn hooks_fire_for_matching_state_only() {
    let successes = Cell::new(0);
    let failures = Cell::new(0);

    let outcome = Outcome::<&str, i32>::success(3)
        .on_success(|_| successes.set(successes.get() + 1))
        .on_failure(|_| failures.set(failures.get() + 1));

    assert_eq!(outcome, Outcome::success(3));
    assert_eq!((successes.get(), failures.get()), (1, 0));
}

#[rstest]
#[case(Outcome::success(1), (1, 0))]
#[case(Outcome::failure("bad"), (0, 1))]
fn switch_invokes_exactly_one_branch(#[case] outcome: Outcome<&str, i32>, #[case] expected: (i32, i32)) {
    let successes = Cell::new(0);
    let failures = Cell::new(0);

    let returned = outcome.switch(
        |_| successes.set(successes.get() + 1),
        |_| failures.set(failures.get() + 1),
    );

    assert_eq!(returned, outcome);
    assert_eq!((successes.get(), failures.get()), expected);
}

// =============================================================================
// Conversion
// =============================================================================

#[rstest]
fn to_optional_discards_error() {
    assert_eq!(Outcome::<&str, i32>::success(1).to_optional(), Optional::some(1));
    assert_eq!(Outcome::<&str, i32>::failure("bad").to_optional(), Optional::none());
}

#[rstest]
fn into_parts_fills_inactive_slot_with_default() {
    assert_eq!(Outcome::<String, i32>::success(4).into_parts(), (4, String::new()));
    assert_eq!(Outcome::<String, i32>::failure("bad".to_string()).into_parts(), (0, "bad".to_string()));
}

#[rstest]
fn unit_outcome_for_side_effects() {
    let saved: Outcome<&str, Unit> = Outcome::success(42).discard();
    assert_eq!(saved, Outcome::unit());
    assert_eq!(saved.to_string(), "Success(())");
}

#[rstest]
fn collect_keeps_every_success_in_order() {
    let collected: Outcome<&str, Vec<i32>> = (1..=3).map(Outcome::success).collect();
    assert_eq!(collected, Outcome::success(vec![1, 2, 3]));
}

#[rstest]
fn flatten_removes_one_level() {
    let nested: Outcome<&str, Outcome<&str, i32>> = Outcome::success(Outcome::failure("inner"));
    assert_eq!(nested.flatten(), Outcome::failure("inner"));
}

// =============================================================================
// Fault Capture
// =============================================================================

#[rstest]
fn try_catch_captures_fault_once() {
    let faults = Cell::new(0);
    let outcome: Outcome<Fault, i32> = Outcome::try_catch(
        || {
            let values: Vec<i32> = Vec::new();
            values[3]
        },
        |fault| {
            faults.set(faults.get() + 1);
            fault
        },
    );

    assert!(outcome.is_failure());
    assert!(outcome.error().message().contains("index out of bounds"));
    assert_eq!(faults.get(), 1);
}

#[rstest]
fn try_catch_returns_success_without_fault() {
    let outcome: Outcome<Fault, i32> = Outcome::try_catch(|| 40 + 2, |fault| fault);
    assert_eq!(outcome, Outcome::success(42));
}

// =============================================================================
// Query Shape
// =============================================================================

#[rstest]
fn select_many_returns_first_failure() {
    let binder_calls = Cell::new(0);
    let outcome = Outcome::<&str, i32>::failure("outer").select_many(
        |_| {
            binder_calls.set(binder_calls.get() + 1);
            Outcome::<&str, i32>::failure("inner")
        },
        |left, right| left + right,
    );
    assert_eq!(outcome, Outcome::failure("outer"));
    assert_eq!(binder_calls.get(), 0);
}

#[rstest]
fn select_many_projects_both_values() {
    let outcome = Outcome::<&str, i32>::success(2).select_many(|value| Outcome::success(value * 10), |left, right| (left, right));
    assert_eq!(outcome, Outcome::success((2, 20)));
}
