#![cfg(feature = "error")]
//! Integration tests for the domain error taxonomy.
//!
//! Covers severity ordering, aggregate severity and cause rules, the exception
//! wrapper's code/message/cause derivation, and using these errors as
//! `Outcome` failure payloads.

use railway::control::{Fault, Outcome};
use railway::error::{
    AggregateError, ContextError, DomainError, ExceptionError, Severity, SharedError, chain,
};
use rstest::rstest;
use std::io;
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("configuration could not be loaded")]
struct ConfigError {
    #[source]
    source: IoFailure,
}

#[derive(Debug, Error)]
#[error("disk unavailable")]
struct IoFailure;

#[derive(Debug, Error)]
#[error("settings file could not be read")]
struct LoadError {
    #[source]
    source: io::Error,
}

// =============================================================================
// Severity
// =============================================================================

#[rstest]
fn severity_is_totally_ordered() {
    let mut levels = vec![Severity::Critical, Severity::Info, Severity::Error, Severity::Warning];
    levels.sort();
    assert_eq!(
        levels,
        vec![Severity::Info, Severity::Warning, Severity::Error, Severity::Critical]
    );
}

// =============================================================================
// AggregateError
// =============================================================================

#[rstest]
#[case(vec![], Severity::Error)]
#[case(vec![Severity::Info], Severity::Info)]
#[case(vec![Severity::Warning, Severity::Critical, Severity::Info], Severity::Critical)]
fn aggregate_severity_is_maximum_or_error(#[case] inner: Vec<Severity>, #[case] expected: Severity) {
    let aggregate: AggregateError = inner
        .into_iter()
        .map(|severity| Arc::new(ContextError::plain("inner", "inner").with_severity(severity)) as SharedError)
        .collect();
    assert_eq!(aggregate.severity(), expected);
}

#[rstest]
fn aggregate_never_has_cause() {
    let caused = ContextError::plain("outer", "outer").with_cause(ContextError::plain("root", "root"));
    let aggregate = AggregateError::new().with_error(caused);
    assert!(aggregate.cause().is_none());
    assert_eq!(aggregate.errors()[0].cause().map(DomainError::code), Some("root"));
}

#[rstest]
fn aggregate_summarizes_count() {
    let aggregate = AggregateError::new().with_error(ContextError::plain("only", "only"));
    assert_eq!(aggregate.message(), "1 error occurred");
    assert_eq!(aggregate.code(), "AggregateError");
    assert_eq!(aggregate.to_string(), "[AggregateError] 1 error occurred");
}

// =============================================================================
// ExceptionError
// =============================================================================

#[rstest]
fn exception_wraps_source_chain() {
    let error = ExceptionError::new(&ConfigError { source: IoFailure });

    assert_eq!(error.code(), "ConfigError");
    assert_eq!(error.message(), "configuration could not be loaded");
    assert_eq!(error.severity(), Severity::Critical);

    let links: Vec<(String, String)> = chain(&error)
        .map(|link| (link.code().to_string(), link.message().to_string()))
        .collect();
    assert_eq!(
        links,
        vec![
            ("ConfigError".to_string(), "configuration could not be loaded".to_string()),
            ("IoFailure".to_string(), "disk unavailable".to_string()),
        ]
    );
}

#[rstest]
fn exception_from_dyn_reads_type_from_debug() {
    let boxed: Box<dyn std::error::Error + 'static> = Box::new(IoFailure);
    let error = ExceptionError::from_dyn(boxed.as_ref());
    assert_eq!(error.code(), "IoFailure");
    assert!(error.cause().is_none());
}

#[rstest]
#[case(io::Error::other("disk"), "disk")]
#[case(io::ErrorKind::NotFound.into(), "entity not found")]
fn exception_names_io_source_by_type(#[case] source: io::Error, #[case] message: &str) {
    let error = ExceptionError::new(&LoadError { source });

    let links: Vec<(String, String)> = chain(&error)
        .map(|link| (link.code().to_string(), link.message().to_string()))
        .collect();
    assert_eq!(
        links,
        vec![
            ("LoadError".to_string(), "settings file could not be read".to_string()),
            ("Error".to_string(), message.to_string()),
        ]
    );
}

#[rstest]
fn exception_from_dyn_falls_back_when_debug_is_not_a_type() {
    #[derive(Error)]
    #[error("opaque")]
    struct Opaque;

    impl std::fmt::Debug for Opaque {
        fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("opaque: no details")
        }
    }

    assert_eq!(ExceptionError::from_dyn(&Opaque).code(), "Error");
}

#[rstest]
fn try_catch_feeds_exception_error() {
    let outcome: Outcome<ExceptionError, u8> =
        Outcome::try_catch(|| u8::try_from(300_i32).unwrap(), ExceptionError::from);

    let error = outcome.into_error();
    assert_eq!(error.code(), "Fault");
    assert!(error.message().contains("TryFromIntError"));
}

#[rstest]
fn fault_converts_to_exception_error() {
    let error: ExceptionError = Fault::new("stack overflow").into();
    assert_eq!(error.to_string(), "[Fault] stack overflow");
}

// =============================================================================
// ContextError as Outcome payload
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Order {
    id: u32,
    quantity: u32,
}

fn validate(order: Order) -> Outcome<ContextError<Order>, Order> {
    Outcome::success(order).ensure_else(
        |order| order.quantity > 0,
        |order| ContextError::new("empty_order", "quantity must be positive", order).with_severity(Severity::Warning),
    )
}

#[rstest]
fn context_error_carries_rejected_value() {
    let outcome = validate(Order { id: 9, quantity: 0 });
    let error = outcome.into_error();
    assert_eq!(error.code(), "empty_order");
    assert_eq!(error.severity(), Severity::Warning);
    assert_eq!(error.into_context(), Order { id: 9, quantity: 0 });
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buffer);
        Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[rstest]
fn errors_are_logged_through_tracing() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter("railway=debug")
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let outcome: Outcome<ExceptionError, i32> =
            Outcome::try_catch(|| panic!("traced fault"), ExceptionError::from);
        assert_eq!(outcome.into_error().message(), "traced fault");
    });

    let output = logs.contents();
    let captured = output
        .lines()
        .find(|line| line.contains("captured fault"))
        .unwrap_or_else(|| panic!("no capture event in {output:?}"));
    assert!(captured.contains("WARN"));
    assert!(captured.contains("railway::fault"));
    assert!(captured.contains("traced fault"));

    let wrapped = output
        .lines()
        .find(|line| line.contains("wrapped fault as domain error"))
        .unwrap_or_else(|| panic!("no wrap event in {output:?}"));
    assert!(wrapped.contains("DEBUG"));
    assert!(wrapped.contains("railway::fault"));
    assert!(wrapped.contains("code=Fault"));
}
