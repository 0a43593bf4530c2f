//! Several independent failures reported together.

use std::sync::Arc;

use thiserror::Error;

use super::domain_error::{DomainError, SharedError};
use super::severity::Severity;

const AGGREGATE_CODE: &str = "AggregateError";

/// An ordered collection of errors that happened side by side.
///
/// The aggregate's severity is the highest severity among its errors
/// ([`Severity::Error`] when empty). It never has a cause: its members are
/// parallel failures, not a causal chain.
///
/// # Examples
///
/// ```rust
/// use railway::error::{AggregateError, ContextError, DomainError, Severity};
///
/// let aggregate = AggregateError::new()
///     .with_error(ContextError::plain("name", "name is empty").with_severity(Severity::Warning))
///     .with_error(ContextError::plain("age", "age is negative").with_severity(Severity::Critical));
///
/// assert_eq!(aggregate.len(), 2);
/// assert_eq!(aggregate.severity(), Severity::Critical);
/// assert!(aggregate.cause().is_none());
/// assert_eq!(aggregate.message(), "2 errors occurred");
/// ```
#[derive(Debug, Clone, Error)]
#[error("[{}] {message}", AGGREGATE_CODE)]
pub struct AggregateError {
    message: String,
    custom_message: bool,
    errors: Vec<SharedError>,
}

impl AggregateError {
    /// Creates an empty aggregate.
    pub fn new() -> Self {
        Self::from_shared(Vec::new())
    }

    /// Creates an aggregate from already shared errors, keeping their order.
    pub fn from_shared(errors: Vec<SharedError>) -> Self {
        Self {
            message: summary(errors.len()),
            custom_message: false,
            errors,
        }
    }

    /// Appends an error.
    #[must_use]
    pub fn with_error<E>(self, error: E) -> Self
    where
        E: DomainError + 'static,
    {
        self.with_shared_error(Arc::new(error))
    }

    /// Appends an already shared error.
    #[must_use]
    pub fn with_shared_error(mut self, error: SharedError) -> Self {
        self.errors.push(error);
        if !self.custom_message {
            self.message = summary(self.errors.len());
        }
        self
    }

    /// Replaces the generated "N errors occurred" message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self.custom_message = true;
        self
    }

    /// The inner errors, in insertion order.
    pub fn errors(&self) -> &[SharedError] {
        &self.errors
    }

    /// Number of inner errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if there are no inner errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

fn summary(count: usize) -> String {
    match count {
        1 => "1 error occurred".to_string(),
        _ => format!("{count} errors occurred"),
    }
}

impl Default for AggregateError {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<SharedError> for AggregateError {
    fn from_iter<I: IntoIterator<Item = SharedError>>(iterable: I) -> Self {
        Self::from_shared(iterable.into_iter().collect())
    }
}

impl DomainError for AggregateError {
    fn code(&self) -> &str {
        AGGREGATE_CODE
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn severity(&self) -> Severity {
        self.errors
            .iter()
            .map(|error| error.severity())
            .max()
            .unwrap_or_default()
    }
}
