//! The `DomainError` capability and its general-purpose carrier.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use super::severity::Severity;
use crate::control::Unit;

/// An error that can take part in aggregation and wrapping.
///
/// Any `Outcome` error type may implement this, but nothing in
/// [`control`](crate::control) requires it.
pub trait DomainError: fmt::Debug + fmt::Display + Send + Sync {
    /// A stable, machine-readable identifier.
    fn code(&self) -> &str;

    /// A human-readable description.
    fn message(&self) -> &str;

    /// How serious the error is.
    fn severity(&self) -> Severity;

    /// The error that led to this one, if any.
    fn cause(&self) -> Option<&dyn DomainError> {
        None
    }
}

/// A shared handle to a [`DomainError`], used for causal links.
pub type SharedError = Arc<dyn DomainError>;

/// Walks the causal chain starting at `error`, `error` first.
///
/// # Examples
///
/// ```rust
/// use railway::error::{ContextError, DomainError, chain};
///
/// let root = ContextError::plain("io", "disk unavailable");
/// let top = ContextError::plain("load", "could not load profile").with_cause(root);
/// let codes: Vec<&str> = chain(&top).map(DomainError::code).collect();
/// assert_eq!(codes, vec!["load", "io"]);
/// ```
pub fn chain<'a>(error: &'a dyn DomainError) -> impl Iterator<Item = &'a dyn DomainError> {
    std::iter::successors(Some(error), |current| (*current).cause())
}

/// A coded error carrying an arbitrary context value.
///
/// # Examples
///
/// ```rust
/// use railway::error::{ContextError, DomainError, Severity};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Request {
///     id: u32,
/// }
///
/// let error = ContextError::new("timeout", "upstream timed out", Request { id: 7 })
///     .with_severity(Severity::Warning);
/// assert_eq!(error.code(), "timeout");
/// assert_eq!(error.context(), &Request { id: 7 });
/// assert_eq!(error.to_string(), "[timeout] upstream timed out");
/// ```
#[derive(Debug, Clone, Error)]
#[error("[{code}] {message}")]
pub struct ContextError<C> {
    code: String,
    message: String,
    severity: Severity,
    cause: Option<SharedError>,
    context: C,
}

impl<C> ContextError<C> {
    /// Creates an error with [`Severity::Error`] and no cause.
    pub fn new(code: impl Into<String>, message: impl Into<String>, context: C) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: Severity::default(),
            cause: None,
            context,
        }
    }

    /// Sets the severity.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the cause, taking ownership of it.
    #[must_use]
    pub fn with_cause<E>(self, cause: E) -> Self
    where
        E: DomainError + 'static,
    {
        self.with_shared_cause(Arc::new(cause))
    }

    /// Sets the cause to an already shared error.
    #[must_use]
    pub fn with_shared_cause(mut self, cause: SharedError) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Returns the context value.
    pub const fn context(&self) -> &C {
        &self.context
    }

    /// Consumes the error, returning the context value.
    pub fn into_context(self) -> C {
        self.context
    }
}

impl ContextError<Unit> {
    /// Creates an error without context.
    pub fn plain(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, message, Unit)
    }
}

impl<C: fmt::Debug + Send + Sync> DomainError for ContextError<C> {
    fn code(&self) -> &str {
        &self.code
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn cause(&self) -> Option<&dyn DomainError> {
        self.cause.as_deref()
    }
}
