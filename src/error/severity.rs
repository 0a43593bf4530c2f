//! Error severity levels.

use std::fmt;

/// How serious an error is, ordered `Info < Warning < Error < Critical`.
///
/// # Examples
///
/// ```rust
/// use railway::error::Severity;
///
/// assert!(Severity::Info < Severity::Critical);
/// assert_eq!(Severity::default(), Severity::Error);
/// assert_eq!(
///     [Severity::Warning, Severity::Critical, Severity::Info].into_iter().max(),
///     Some(Severity::Critical)
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Informational; nothing went wrong.
    Info,
    /// Degraded but usable.
    Warning,
    /// The operation failed.
    #[default]
    Error,
    /// The failure threatens the process or its data.
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        };
        formatter.write_str(label)
    }
}
