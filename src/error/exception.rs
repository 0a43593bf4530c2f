//! Native faults re-expressed as domain errors.

use std::error::Error as StdError;
use std::sync::Arc;

use thiserror::Error;

use super::domain_error::{DomainError, SharedError};
use super::severity::Severity;
use crate::control::Fault;

/// A wrapped [`std::error::Error`] (or captured [`Fault`]).
///
/// - `code` is the fault's type name without its module path
/// - `message` is the fault's `Display` output
/// - `severity` is always [`Severity::Critical`]
/// - `cause` wraps the fault's `source()`, recursively
///
/// # Examples
///
/// ```rust
/// use railway::error::{DomainError, ExceptionError, Severity};
///
/// let fault = "abc".parse::<i32>().unwrap_err();
/// let error = ExceptionError::new(&fault);
/// assert_eq!(error.code(), "ParseIntError");
/// assert_eq!(error.message(), "invalid digit found in string");
/// assert_eq!(error.severity(), Severity::Critical);
/// ```
#[derive(Debug, Clone, Error)]
#[error("[{code}] {message}")]
pub struct ExceptionError {
    code: String,
    message: String,
    cause: Option<SharedError>,
}

impl ExceptionError {
    /// Wraps a statically typed fault.
    pub fn new<E>(fault: &E) -> Self
    where
        E: StdError + 'static,
    {
        Self::with_code(short_type_name(std::any::type_name::<E>()), fault)
    }

    /// Wraps a type-erased fault.
    ///
    /// Common standard library errors (`io::Error`, the parse errors,
    /// `TryFromIntError`, the UTF-8 errors, `fmt::Error`) are recognised by
    /// downcasting. Any other fault is named by the leading identifier of its
    /// `Debug` output when that identifier is followed by nothing, ` {` or `(`;
    /// otherwise the code is `"Error"`.
    pub fn from_dyn(fault: &(dyn StdError + 'static)) -> Self {
        let code = known_type_name(fault).map_or_else(|| debug_type_name(fault), str::to_string);
        Self::with_code(code, fault)
    }

    fn with_code(code: String, fault: &(dyn StdError + 'static)) -> Self {
        let cause = fault
            .source()
            .map(|source| Arc::new(Self::from_dyn(source)) as SharedError);
        tracing::debug!(target: "railway::fault", code = %code, "wrapped fault as domain error");
        Self {
            code,
            message: fault.to_string(),
            cause,
        }
    }
}

impl From<Fault> for ExceptionError {
    fn from(fault: Fault) -> Self {
        Self::new(&fault)
    }
}

impl DomainError for ExceptionError {
    fn code(&self) -> &str {
        &self.code
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn cause(&self) -> Option<&dyn DomainError> {
        self.cause.as_deref()
    }
}

fn short_type_name(full: &str) -> String {
    let without_generics = full.split('<').next().unwrap_or(full);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
        .to_string()
}

fn known_type_name(fault: &(dyn StdError + 'static)) -> Option<&'static str> {
    macro_rules! named {
        ($($error:ty => $name:literal),+ $(,)?) => {
            $(
                if fault.is::<$error>() {
                    return Some($name);
                }
            )+
        };
    }

    named! {
        std::io::Error => "Error",
        std::num::ParseIntError => "ParseIntError",
        std::num::ParseFloatError => "ParseFloatError",
        std::num::TryFromIntError => "TryFromIntError",
        std::str::ParseBoolError => "ParseBoolError",
        std::str::Utf8Error => "Utf8Error",
        std::string::FromUtf8Error => "FromUtf8Error",
        std::net::AddrParseError => "AddrParseError",
        std::fmt::Error => "Error",
    }
    None
}

fn debug_type_name(fault: &dyn StdError) -> String {
    leading_identifier(&format!("{fault:?}")).map_or_else(|| "Error".to_string(), str::to_string)
}

/// The identifier a `Debug` rendering starts with, if it names a type.
fn leading_identifier(rendered: &str) -> Option<&str> {
    let end = rendered
        .find(|character: char| !(character.is_alphanumeric() || character == '_'))
        .unwrap_or(rendered.len());
    let (name, rest) = rendered.split_at(end);
    let names_type = name.starts_with(|character: char| character.is_alphabetic() || character == '_')
        && (rest.is_empty() || rest.starts_with(" {") || rest.starts_with('('));
    names_type.then_some(name)
}
