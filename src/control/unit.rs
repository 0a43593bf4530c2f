//! The `Unit` type - "completed, nothing to report".

use std::fmt;

/// A zero-information value.
///
/// Every `Unit` equals every other `Unit` and they all hash identically. It is
/// the success payload of operations that only have side effects, e.g.
/// [`Outcome::unit`](super::Outcome::unit).
///
/// # Examples
///
/// ```rust
/// use railway::control::Unit;
///
/// assert_eq!(Unit, Unit::default());
/// assert_eq!(Unit.to_string(), "()");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

impl fmt::Display for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("()")
    }
}

impl From<()> for Unit {
    #[inline]
    fn from((): ()) -> Self {
        Self
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}
