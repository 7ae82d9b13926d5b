//! Error types for zemen.
//!
//! The library's computations are pure integer arithmetic; the only thing
//! that can fail is being handed a (year, month, day) triple that does not
//! exist on its calendar.  That failure is a single `thiserror`-derived
//! variant carried through every fallible constructor and conversion.

use thiserror::Error;

/// The top-level error type used throughout zemen.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The given (year, month, day) does not name a real calendar day.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

/// Shorthand `Result` type used throughout zemen.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Early-return with [`Error::InvalidDate`].
///
/// # Example
/// ```
/// use zemen_core::{errors::Result, invalid_date};
/// fn day_of_month(day: u8) -> Result<u8> {
///     if day == 0 {
///         invalid_date!("day must be >= 1, got {day}");
///     }
///     Ok(day)
/// }
/// assert!(day_of_month(0).is_err());
/// assert!(day_of_month(1).is_ok());
/// ```
#[macro_export]
macro_rules! invalid_date {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidDate(format!($($msg)*)))
    };
}
