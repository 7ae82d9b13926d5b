//! # zemen-core
//!
//! Error definitions and primitive type aliases shared by the zemen
//! workspace crates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `invalid_date!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Year number in either calendar system.
pub type Year = i32;

/// 1-based month number (1–12 Gregorian, 1–13 Ethiopian).
pub type MonthNumber = u8;

/// 1-based day-of-month number.
pub type DayNumber = u8;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
