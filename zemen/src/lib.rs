//! # zemen
//!
//! Ethiopian ↔ Gregorian calendar conversion, Bahire Hasab year reckoning,
//! fixed-date holiday lookup, and printable calendar grids.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `zemen-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use zemen::time::{to_ethiopian, Date};
//!
//! let new_year = Date::from_ymd(2023, 9, 11)?;
//! let eth = to_ethiopian(new_year);
//! assert_eq!((eth.year(), eth.month(), eth.day()), (2016, 1, 1));
//! # Ok::<(), zemen::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and shared type aliases.
pub use zemen_core as core;

/// Date types, conversions, holidays, and calendar grids.
pub use zemen_time as time;
