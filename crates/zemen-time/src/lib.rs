//! # zemen-time
//!
//! Ethiopian and Gregorian date types, Bahire Hasab year reckoning,
//! bidirectional date conversion, holiday lookup, and calendar-grid
//! construction.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Bahire Hasab year reckoning: Amete Alem, Metene Rabiet, Evangelist,
/// New Year weekday.
pub mod bahire_hasab;

/// Ethiopian ↔ Gregorian date conversion.
pub mod convert;

/// Gregorian `Date` type (serial day number).
pub mod date;

/// `EthiopianDate` type.
pub mod ethiopian;

/// Calendar grids for either system.
pub mod grid;

/// Fixed-date Ethiopian holidays.
pub mod holidays;

/// `Month` and `EthiopianMonth` — month-of-year enums.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use bahire_hasab::{Evangelist, YearMeta};
pub use convert::{convert, to_ethiopian, to_gregorian, ConvertedDate, Direction};
pub use date::Date;
pub use ethiopian::EthiopianDate;
pub use grid::{year_grid, CalendarGrid, CalendarSystem, DayCell, MonthGrid};
pub use month::{EthiopianMonth, Month};
pub use weekday::Weekday;
