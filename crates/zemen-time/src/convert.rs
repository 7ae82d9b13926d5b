//! Ethiopian ↔ Gregorian date conversion.
//!
//! Both directions are anchored on the Gregorian date of 1 Meskerem: 11
//! September, or 12 September when the anchoring Gregorian year is a leap
//! year.  From there the Ethiopian date falls out of a plain day count,
//! since every Ethiopian month before Pagume has 30 days.
//!
//! Two long-standing quirks of the reference behavior are preserved on
//! purpose (see DESIGN.md):
//! * Ethiopian→Gregorian counts `(day - 2)` days past the anchor, so
//!   1 Meskerem maps one day before the anchor.
//! * Gregorian→Ethiopian repairs a negative day count with
//!   `+365 (+1 when (eYear + 7) mod 4 == 3)`, an adjustment keyed to the
//!   Gregorian leap cycle rather than the Ethiopian one.
//!
//! Because the two adjustments are not symmetric, round trips near the year
//! boundary can drift by a day; the conversion result is surfaced as
//! computed, never clamped.

use crate::date::{self, Date};
use crate::ethiopian::EthiopianDate;
use zemen_core::errors::Result;

/// Conversion direction, as selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Interpret the input as Ethiopian; produce a Gregorian date.
    EthiopianToGregorian,
    /// Interpret the input as Gregorian; produce an Ethiopian date.
    GregorianToEthiopian,
}

/// The result of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertedDate {
    /// An Ethiopian date.
    Ethiopian(EthiopianDate),
    /// A Gregorian date.
    Gregorian(Date),
}

/// Validate a raw (year, month, day) in the source system of `direction`
/// and convert it to the other system.
///
/// Fails with `InvalidDate` when the input does not name a real day on its
/// calendar.
pub fn convert(direction: Direction, year: i32, month: u8, day: u8) -> Result<ConvertedDate> {
    match direction {
        Direction::EthiopianToGregorian => {
            let e = EthiopianDate::new(year, month, day)?;
            Ok(ConvertedDate::Gregorian(to_gregorian(e)))
        }
        Direction::GregorianToEthiopian => {
            let g = Date::from_ymd(year, month, day)?;
            Ok(ConvertedDate::Ethiopian(to_ethiopian(g)))
        }
    }
}

/// Gregorian day-of-September on which 1 Meskerem falls, keyed to the
/// leap status of `gregorian_year`.
fn new_year_anchor_day(gregorian_year: i32) -> u8 {
    if date::is_leap_year(gregorian_year) {
        12
    } else {
        11
    }
}

/// Convert a Gregorian date to the Ethiopian calendar.
///
/// The result is not range-clamped: at year-end edge cases the computed day
/// can land past the Pagume bound, and that value is returned as is.
pub fn to_ethiopian(date: Date) -> EthiopianDate {
    let g_year = date.year();
    let anchor = new_year_anchor_day(g_year);

    let mut e_year = g_year - 8;
    if date.month() > 9 || (date.month() == 9 && date.day_of_month() >= anchor) {
        e_year += 1;
    }

    // 1 Meskerem of e_year on the Gregorian calendar; the anchor day stays
    // the one keyed to the input year
    let new_year = Date::from_serial_unchecked(date::serial_from_ymd(e_year + 8, 9, anchor));

    let mut day_diff = new_year.days_between(date);
    if day_diff < 0 {
        // target precedes the computed anchor, so it belongs to the tail of
        // the previous Ethiopian year
        day_diff += 365;
        if (e_year + 7).rem_euclid(4) == 3 {
            day_diff += 1;
        }
    }

    let month = (day_diff / 30 + 1) as u8;
    let day = (day_diff % 30 + 1) as u8;
    EthiopianDate::from_ymd_unchecked(e_year, month, day)
}

/// Convert an Ethiopian date to the Gregorian calendar.
pub fn to_gregorian(date: EthiopianDate) -> Date {
    let g_year = date.year() + 7;
    let anchor = new_year_anchor_day(g_year);

    let days_from_new_year = (date.month() as i64 - 1) * 30 + (date.day() as i64 - 2);

    let new_year = Date::from_serial_unchecked(date::serial_from_ymd(g_year, 9, anchor));
    new_year.add_days(days_from_new_year)
}
