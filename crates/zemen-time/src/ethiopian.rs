//! `EthiopianDate` type.
//!
//! The Ethiopian calendar has twelve 30-day months followed by the short
//! intercalary month Pagume (5 days, 6 in a leap year).  A year is a leap
//! year when it leaves remainder 3 on division by 4; there is no century
//! exception.

use crate::month::EthiopianMonth;
use zemen_core::errors::Result;
use zemen_core::invalid_date;

/// A date on the Ethiopian calendar.
///
/// Constructed through [`EthiopianDate::new`], which enforces the month and
/// day bounds (including the leap-dependent length of Pagume), so a value of
/// this type obtained from `new` always names a real day.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EthiopianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl EthiopianDate {
    /// Create a date from year (≥ 1), month (1–13), and day-of-month.
    ///
    /// Fails with `InvalidDate` if the day is outside its month (day 1–30
    /// for months 1–12; Pagume runs to day 5, or 6 in a leap year).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self> {
        if year < 1 {
            invalid_date!("Ethiopian year {year} out of range (must be >= 1)");
        }
        if !(1..=13).contains(&month) {
            invalid_date!("Ethiopian month {month} out of range [1, 13]");
        }
        let days_in = Self::days_in_month(year, month);
        if day == 0 || day > days_in {
            invalid_date!("day {day} out of range [1, {days_in}] for Ethiopian {year}-{month:02}");
        }
        Ok(EthiopianDate { year, month, day })
    }

    /// Create a date without bounds checks.
    ///
    /// Used by the Gregorian→Ethiopian conversion, which deliberately does
    /// not clamp its result: at year-end edge cases the converted day can
    /// exceed the Pagume bound, and that raw value is surfaced rather than
    /// silently adjusted.
    pub(crate) fn from_ymd_unchecked(year: i32, month: u8, day: u8) -> Self {
        EthiopianDate { year, month, day }
    }

    /// Whether an Ethiopian year is a leap year (`year mod 4 == 3`).
    pub fn is_leap_year(year: i32) -> bool {
        year.rem_euclid(4) == 3
    }

    /// Number of days in the given month of the given year.
    pub fn days_in_month(year: i32, month: u8) -> u8 {
        debug_assert!((1..=13).contains(&month));
        if month == 13 {
            if Self::is_leap_year(year) {
                6
            } else {
                5
            }
        } else {
            30
        }
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Return the month number (1–13).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Return `true` if this date's year is an Ethiopian leap year.
    pub fn is_leap(&self) -> bool {
        Self::is_leap_year(self.year)
    }
}

impl std::fmt::Display for EthiopianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match EthiopianMonth::from_number(self.month) {
            Some(m) => write!(f, "{} {} {}", self.day, m, self.year),
            None => write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day),
        }
    }
}

impl std::fmt::Debug for EthiopianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EthiopianDate({:04}-{:02}-{:02})",
            self.year, self.month, self.day
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_rule() {
        assert!(EthiopianDate::is_leap_year(2015));
        assert!(EthiopianDate::is_leap_year(2011));
        assert!(!EthiopianDate::is_leap_year(2016));
        assert!(!EthiopianDate::is_leap_year(2014));
        // no century exception on this calendar
        assert!(EthiopianDate::is_leap_year(1999));
    }

    #[test]
    fn pagume_bounds() {
        assert!(EthiopianDate::new(2015, 13, 6).is_ok()); // leap
        assert!(EthiopianDate::new(2015, 13, 7).is_err());
        assert!(EthiopianDate::new(2016, 13, 5).is_ok()); // non-leap
        assert!(EthiopianDate::new(2016, 13, 6).is_err());
        assert!(EthiopianDate::new(2016, 13, 7).is_err());
    }

    #[test]
    fn month_day_bounds() {
        assert!(EthiopianDate::new(2016, 1, 30).is_ok());
        assert!(EthiopianDate::new(2016, 1, 31).is_err());
        assert!(EthiopianDate::new(2016, 0, 1).is_err());
        assert!(EthiopianDate::new(2016, 14, 1).is_err());
        assert!(EthiopianDate::new(2016, 5, 0).is_err());
        assert!(EthiopianDate::new(0, 1, 1).is_err());
        assert!(EthiopianDate::new(-5, 1, 1).is_err());
    }

    #[test]
    fn display() {
        let d = EthiopianDate::new(2016, 1, 1).unwrap();
        assert_eq!(d.to_string(), "1 Meskerem 2016");
        assert_eq!(format!("{d:?}"), "EthiopianDate(2016-01-01)");
    }
}
