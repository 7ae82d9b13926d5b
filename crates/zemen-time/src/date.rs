//! Gregorian `Date` type.
//!
//! A date is a serial number of days in the proleptic Gregorian calendar.
//! Serial 1 = January 1, year 1, which is a Monday, so the weekday falls
//! straight out of the serial number with no table lookup.  All date
//! differences and day additions are plain integer arithmetic on the serial,
//! which keeps the conversion and grid code free of any platform calendar
//! utility.

use crate::month::Month;
use crate::weekday::Weekday;
use zemen_core::errors::Result;
use zemen_core::invalid_date;

/// A proleptic Gregorian calendar date represented as a serial day number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i64);

impl Date {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month.
    ///
    /// Any `i32` year is accepted (years ≤ 0 follow the proleptic
    /// convention, year 0 = 1 BC).  Fails with `InvalidDate` if the month
    /// or day does not exist on the calendar.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            invalid_date!("month {month} out of range [1, 12]");
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            invalid_date!("day {day} out of range [1, {days_in}] for {year}-{month:02}");
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from an (unchecked) serial number.
    pub(crate) fn from_serial_unchecked(serial: i64) -> Self {
        Date(serial)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i64 {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (0001-01-01) is a Monday; serial 2 a Tuesday, …
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` calendar days (negative `n` goes backwards).
    pub fn add_days(self, n: i64) -> Self {
        Date(self.0 + n)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i64 {
        other.0 - self.0
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i64> for Date {
    type Output = Self;
    fn add(self, rhs: i64) -> Self {
        self.add_days(rhs)
    }
}

impl std::ops::Sub<i64> for Date {
    type Output = Self;
    fn sub(self, rhs: i64) -> Self {
        self.add_days(-rhs)
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> i64 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        match Month::from_number(m) {
            Some(mon) => write!(f, "{d} {mon} {y}"),
            None => write!(f, "{y:04}-{m:02}-{d:02}"),
        }
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// Whether a Gregorian year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given Gregorian month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to a serial day number (serial 1 = 0001-01-01).
pub(crate) fn serial_from_ymd(year: i32, month: u8, day: u8) -> i64 {
    let y = year as i64 - 1;
    // Whole days in years 1..year (proleptic leap rule, Euclidean division
    // so years <= 0 work too)
    let mut serial = y * 365 + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400);
    serial += MONTH_OFFSET[month as usize - 1] as i64;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i64
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i64) -> (i32, u8, u8) {
    // 146097 days per 400-year cycle; the estimate is off by at most one
    let mut y = (((serial - 1) * 400).div_euclid(146_097) + 1) as i32;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1; // 1-based day of year
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i64;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────
