//! Fixed-date Ethiopian holidays.
//!
//! The major holidays all fall on fixed Ethiopian calendar dates; the one
//! wrinkle is Christmas (Gena), which moves from 29 to 28 Tahisas in a leap
//! year.

use crate::ethiopian::EthiopianDate;

/// A fixed-date holiday rule.
///
/// `leap` restricts the rule to leap (`Some(true)`) or non-leap
/// (`Some(false)`) years; `None` applies to every year.
#[derive(Debug, Clone, Copy)]
pub struct HolidayRule {
    /// Ethiopian month (1–13).
    pub month: u8,
    /// Day of the month.
    pub day: u8,
    /// Leap-year restriction, if any.
    pub leap: Option<bool>,
    /// Holiday name.
    pub name: &'static str,
}

/// The fixed holiday table.
pub const FIXED_HOLIDAYS: [HolidayRule; 8] = [
    HolidayRule { month: 1, day: 1, leap: None, name: "New Year (Enkutatash)" },
    HolidayRule { month: 1, day: 17, leap: None, name: "Meskel" },
    HolidayRule { month: 4, day: 29, leap: Some(false), name: "Christmas (Gena)" },
    HolidayRule { month: 4, day: 28, leap: Some(true), name: "Christmas (Gena)" },
    HolidayRule { month: 5, day: 11, leap: None, name: "Epiphany (Timket)" },
    HolidayRule { month: 6, day: 23, leap: None, name: "Adwa Victory Day" },
    HolidayRule { month: 8, day: 23, leap: None, name: "Labour Day" },
    HolidayRule { month: 8, day: 27, leap: None, name: "Patriots' Victory Day" },
];

/// Return the holiday falling on the given Ethiopian date, if any.
pub fn holiday_for(year: i32, month: u8, day: u8) -> Option<&'static str> {
    let leap = EthiopianDate::is_leap_year(year);
    FIXED_HOLIDAYS
        .iter()
        .find(|r| r.month == month && r.day == day && r.leap.map_or(true, |l| l == leap))
        .map(|r| r.name)
}

/// Return the (day, name) pairs of all holidays in the given month,
/// in day order.
pub fn holidays_in_month(year: i32, month: u8) -> Vec<(u8, &'static str)> {
    let leap = EthiopianDate::is_leap_year(year);
    let mut list: Vec<_> = FIXED_HOLIDAYS
        .iter()
        .filter(|r| r.month == month && r.leap.map_or(true, |l| l == leap))
        .map(|r| (r.day, r.name))
        .collect();
    list.sort_unstable_by_key(|&(day, _)| day);
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_dates() {
        assert_eq!(holiday_for(2016, 1, 1), Some("New Year (Enkutatash)"));
        assert_eq!(holiday_for(2016, 1, 17), Some("Meskel"));
        assert_eq!(holiday_for(2016, 5, 11), Some("Epiphany (Timket)"));
        assert_eq!(holiday_for(2016, 6, 23), Some("Adwa Victory Day"));
        assert_eq!(holiday_for(2016, 8, 23), Some("Labour Day"));
        assert_eq!(holiday_for(2016, 8, 27), Some("Patriots' Victory Day"));
        assert_eq!(holiday_for(2016, 2, 14), None);
        assert_eq!(holiday_for(2016, 13, 5), None);
    }

    #[test]
    fn christmas_moves_in_leap_years() {
        // 2015 is leap, 2016 is not
        assert_eq!(holiday_for(2015, 4, 28), Some("Christmas (Gena)"));
        assert_eq!(holiday_for(2015, 4, 29), None);
        assert_eq!(holiday_for(2016, 4, 29), Some("Christmas (Gena)"));
        assert_eq!(holiday_for(2016, 4, 28), None);
    }

    #[test]
    fn month_listing() {
        assert_eq!(
            holidays_in_month(2016, 1),
            vec![(1, "New Year (Enkutatash)"), (17, "Meskel")]
        );
        assert_eq!(holidays_in_month(2016, 4), vec![(29, "Christmas (Gena)")]);
        assert_eq!(holidays_in_month(2015, 4), vec![(28, "Christmas (Gena)")]);
        assert_eq!(
            holidays_in_month(2016, 8),
            vec![(23, "Labour Day"), (27, "Patriots' Victory Day")]
        );
        assert!(holidays_in_month(2016, 13).is_empty());
    }
}
