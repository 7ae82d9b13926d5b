//! Grid-builder integration tests.

use proptest::prelude::*;
use zemen_time::bahire_hasab::{self, Evangelist};
use zemen_time::{
    year_grid, CalendarSystem, Date, EthiopianDate, EthiopianMonth, Weekday,
};

// ─── Ethiopian grids ──────────────────────────────────────────────────────────

#[test]
fn thirteen_months_always() {
    for year in [1, 1999, 2015, 2016, 2100] {
        let grid = year_grid(CalendarSystem::Ethiopian, year);
        assert_eq!(grid.months().len(), 13);
        assert_eq!(grid.year(), year);
        let pagume = &grid.months()[12];
        let expected = if EthiopianDate::is_leap_year(year) { 6 } else { 5 };
        assert_eq!(pagume.cells().len(), expected, "Pagume length for {year}");
        assert_eq!(pagume.name(), "Pagume");
    }
}

#[test]
fn month_names_in_order() {
    let grid = year_grid(CalendarSystem::Ethiopian, 2016);
    for (month, grid_month) in EthiopianMonth::ALL.iter().zip(grid.months()) {
        assert_eq!(grid_month.name(), month.name());
    }
}

#[test]
fn holiday_annotations_follow_leap_rule() {
    // 2015 is leap: Christmas on 28 Tahisas; 2016 is not: 29 Tahisas
    let leap = year_grid(CalendarSystem::Ethiopian, 2015);
    assert_eq!(
        leap.months()[3].holidays(),
        vec![(28, "Christmas (Gena)")]
    );
    let plain = year_grid(CalendarSystem::Ethiopian, 2016);
    assert_eq!(
        plain.months()[3].holidays(),
        vec![(29, "Christmas (Gena)")]
    );
    assert_eq!(
        plain.months()[0].holidays(),
        vec![(1, "New Year (Enkutatash)"), (17, "Meskel")]
    );
    assert_eq!(
        plain.months()[7].holidays(),
        vec![(23, "Labour Day"), (27, "Patriots' Victory Day")]
    );
}

#[test]
fn new_year_weekday_drives_alignment() {
    // 1 Meskerem 2016 = 2023-09-12, a Tuesday (column 1, Monday-first)
    assert_eq!(bahire_hasab::new_year_weekday(2016), Weekday::Tuesday);
    let grid = year_grid(CalendarSystem::Ethiopian, 2016);
    assert_eq!(grid.months()[0].start_column(), 1);
}

// ─── Gregorian grids ──────────────────────────────────────────────────────────

#[test]
fn february_length_tracks_leap_years() {
    assert_eq!(
        year_grid(CalendarSystem::Gregorian, 2024).months()[1].cells().len(),
        29
    );
    assert_eq!(
        year_grid(CalendarSystem::Gregorian, 2023).months()[1].cells().len(),
        28
    );
    assert_eq!(
        year_grid(CalendarSystem::Gregorian, 1900).months()[1].cells().len(),
        28
    );
    assert_eq!(
        year_grid(CalendarSystem::Gregorian, 2000).months()[1].cells().len(),
        29
    );
}

#[test]
fn gregorian_columns_match_weekdays() {
    let grid = year_grid(CalendarSystem::Gregorian, 2023);
    for grid_month in grid.months() {
        for cell in grid_month.cells() {
            let date = Date::from_ymd(2023, month_number(grid_month.name()), cell.day).unwrap();
            // Sunday-first columns: Sunday = 0, Saturday = 6
            assert_eq!(cell.column, date.weekday().ordinal() % 7);
        }
    }
}

fn month_number(name: &str) -> u8 {
    let names = [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ];
    names.iter().position(|&n| n == name).unwrap() as u8 + 1
}

#[test]
fn gregorian_grid_has_no_holidays() {
    let grid = year_grid(CalendarSystem::Gregorian, 2023);
    for grid_month in grid.months() {
        assert!(grid_month.holidays().is_empty());
    }
}

// ─── Rendering ────────────────────────────────────────────────────────────────

#[test]
fn rendered_ethiopian_year() {
    let out = year_grid(CalendarSystem::Ethiopian, 2016).to_string();
    assert!(out.contains("Year: 2016"));
    assert!(out.contains("Amete Alem: 7516"));
    assert!(out.contains("Evangelist: Yohannes"));
    assert!(out.contains("First day of Meskerem: Tue"));
    assert!(out.contains("Meskerem 2016"));
    assert!(out.contains("Pagume 2016"));
    assert!(out.contains(" 1* "));
    assert!(out.contains("11 - Epiphany (Timket)"));
    assert_eq!(bahire_hasab::evangelist(7516), Evangelist::John);
}

#[test]
fn rendered_gregorian_year() {
    let out = year_grid(CalendarSystem::Gregorian, 2023).to_string();
    assert!(out.contains("Gregorian Calendar for 2023"));
    assert!(out.contains("  January 2023"));
    assert!(out.contains("  December 2023"));
    assert!(out.contains("Sun Mon Tue Wed Thu Fri Sat"));
    assert!(!out.contains('*'));
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn ethiopian_grid_shape(year in 1i32..5000) {
        let grid = year_grid(CalendarSystem::Ethiopian, year);
        prop_assert_eq!(grid.months().len(), 13);
        let pagume = grid.months()[12].cells().len();
        prop_assert_eq!(pagume == 6, EthiopianDate::is_leap_year(year));
        // months start where the previous one stopped
        for pair in grid.months().windows(2) {
            let expected = (pair[0].start_column() + pair[0].cells().len() as u8) % 7;
            prop_assert_eq!(pair[1].start_column(), expected);
        }
    }

    #[test]
    fn columns_always_in_range(year in 1i32..5000) {
        for grid_month in year_grid(CalendarSystem::Gregorian, year).months() {
            for cell in grid_month.cells() {
                prop_assert!(cell.column <= 6);
            }
        }
    }

    #[test]
    fn evangelist_period_four(year in 1i32..10_000) {
        let aa = bahire_hasab::amete_alem(year);
        prop_assert_eq!(
            bahire_hasab::evangelist(aa),
            bahire_hasab::evangelist(bahire_hasab::amete_alem(year + 4))
        );
        prop_assert_ne!(
            bahire_hasab::evangelist(aa),
            bahire_hasab::evangelist(bahire_hasab::amete_alem(year + 1))
        );
    }
}
