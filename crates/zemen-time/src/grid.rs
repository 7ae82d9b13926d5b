//! Calendar grids.
//!
//! A grid is a pure presentation value: an ordered list of month-grids whose
//! cells carry the day number, the weekday column, and an optional holiday
//! name.  `Display` renders a grid the way the reference program prints it,
//! with holiday days flagged by a `*` suffix and listed under the month.
//!
//! Column conventions differ between the two systems and are kept as the
//! reference has them: Ethiopian weeks run Monday (column 0) to Sunday,
//! Gregorian weeks Sunday (column 0) to Saturday.

use crate::bahire_hasab::{self, YearMeta};
use crate::date::{self, Date};
use crate::ethiopian::EthiopianDate;
use crate::holidays;
use crate::month::{EthiopianMonth, Month};

/// Which calendar system a grid was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarSystem {
    /// The Ethiopian calendar (13 months, Monday-first weeks).
    Ethiopian,
    /// The Gregorian calendar (12 months, Sunday-first weeks).
    Gregorian,
}

/// One day in a month-grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// Day of the month.
    pub day: u8,
    /// Weekday column, 0–6 in the grid's column convention.
    pub column: u8,
    /// Holiday falling on this day, if any.
    pub holiday: Option<&'static str>,
}

/// A single month laid out on a weekday grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    name: &'static str,
    year: i32,
    system: CalendarSystem,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Month name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Year the month belongs to.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Day cells in day order.
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// Weekday column of day 1.
    pub fn start_column(&self) -> u8 {
        self.cells.first().map_or(0, |c| c.column)
    }

    /// Holidays in this month as (day, name) pairs, in day order.
    pub fn holidays(&self) -> Vec<(u8, &'static str)> {
        self.cells
            .iter()
            .filter_map(|c| c.holiday.map(|name| (c.day, name)))
            .collect()
    }
}

/// A full year of month-grids for one calendar system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    system: CalendarSystem,
    year: i32,
    months: Vec<MonthGrid>,
}

impl CalendarGrid {
    /// The calendar system the grid was built for.
    pub fn system(&self) -> CalendarSystem {
        self.system
    }

    /// The year the grid covers.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month-grids in calendar order (13 Ethiopian, 12 Gregorian).
    pub fn months(&self) -> &[MonthGrid] {
        &self.months
    }
}

// ── Builders ──────────────────────────────────────────────────────────────────

/// Build the grid for an entire Ethiopian year.
///
/// The first month starts at the Bahire Hasab New Year weekday; each later
/// month starts where the previous one left off, wrapping at the week.
/// Every cell is annotated with its holiday, if any.
pub fn ethiopian_year_grid(year: i32) -> CalendarGrid {
    let leap = EthiopianDate::is_leap_year(year);
    let mut start = bahire_hasab::new_year_weekday(year).index();
    let mut months = Vec::with_capacity(13);
    for month in EthiopianMonth::ALL {
        let days = month.days(leap);
        months.push(ethiopian_month_grid(month, start, days, year));
        start = (start + days) % 7;
    }
    CalendarGrid {
        system: CalendarSystem::Ethiopian,
        year,
        months,
    }
}

/// Lay out one Ethiopian month: day 1 at column `start_column` (0 = Monday),
/// columns advancing by one per day and wrapping at 7.
pub fn ethiopian_month_grid(
    month: EthiopianMonth,
    start_column: u8,
    days: u8,
    year: i32,
) -> MonthGrid {
    let mut cells = Vec::with_capacity(days as usize);
    let mut column = start_column % 7;
    for day in 1..=days {
        cells.push(DayCell {
            day,
            column,
            holiday: holidays::holiday_for(year, month.number(), day),
        });
        column = (column + 1) % 7;
    }
    MonthGrid {
        name: month.name(),
        year,
        system: CalendarSystem::Ethiopian,
        cells,
    }
}

/// Build the grid for an entire Gregorian year.
///
/// Unlike the Ethiopian builder, each month's start column is computed
/// directly from the proleptic weekday of its first day (0 = Sunday), not
/// carried over from the previous month.  No holiday annotations.
pub fn gregorian_year_grid(year: i32) -> CalendarGrid {
    let mut months = Vec::with_capacity(12);
    for month in Month::ALL {
        let first =
            Date::from_serial_unchecked(date::serial_from_ymd(year, month.number(), 1));
        let mut column = first.weekday().ordinal() % 7; // 0 = Sunday
        let days = date::days_in_month(year, month.number());
        let mut cells = Vec::with_capacity(days as usize);
        for day in 1..=days {
            cells.push(DayCell {
                day,
                column,
                holiday: None,
            });
            column = (column + 1) % 7;
        }
        months.push(MonthGrid {
            name: month.name(),
            year,
            system: CalendarSystem::Gregorian,
            cells,
        });
    }
    CalendarGrid {
        system: CalendarSystem::Gregorian,
        year,
        months,
    }
}

/// Build a year grid for either system.
pub fn year_grid(system: CalendarSystem, year: i32) -> CalendarGrid {
    match system {
        CalendarSystem::Ethiopian => ethiopian_year_grid(year),
        CalendarSystem::Gregorian => gregorian_year_grid(year),
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn header_row(system: CalendarSystem) -> &'static str {
    match system {
        CalendarSystem::Ethiopian => "Mon Tue Wed Thu Fri Sat Sun",
        CalendarSystem::Gregorian => "Sun Mon Tue Wed Thu Fri Sat",
    }
}

impl std::fmt::Display for MonthGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.system {
            CalendarSystem::Ethiopian => writeln!(f, "\n{} {}", self.name, self.year)?,
            CalendarSystem::Gregorian => writeln!(f, "\n  {} {}", self.name, self.year)?,
        }
        writeln!(f, "{}", header_row(self.system))?;

        for _ in 0..self.start_column() {
            write!(f, "    ")?;
        }
        for cell in &self.cells {
            if cell.holiday.is_some() {
                write!(f, "{:>2}* ", cell.day)?;
            } else {
                write!(f, "{:>3} ", cell.day)?;
            }
            if cell.column == 6 {
                writeln!(f)?;
            }
        }
        writeln!(f)?;

        let holidays = self.holidays();
        if !holidays.is_empty() {
            writeln!(f, "Holidays this month:")?;
            for (day, name) in holidays {
                writeln!(f, "{day} - {name}")?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for CalendarGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.system {
            CalendarSystem::Ethiopian => {
                let meta = YearMeta::for_year(self.year);
                writeln!(f, "\nYear: {}", self.year)?;
                writeln!(f, "Amete Alem: {}", meta.amete_alem)?;
                writeln!(f, "Evangelist: {}", meta.evangelist.amharic_name())?;
                writeln!(
                    f,
                    "First day of Meskerem: {}",
                    meta.new_year_weekday.short_name()
                )?;
            }
            CalendarSystem::Gregorian => {
                writeln!(f, "\nGregorian Calendar for {}", self.year)?;
            }
        }
        for month in &self.months {
            write!(f, "{month}")?;
        }
        Ok(())
    }
}
