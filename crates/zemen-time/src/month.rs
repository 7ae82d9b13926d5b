//! `Month` and `EthiopianMonth` — month-of-year enums for the two systems.
//!
//! Both are numbered from 1 and carry their fixed English / transliterated
//! name tables; no other localization is supported.

/// Gregorian month of the year, numbered 1–12 (January = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    /// January (1).
    January = 1,
    /// February (2).
    February = 2,
    /// March (3).
    March = 3,
    /// April (4).
    April = 4,
    /// May (5).
    May = 5,
    /// June (6).
    June = 6,
    /// July (7).
    July = 7,
    /// August (8).
    August = 8,
    /// September (9).
    September = 9,
    /// October (10).
    October = 10,
    /// November (11).
    November = 11,
    /// December (12).
    December = 12,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Construct from a number (1 = January … 12 = December).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1..=12 => Some(Self::ALL[n as usize - 1]),
            _ => None,
        }
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the full name (`"January"`, `"February"`, …).
    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Ethiopian month of the year, numbered 1–13 (Meskerem = 1, Pagume = 13).
///
/// Months 1–12 have 30 days each; Pagume has 5 days, or 6 in an Ethiopian
/// leap year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum EthiopianMonth {
    /// Meskerem (1) — the month of the Ethiopian New Year.
    Meskerem = 1,
    /// Tikimt (2).
    Tikimt = 2,
    /// Hidar (3).
    Hidar = 3,
    /// Tahisas (4).
    Tahisas = 4,
    /// Tir (5).
    Tir = 5,
    /// Yekatit (6).
    Yekatit = 6,
    /// Megabit (7).
    Megabit = 7,
    /// Miyazia (8).
    Miyazia = 8,
    /// Ginbot (9).
    Ginbot = 9,
    /// Sene (10).
    Sene = 10,
    /// Hamle (11).
    Hamle = 11,
    /// Nehase (12).
    Nehase = 12,
    /// Pagume (13) — the short intercalary month.
    Pagume = 13,
}

impl EthiopianMonth {
    /// All thirteen months in calendar order.
    pub const ALL: [EthiopianMonth; 13] = [
        EthiopianMonth::Meskerem,
        EthiopianMonth::Tikimt,
        EthiopianMonth::Hidar,
        EthiopianMonth::Tahisas,
        EthiopianMonth::Tir,
        EthiopianMonth::Yekatit,
        EthiopianMonth::Megabit,
        EthiopianMonth::Miyazia,
        EthiopianMonth::Ginbot,
        EthiopianMonth::Sene,
        EthiopianMonth::Hamle,
        EthiopianMonth::Nehase,
        EthiopianMonth::Pagume,
    ];

    /// Construct from a number (1 = Meskerem … 13 = Pagume).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1..=13 => Some(Self::ALL[n as usize - 1]),
            _ => None,
        }
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the transliterated name (`"Meskerem"`, `"Tikimt"`, …).
    pub fn name(&self) -> &'static str {
        match self {
            EthiopianMonth::Meskerem => "Meskerem",
            EthiopianMonth::Tikimt => "Tikimt",
            EthiopianMonth::Hidar => "Hidar",
            EthiopianMonth::Tahisas => "Tahisas",
            EthiopianMonth::Tir => "Tir",
            EthiopianMonth::Yekatit => "Yekatit",
            EthiopianMonth::Megabit => "Megabit",
            EthiopianMonth::Miyazia => "Miyazia",
            EthiopianMonth::Ginbot => "Ginbot",
            EthiopianMonth::Sene => "Sene",
            EthiopianMonth::Hamle => "Hamle",
            EthiopianMonth::Nehase => "Nehase",
            EthiopianMonth::Pagume => "Pagume",
        }
    }

    /// Number of days in this month for a year with the given leap status.
    pub fn days(&self, leap: bool) -> u8 {
        match self {
            EthiopianMonth::Pagume => {
                if leap {
                    6
                } else {
                    5
                }
            }
            _ => 30,
        }
    }
}

impl std::fmt::Display for EthiopianMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gregorian_roundtrip() {
        for n in 1..=12u8 {
            let m = Month::from_number(n).unwrap();
            assert_eq!(m.number(), n);
        }
    }

    #[test]
    fn ethiopian_roundtrip() {
        for n in 1..=13u8 {
            let m = EthiopianMonth::from_number(n).unwrap();
            assert_eq!(m.number(), n);
        }
    }

    #[test]
    fn out_of_range() {
        assert!(Month::from_number(0).is_none());
        assert!(Month::from_number(13).is_none());
        assert!(EthiopianMonth::from_number(0).is_none());
        assert!(EthiopianMonth::from_number(14).is_none());
    }

    #[test]
    fn pagume_days() {
        assert_eq!(EthiopianMonth::Pagume.days(false), 5);
        assert_eq!(EthiopianMonth::Pagume.days(true), 6);
        assert_eq!(EthiopianMonth::Meskerem.days(true), 30);
        assert_eq!(EthiopianMonth::Nehase.days(false), 30);
    }
}
