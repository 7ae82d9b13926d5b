//! Bahire Hasab year reckoning.
//!
//! The traditional computus of the Ethiopian church derives everything about
//! a year from the Amete Alem, the count of years since the creation of the
//! world: the Metene Rabiet quotient, the Evangelist whose name the year
//! carries, and the weekday on which 1 Meskerem (New Year) falls.

use crate::weekday::Weekday;

/// Years between the Amete Alem epoch and Ethiopian year 1.
const AMETE_ALEM_OFFSET: i32 = 5500;

/// The four Evangelists, cyclically associated with Ethiopian years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Evangelist {
    /// Matthew (Amete Alem ≡ 1 mod 4).
    Matthew,
    /// Mark (Amete Alem ≡ 2 mod 4).
    Mark,
    /// Luke (Amete Alem ≡ 3 mod 4) — the leap years.
    Luke,
    /// John (Amete Alem ≡ 0 mod 4).
    John,
}

impl Evangelist {
    /// Return the transliterated Amharic name (`"Matewos"`, `"Markos"`, …).
    pub fn amharic_name(&self) -> &'static str {
        match self {
            Evangelist::Matthew => "Matewos",
            Evangelist::Mark => "Markos",
            Evangelist::Luke => "Lukas",
            Evangelist::John => "Yohannes",
        }
    }
}

impl std::fmt::Display for Evangelist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Evangelist::Matthew => "Matthew",
            Evangelist::Mark => "Mark",
            Evangelist::Luke => "Luke",
            Evangelist::John => "John",
        };
        write!(f, "{name}")
    }
}

/// Derived properties of an Ethiopian year.
///
/// Recomputed on demand from the year; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMeta {
    /// Years since the creation of the world (`year + 5500`).
    pub amete_alem: i32,
    /// `amete_alem / 4`, the quotient used in the weekday formula.
    pub metene_rabiet: i32,
    /// The Evangelist whose name the year carries.
    pub evangelist: Evangelist,
    /// Weekday of 1 Meskerem.
    pub new_year_weekday: Weekday,
}

impl YearMeta {
    /// Compute the full reckoning for an Ethiopian year.
    pub fn for_year(year: i32) -> Self {
        let aa = amete_alem(year);
        YearMeta {
            amete_alem: aa,
            metene_rabiet: metene_rabiet(aa),
            evangelist: evangelist(aa),
            new_year_weekday: new_year_weekday(year),
        }
    }
}

/// Amete Alem ("year of the world") for an Ethiopian year.
pub fn amete_alem(year: i32) -> i32 {
    year + AMETE_ALEM_OFFSET
}

/// Metene Rabiet quotient for an Amete Alem count.
pub fn metene_rabiet(amete_alem: i32) -> i32 {
    amete_alem.div_euclid(4)
}

/// Evangelist associated with an Amete Alem count.
pub fn evangelist(amete_alem: i32) -> Evangelist {
    match amete_alem.rem_euclid(4) {
        1 => Evangelist::Matthew,
        2 => Evangelist::Mark,
        3 => Evangelist::Luke,
        _ => Evangelist::John,
    }
}

/// Weekday of 1 Meskerem for an Ethiopian year.
///
/// `(amete_alem + metene_rabiet) mod 7` with 0 = Monday.  This offset
/// formula replaces a Julian-day computation and must stay exactly as is
/// for the grid alignment to match.
pub fn new_year_weekday(year: i32) -> Weekday {
    let aa = amete_alem(year);
    let w = (aa + metene_rabiet(aa)).rem_euclid(7) as u8;
    Weekday::from_index(w).expect("rem_euclid always in 0..=6")
}
