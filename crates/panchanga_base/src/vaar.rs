//! Vaar (weekday): a 7-cycle keyed to the integral Julian Day Number.
//!
//! `(JDN + 1) mod 7` gives 0 for Sunday; no astronomy is involved.

/// The seven vaars, Ravivara (Sunday) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Vaar {
    Ravivara,
    Somavara,
    Mangalavara,
    Budhavara,
    Guruvara,
    Shukravara,
    Shanivara,
}

pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivara,
    Vaar::Somavara,
    Vaar::Mangalavara,
    Vaar::Budhavara,
    Vaar::Guruvara,
    Vaar::Shukravara,
    Vaar::Shanivara,
];

impl Vaar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivara => "Ravivara",
            Self::Somavara => "Somavara",
            Self::Mangalavara => "Mangalavara",
            Self::Budhavara => "Budhavara",
            Self::Guruvara => "Guruvara",
            Self::Shukravara => "Shukravara",
            Self::Shanivara => "Shanivara",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivara => "Sunday",
            Self::Somavara => "Monday",
            Self::Mangalavara => "Tuesday",
            Self::Budhavara => "Wednesday",
            Self::Guruvara => "Thursday",
            Self::Shukravara => "Friday",
            Self::Shanivara => "Saturday",
        }
    }

    /// 1-based number (Ravivara = 1 .. Shanivara = 7).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_number(number: u8) -> Option<Self> {
        ALL_VAARS.get((number as usize).checked_sub(1)?).copied()
    }
}

/// Vaar of the civil day with Julian Day Number `jdn`.
pub fn vaar_from_jdn(jdn: i64) -> Vaar {
    ALL_VAARS[(jdn + 1).rem_euclid(7) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_was_saturday() {
        assert_eq!(vaar_from_jdn(2_451_545), Vaar::Shanivara);
    }

    #[test]
    fn number_is_weekday_index_plus_one() {
        // 2024-01-15 (JDN 2460325) was a Monday: (JDN + 1) mod 7 = 1.
        let jdn = 2_460_325_i64;
        assert_eq!((jdn + 1).rem_euclid(7), 1);
        let vaar = vaar_from_jdn(jdn);
        assert_eq!(vaar, Vaar::Somavara);
        assert_eq!(vaar.number(), 2);
        assert_eq!(Vaar::from_number(2), Some(Vaar::Somavara));
    }

    #[test]
    fn known_monday() {
        // 2024-01-15
        assert_eq!(vaar_from_jdn(2_460_325), Vaar::Somavara);
        assert_eq!(Vaar::Somavara.english_name(), "Monday");
    }

    #[test]
    fn cycles_weekly() {
        for jdn in 2_460_000..2_460_014 {
            assert_eq!(vaar_from_jdn(jdn), vaar_from_jdn(jdn + 7));
            assert_ne!(vaar_from_jdn(jdn), vaar_from_jdn(jdn + 1));
        }
    }

    #[test]
    fn negative_jdn() {
        assert_eq!(vaar_from_jdn(-1), Vaar::Ravivara);
    }
}
