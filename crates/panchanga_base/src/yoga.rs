//! Yoga: 27 segments of the sidereal Sun + Moon longitude sum.
//!
//! The sum is normalized to [0, 360) before division; segments are 13 deg 20'.

use crate::nakshatra::NAKSHATRA_SPAN_27;
use crate::util::{normalize_360, segment_number};

/// Span of one yoga in degrees.
pub const YOGA_SEGMENT_DEG: f64 = NAKSHATRA_SPAN_27;

pub const YOGA_COUNT: u8 = 27;

/// The 27 yogas, Vishkambha first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Yoga {
    Vishkambha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyana,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkambha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyana,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkambha => "Vishkambha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyana => "Variyana",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    /// 1-based number (1..=27).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_number(number: u8) -> Option<Self> {
        ALL_YOGAS.get((number as usize).checked_sub(1)?).copied()
    }

    pub const fn all() -> &'static [Yoga; 27] {
        &ALL_YOGAS
    }
}

/// Sidereal Sun + Moon, normalized to [0, 360).
pub fn yoga_sum_deg(sun_sidereal_deg: f64, moon_sidereal_deg: f64) -> f64 {
    normalize_360(sun_sidereal_deg + moon_sidereal_deg)
}

/// Yoga number (1..=27) for a sidereal longitude sum.
pub fn yoga_number(sum_deg: f64) -> u8 {
    segment_number(sum_deg, YOGA_SEGMENT_DEG, YOGA_COUNT)
}

/// Yoga prevailing for the given sidereal longitude sum.
pub fn yoga_from_sum(sum_deg: f64) -> Yoga {
    ALL_YOGAS[(yoga_number(sum_deg) - 1) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_wraps_before_division() {
        let s = yoga_sum_deg(300.0, 105.0);
        assert!((s - 45.0).abs() < 1e-12);
        assert_eq!(yoga_from_sum(s), Yoga::Ayushman);
    }

    #[test]
    fn zero_sum_is_last() {
        assert_eq!(yoga_from_sum(0.0), Yoga::Vaidhriti);
        assert_eq!(yoga_number(0.01), 1);
    }

    #[test]
    fn numbers_roundtrip() {
        for y in ALL_YOGAS {
            assert_eq!(Yoga::from_number(y.number()), Some(y));
        }
    }
}
