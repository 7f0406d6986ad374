//! Tithi (lunar day): 30 segments of Moon-Sun elongation, 12 deg each.
//!
//! Numbering uses the ceiling convention of [`segment_number`]: elongation
//! in (0, 12] is tithi 1 and an elongation of exactly 0 (new moon) closes
//! tithi 30 rather than opening tithi 1.

use crate::util::segment_number;

/// Span of one tithi in degrees of elongation.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Tithis per lunation.
pub const TITHI_COUNT: u8 = 30;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing half, tithis 1-15.
    Shukla,
    /// Waning half, tithis 16-30.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// The 30 tithis of a lunation, Shukla Pratipada first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Tithi {
    ShuklaPratipada,
    ShuklaDwitiya,
    ShuklaTritiya,
    ShuklaChaturthi,
    ShuklaPanchami,
    ShuklaShashthi,
    ShuklaSaptami,
    ShuklaAshtami,
    ShuklaNavami,
    ShuklaDashami,
    ShuklaEkadashi,
    ShuklaDwadashi,
    ShuklaTrayodashi,
    ShuklaChaturdashi,
    Purnima,
    KrishnaPratipada,
    KrishnaDwitiya,
    KrishnaTritiya,
    KrishnaChaturthi,
    KrishnaPanchami,
    KrishnaShashthi,
    KrishnaSaptami,
    KrishnaAshtami,
    KrishnaNavami,
    KrishnaDashami,
    KrishnaEkadashi,
    KrishnaDwadashi,
    KrishnaTrayodashi,
    KrishnaChaturdashi,
    Amavasya,
}

/// All 30 tithis in order (index 0 = Shukla Pratipada).
pub const ALL_TITHIS: [Tithi; 30] = [
    Tithi::ShuklaPratipada,
    Tithi::ShuklaDwitiya,
    Tithi::ShuklaTritiya,
    Tithi::ShuklaChaturthi,
    Tithi::ShuklaPanchami,
    Tithi::ShuklaShashthi,
    Tithi::ShuklaSaptami,
    Tithi::ShuklaAshtami,
    Tithi::ShuklaNavami,
    Tithi::ShuklaDashami,
    Tithi::ShuklaEkadashi,
    Tithi::ShuklaDwadashi,
    Tithi::ShuklaTrayodashi,
    Tithi::ShuklaChaturdashi,
    Tithi::Purnima,
    Tithi::KrishnaPratipada,
    Tithi::KrishnaDwitiya,
    Tithi::KrishnaTritiya,
    Tithi::KrishnaChaturthi,
    Tithi::KrishnaPanchami,
    Tithi::KrishnaShashthi,
    Tithi::KrishnaSaptami,
    Tithi::KrishnaAshtami,
    Tithi::KrishnaNavami,
    Tithi::KrishnaDashami,
    Tithi::KrishnaEkadashi,
    Tithi::KrishnaDwadashi,
    Tithi::KrishnaTrayodashi,
    Tithi::KrishnaChaturdashi,
    Tithi::Amavasya,
];

/// Day names shared by both pakshas; index 14 differs (Purnima/Amavasya).
const PAKSHA_DAY_NAMES: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

impl Tithi {
    /// 1-based number within the lunation (1..=30).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Tithi for a 1-based number; `None` outside 1..=30.
    pub fn from_number(number: u8) -> Option<Self> {
        ALL_TITHIS.get((number as usize).checked_sub(1)?).copied()
    }

    pub const fn paksha(self) -> Paksha {
        if (self as u8) < 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        }
    }

    /// 1-based day within the paksha (1..=15).
    pub const fn tithi_in_paksha(self) -> u8 {
        self as u8 % 15 + 1
    }

    /// Display name, e.g. "Shukla Ekadashi", "Purnima".
    pub fn name(self) -> String {
        match self {
            Self::Purnima => "Purnima".to_string(),
            Self::Amavasya => "Amavasya".to_string(),
            _ => format!(
                "{} {}",
                self.paksha().name(),
                PAKSHA_DAY_NAMES[(self.tithi_in_paksha() - 1) as usize]
            ),
        }
    }

    pub const fn all() -> &'static [Tithi; 30] {
        &ALL_TITHIS
    }
}

/// Tithi number (1..=30) for an elongation in degrees.
pub fn tithi_number(elongation_deg: f64) -> u8 {
    segment_number(elongation_deg, TITHI_SEGMENT_DEG, TITHI_COUNT)
}

/// Tithi prevailing at the given elongation.
pub fn tithi_from_elongation(elongation_deg: f64) -> Tithi {
    // segment_number never leaves 1..=30
    ALL_TITHIS[(tithi_number(elongation_deg) - 1) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_law() {
        assert_eq!(tithi_number(0.0), 30);
        assert_eq!(tithi_number(360.0), 30);
        assert_eq!(tithi_number(150.0), 13);
        assert_eq!(tithi_number(180.0), 15);
        assert_eq!(tithi_number(0.5), 1);
        assert_eq!(tithi_number(12.0), 1);
        assert_eq!(tithi_number(12.5), 2);
    }

    #[test]
    fn number_roundtrip() {
        for t in ALL_TITHIS {
            assert_eq!(Tithi::from_number(t.number()), Some(t));
        }
        assert_eq!(Tithi::from_number(0), None);
        assert_eq!(Tithi::from_number(31), None);
    }

    #[test]
    fn paksha_split() {
        assert_eq!(Tithi::Purnima.paksha(), Paksha::Shukla);
        assert_eq!(Tithi::KrishnaPratipada.paksha(), Paksha::Krishna);
        assert_eq!(Tithi::Amavasya.tithi_in_paksha(), 15);
        assert_eq!(Tithi::KrishnaPratipada.tithi_in_paksha(), 1);
    }

    #[test]
    fn names() {
        assert_eq!(Tithi::ShuklaEkadashi.name(), "Shukla Ekadashi");
        assert_eq!(Tithi::KrishnaChaturdashi.name(), "Krishna Chaturdashi");
        assert_eq!(Tithi::Amavasya.name(), "Amavasya");
        assert_eq!(tithi_from_elongation(0.0), Tithi::Amavasya);
    }
}
