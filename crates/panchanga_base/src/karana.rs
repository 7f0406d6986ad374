//! Karana (half-tithi): 60 segments of elongation, 6 deg each.
//!
//! The index arithmetic is uniform but naming is not. Karana 1 is the fixed
//! Kimstughna and karana 60 the fixed Naga; karanas 2-59 cycle through seven
//! movable names starting from Bava.

use crate::util::segment_number;

/// Span of one karana in degrees of elongation.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// Karanas per lunation.
pub const KARANA_COUNT: u8 = 60;

/// Karana names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Karana {
    Kimstughna,
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Gara,
    Vanija,
    Vishti,
    Naga,
}

/// The seven movable karanas in cycle order.
pub const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Gara,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kimstughna => "Kimstughna",
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Gara => "Gara",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Naga => "Naga",
        }
    }

    /// Karana for a 1-based sequence number; `None` outside 1..=60.
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Kimstughna),
            60 => Some(Self::Naga),
            2..=59 => Some(MOVABLE_KARANAS[((number - 2) % 7) as usize]),
            _ => None,
        }
    }

    /// Whether the karana occurs once per lunation.
    pub const fn is_fixed(self) -> bool {
        matches!(self, Self::Kimstughna | Self::Naga)
    }
}

/// Karana sequence number (1..=60) for an elongation in degrees.
pub fn karana_number(elongation_deg: f64) -> u8 {
    segment_number(elongation_deg, KARANA_SEGMENT_DEG, KARANA_COUNT)
}

/// Karana prevailing at the given elongation.
pub fn karana_from_elongation(elongation_deg: f64) -> Karana {
    match Karana::from_number(karana_number(elongation_deg)) {
        Some(k) => k,
        None => Karana::Naga,
    }
}
