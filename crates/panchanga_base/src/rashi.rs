//! Rashi (zodiac sign): 12 equal 30-degree signs of the sidereal ecliptic.
//!
//! Unlike the lunar elements, rashi uses floor division: 0 deg opens Mesha.
//! Only the Sun's rashi is needed here, to name the lunar month.

use crate::util::normalize_360;

/// Span of one rashi in degrees.
pub const RASHI_SPAN_DEG: f64 = 30.0;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// 0-based rashi index for a sidereal longitude.
pub fn rashi_index(sidereal_lon_deg: f64) -> u8 {
    ((normalize_360(sidereal_lon_deg) / RASHI_SPAN_DEG).floor() as u8).min(11)
}

/// Rashi containing the given sidereal longitude.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> Rashi {
    ALL_RASHIS[rashi_index(sidereal_lon_deg) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_convention() {
        assert_eq!(rashi_from_longitude(0.0), Rashi::Mesha);
        assert_eq!(rashi_from_longitude(29.999), Rashi::Mesha);
        assert_eq!(rashi_from_longitude(30.0), Rashi::Vrishabha);
        assert_eq!(rashi_from_longitude(359.999), Rashi::Meena);
    }

    #[test]
    fn negative_wraps() {
        assert_eq!(rashi_from_longitude(-1.0), Rashi::Meena);
        assert_eq!(rashi_index(390.0), 1);
    }
}
