//! Celestial position model: truncated mean-element series for the Sun and Moon.
//!
//! All functions take a Julian Date and evaluate polynomials in Julian
//! centuries since J2000.0. The series are deliberately short: the target
//! is tithi/nakshatra boundaries correct to within minutes, not arcsecond
//! positions.
//!
//! Sources: Meeus, *Astronomical Algorithms* (2nd ed.), ch. 25 (solar
//! coordinates, low accuracy) and ch. 47 (lunar fundamental arguments and
//! the leading periodic terms).

use panchanga_time::jd_to_centuries;

use crate::ayanamsha::{AyanamshaSystem, ayanamsha_at_jd};
use crate::util::{normalize_360, normalize_to_pm180};

/// Source of solar and lunar positions consumed by the derivation engine.
///
/// All longitudes are tropical, geocentric, in degrees [0, 360). A
/// higher-fidelity model can be substituted without touching any caller.
pub trait Ephemeris: Send + Sync {
    /// Tropical ecliptic longitude of the Sun.
    fn sun_longitude_deg(&self, jd: f64) -> f64;

    /// Tropical ecliptic longitude of the Moon.
    fn moon_longitude_deg(&self, jd: f64) -> f64;

    /// Ecliptic latitude of the Moon, degrees in roughly [-5.3, 5.3].
    fn moon_latitude_deg(&self, jd: f64) -> f64;

    /// Sidereal correction subtracted from tropical longitudes.
    fn ayanamsha_deg(&self, jd: f64) -> f64;

    /// Obliquity of the ecliptic.
    fn obliquity_deg(&self, jd: f64) -> f64 {
        obliquity_deg(jd)
    }

    /// Equation of time in minutes (apparent minus mean solar time).
    fn equation_of_time_min(&self, jd: f64) -> f64 {
        equation_of_time_min(jd)
    }
}

/// The built-in truncated-series model with a configurable ayanamsha system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeanElementEphemeris {
    pub ayanamsha: AyanamshaSystem,
}

impl MeanElementEphemeris {
    pub fn new(ayanamsha: AyanamshaSystem) -> Self {
        Self { ayanamsha }
    }
}

impl Ephemeris for MeanElementEphemeris {
    fn sun_longitude_deg(&self, jd: f64) -> f64 {
        sun_longitude_deg(jd)
    }

    fn moon_longitude_deg(&self, jd: f64) -> f64 {
        moon_longitude_deg(jd)
    }

    fn moon_latitude_deg(&self, jd: f64) -> f64 {
        moon_latitude_deg(jd)
    }

    fn ayanamsha_deg(&self, jd: f64) -> f64 {
        ayanamsha_at_jd(self.ayanamsha, jd)
    }
}

// ---------------------------------------------------------------------------
// Sun
// ---------------------------------------------------------------------------

/// Geometric mean longitude of the Sun (L0), degrees [0, 360).
pub fn sun_mean_longitude_deg(t: f64) -> f64 {
    normalize_360(280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t)
}

/// Mean anomaly of the Sun (M), degrees [0, 360).
pub fn sun_mean_anomaly_deg(t: f64) -> f64 {
    normalize_360(357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t)
}

/// Equation of center (C) in degrees for mean anomaly `m_deg`.
///
/// Each amplitude decays slowly with `t` as the Earth's orbital
/// eccentricity decreases.
pub fn sun_equation_of_center_deg(t: f64, m_deg: f64) -> f64 {
    let m = m_deg.to_radians();
    (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin()
}

/// Tropical ecliptic longitude of the Sun (true longitude L0 + C).
pub fn sun_longitude_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let m = sun_mean_anomaly_deg(t);
    normalize_360(sun_mean_longitude_deg(t) + sun_equation_of_center_deg(t, m))
}

// ---------------------------------------------------------------------------
// Moon
// ---------------------------------------------------------------------------

/// Fundamental lunar arguments, all in degrees [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarArguments {
    /// Moon's mean longitude (L').
    pub mean_longitude: f64,
    /// Mean elongation of the Moon from the Sun (D).
    pub elongation: f64,
    /// Sun's mean anomaly (M).
    pub sun_anomaly: f64,
    /// Moon's mean anomaly (M').
    pub moon_anomaly: f64,
    /// Moon's argument of latitude (F).
    pub latitude_argument: f64,
}

impl LunarArguments {
    /// Evaluate the quartic polynomials at `t` centuries since J2000.0.
    pub fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        Self {
            mean_longitude: normalize_360(
                218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
                    - t4 / 65_194_000.0,
            ),
            elongation: normalize_360(
                297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
                    - t4 / 113_065_000.0,
            ),
            sun_anomaly: normalize_360(
                357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0,
            ),
            moon_anomaly: normalize_360(
                134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
                    - t4 / 14_712_000.0,
            ),
            latitude_argument: normalize_360(
                93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
                    + t4 / 863_310_000.0,
            ),
        }
    }

    /// Angle `d*D + m*M + mp*M' + f*F` in radians.
    fn combine(&self, d: i8, m: i8, mp: i8, f: i8) -> f64 {
        (d as f64 * self.elongation
            + m as f64 * self.sun_anomaly
            + mp as f64 * self.moon_anomaly
            + f as f64 * self.latitude_argument)
            .to_radians()
    }
}

/// Leading periodic terms in lunar longitude.
#[rustfmt::skip]
const LONGITUDE_TERMS: [(i8, i8, i8, i8, f64); 4] = [
    //  D   M   M'  F    amplitude (deg)
    (   0,  0,  1,  0,   6.288_774),
    (   2,  0, -1,  0,   1.274_027),
    (   2,  0,  0,  0,   0.658_314),
    (   0,  1,  0,  0,  -0.185_116),
];

/// Leading periodic terms in lunar latitude.
#[rustfmt::skip]
const LATITUDE_TERMS: [(i8, i8, i8, i8, f64); 3] = [
    //  D   M   M'  F    amplitude (deg)
    (   0,  0,  0,  1,   5.128_122),
    (   0,  0,  1,  1,   0.280_602),
    (   0,  0,  1, -1,   0.277_693),
];

fn sum_terms(args: &LunarArguments, terms: &[(i8, i8, i8, i8, f64)]) -> f64 {
    terms
        .iter()
        .map(|&(d, m, mp, f, amp)| amp * args.combine(d, m, mp, f).sin())
        .sum()
}

/// Tropical ecliptic longitude of the Moon.
pub fn moon_longitude_deg(jd: f64) -> f64 {
    let args = LunarArguments::at(jd_to_centuries(jd));
    normalize_360(args.mean_longitude + sum_terms(&args, &LONGITUDE_TERMS))
}

/// Ecliptic latitude of the Moon (unnormalized, small signed angle).
pub fn moon_latitude_deg(jd: f64) -> f64 {
    let args = LunarArguments::at(jd_to_centuries(jd));
    sum_terms(&args, &LATITUDE_TERMS)
}

// ---------------------------------------------------------------------------
// Earth orientation
// ---------------------------------------------------------------------------

/// Mean obliquity of the ecliptic, linear in `t`.
pub fn obliquity_deg(jd: f64) -> f64 {
    23.4393 - 0.013 * jd_to_centuries(jd)
}

/// Equatorial right ascension and declination (degrees) of an ecliptic point.
///
/// RA is in [0, 360); declination in [-90, 90].
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    let (lon, lat, eps) = (
        lon_deg.to_radians(),
        lat_deg.to_radians(),
        obliquity_deg.to_radians(),
    );
    let ra = (lon.sin() * eps.cos() - lat.tan() * eps.sin()).atan2(lon.cos());
    let dec = (lat.sin() * eps.cos() + lat.cos() * eps.sin() * lon.sin())
        .clamp(-1.0, 1.0)
        .asin();
    (normalize_360(ra.to_degrees()), dec.to_degrees())
}

/// Equation of time in minutes: apparent solar time minus mean solar time.
///
/// `EoT = 4 * (L0 - 0.0057183 - alpha)` with alpha the Sun's right ascension.
/// Stays within about +/-17 minutes.
pub fn equation_of_time_min(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let (alpha, _) = ecliptic_to_equatorial(sun_longitude_deg(jd), 0.0, obliquity_deg(jd));
    4.0 * normalize_to_pm180(sun_mean_longitude_deg(t) - 0.005_718_3 - alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use panchanga_time::J2000_JD;

    #[test]
    fn sun_at_j2000() {
        // L0 = 280.46646, M = 357.52911, C ~ -0.0856
        let lon = sun_longitude_deg(J2000_JD);
        assert!((lon - 280.381).abs() < 0.01, "sun = {lon}");
    }

    #[test]
    fn sun_near_march_equinox_2024() {
        // 2024-03-20 03:06 UT
        let lon = sun_longitude_deg(2_460_389.629);
        let d = normalize_to_pm180(lon);
        assert!(d.abs() < 0.05, "sun at equinox = {lon}");
    }

    #[test]
    fn moon_at_j2000() {
        // Full series gives 223.32; four terms are within half a degree.
        let lon = moon_longitude_deg(J2000_JD);
        assert!((lon - 223.3).abs() < 0.5, "moon = {lon}");
    }

    #[test]
    fn moon_latitude_bounded() {
        let mut jd = J2000_JD;
        while jd < J2000_JD + 3660.0 {
            let b = moon_latitude_deg(jd);
            assert!(b.abs() < 5.8, "latitude {b} at {jd}");
            jd += 0.37;
        }
    }

    #[test]
    fn longitudes_in_range() {
        let mut jd = 2_415_020.5;
        while jd < 2_488_070.5 {
            let s = sun_longitude_deg(jd);
            let m = moon_longitude_deg(jd);
            assert!((0.0..360.0).contains(&s), "sun {s}");
            assert!((0.0..360.0).contains(&m), "moon {m}");
            jd += 97.3;
        }
    }

    #[test]
    fn obliquity_j2000() {
        assert!((obliquity_deg(J2000_JD) - 23.4393).abs() < 1e-12);
    }

    #[test]
    fn equatorial_solstice() {
        let (ra, dec) = ecliptic_to_equatorial(90.0, 0.0, 23.4393);
        assert!((ra - 90.0).abs() < 1e-9);
        assert!((dec - 23.4393).abs() < 1e-9);
    }

    #[test]
    fn equation_of_time_extremes() {
        // Early November: about +16.4 min. Mid February: about -14.2 min.
        let nov = equation_of_time_min(2_460_618.5); // 2024-11-03
        let feb = equation_of_time_min(2_460_355.5); // 2024-02-14
        assert!((nov - 16.4).abs() < 0.5, "nov eot = {nov}");
        assert!((feb + 14.2).abs() < 0.5, "feb eot = {feb}");
    }

    #[test]
    fn trait_object_dispatch() {
        let eph: &dyn Ephemeris = &MeanElementEphemeris::default();
        assert_eq!(eph.sun_longitude_deg(J2000_JD), sun_longitude_deg(J2000_JD));
        assert!((eph.ayanamsha_deg(J2000_JD) - 23.853).abs() < 1e-12);
    }
}
