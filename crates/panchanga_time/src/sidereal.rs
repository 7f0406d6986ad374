//! Earth rotation: Greenwich Mean Sidereal Time in degrees.
//!
//! Needed to turn a body's right ascension into a local hour angle. The
//! engine does not distinguish UT1 from UTC; the difference (< 0.9 s) is far
//! below what the rise/set model resolves.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

/// Earth's rotation rate relative to the mean equinox, degrees per day.
pub const SIDEREAL_RATE_DEG_PER_DAY: f64 = 360.0 * 1.002_737_811_911_354_6;

/// Earth Rotation Angle in degrees [0, 360).
///
/// `theta = 360 * (0.7790572732640 + 1.00273781191135448 * Du)`, with
/// `Du = JD - 2451545.0`.
pub fn earth_rotation_angle_deg(jd: f64) -> f64 {
    let du = jd - J2000_JD;
    // Split off whole days first so the fractional turn keeps full precision.
    let turns = 0.779_057_273_264_0 + 0.002_737_811_911_354_6 * du + du.fract();
    (turns.rem_euclid(1.0)) * 360.0
}

/// Greenwich Mean Sidereal Time in degrees [0, 360).
///
/// GMST = ERA + polynomial(T) where the polynomial (arcseconds) is
/// `0.014506 + 4612.156534 T + 1.3915817 T^2 - 0.00000044 T^3
///  - 0.000029956 T^4 - 0.0000000368 T^5`.
pub fn gmst_deg(jd: f64) -> f64 {
    let t = (jd - J2000_JD) / DAYS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;

    (earth_rotation_angle_deg(jd) + poly_arcsec / 3600.0).rem_euclid(360.0)
}

/// Local mean sidereal time in degrees [0, 360), east longitude positive.
pub fn local_sidereal_time_deg(jd: f64, longitude_deg: f64) -> f64 {
    (gmst_deg(jd) + longitude_deg).rem_euclid(360.0)
}
