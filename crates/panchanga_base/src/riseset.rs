//! Sunrise/sunset and approximate moonrise/moonset.
//!
//! Sunrise and sunset come from the hour-angle equation
//!
//! `cos H = (sin h0 - sin(lat) sin(dec)) / (cos(lat) cos(dec))`
//!
//! which for the default geometric horizon (h0 = 0) reduces to
//! `cos H = -tan(lat) tan(dec)`. The event falls `H/15` hours before or
//! after local apparent noon. Declination is re-evaluated at the event
//! estimate until the time settles.
//!
//! The Moon moves about 13 deg/day against the stars, so its events are found
//! by iterating on the local hour angle directly (GMST minus right
//! ascension). The result is approximate: no topocentric parallax beyond a
//! fixed horizon altitude, and only the leading lunar terms.
//!
//! Sources: Meeus, *Astronomical Algorithms*, ch. 15; standard spherical
//! astronomy (USNO, Montenbruck & Pfleger).

use panchanga_time::{gmst_deg, local_hours_since_midnight};

use crate::ephemeris::{Ephemeris, ecliptic_to_equatorial};
use crate::riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult};
use crate::util::normalize_to_pm180;

/// Maximum iterations for the rise/set refinement loop.
const MAX_ITERATIONS: usize = 8;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Moon center altitude at rise/set: horizontal parallax minus refraction
/// and semidiameter, about +0.125 deg.
pub const MOON_HORIZON_ALTITUDE_DEG: f64 = 0.125;

/// Rate at which the Moon's hour angle grows, degrees per day.
///
/// Sidereal rotation (360.9856) minus the Moon's mean motion in right
/// ascension (13.1764).
const LUNAR_HOUR_ANGLE_RATE: f64 = 360.985_647 - 13.176_358;

/// Mean length of a lunar day (transit to transit) in hours.
pub const LUNAR_DAY_HOURS: f64 = 24.0 * 360.0 / LUNAR_HOUR_ANGLE_RATE;

/// Approximate local mean solar noon as a Julian Date (UT).
///
/// The integral JDN names noon UT, so noon at longitude `L` east is
/// `L / 360` days earlier.
pub fn approximate_local_noon_jd(jdn: i64, longitude_deg: f64) -> f64 {
    jdn as f64 - longitude_deg / 360.0
}

/// Outcome of the hour-angle equation at one declination.
enum HourAngle {
    /// Half-arc in degrees, (0, 180).
    Degrees(f64),
    NeverRises,
    NeverSets,
}

/// Solve for the half-arc above altitude `h0_deg`.
///
/// At the poles the denominator vanishes; the body is then up all day if it
/// sits above `h0` and down otherwise.
fn hour_angle(lat_deg: f64, dec_deg: f64, h0_deg: f64) -> HourAngle {
    let (phi, dec, h0) = (
        lat_deg.to_radians(),
        dec_deg.to_radians(),
        h0_deg.to_radians(),
    );
    let num = h0.sin() - phi.sin() * dec.sin();
    let den = phi.cos() * dec.cos();
    if den.abs() < 1e-12 {
        return if num < 0.0 {
            HourAngle::NeverSets
        } else {
            HourAngle::NeverRises
        };
    }
    let cos_h = num / den;
    if cos_h > 1.0 {
        HourAngle::NeverRises
    } else if cos_h < -1.0 {
        HourAngle::NeverSets
    } else {
        HourAngle::Degrees(cos_h.acos().to_degrees())
    }
}

fn sun_declination_deg(eph: &dyn Ephemeris, jd: f64) -> f64 {
    ecliptic_to_equatorial(eph.sun_longitude_deg(jd), 0.0, eph.obliquity_deg(jd)).1
}

/// Whole-day shift that puts the mean solar transit of `jdn` nearest to
/// local civil noon.
///
/// Zones far from their meridian (UTC+13 at 175 deg W) see their civil noon on
/// the neighbouring UT date.
fn transit_day_shift(jdn: i64, location: &GeoLocation) -> f64 {
    let civil_noon = jdn as f64 - location.utc_offset_hours / 24.0;
    (civil_noon - approximate_local_noon_jd(jdn, location.longitude_deg)).round()
}

/// Iterate one solar event around the transit `day_shift` days from `jdn`.
fn solve_sun_event(
    eph: &dyn Ephemeris,
    location: &GeoLocation,
    rising: bool,
    jdn: i64,
    day_shift: f64,
    config: &RiseSetConfig,
) -> Result<f64, RiseSetResult> {
    let mut jd = approximate_local_noon_jd(jdn, location.longitude_deg) + day_shift;

    for _ in 0..MAX_ITERATIONS {
        let dec = sun_declination_deg(eph, jd);
        let h = match hour_angle(location.latitude_deg, dec, config.horizon_altitude_deg) {
            HourAngle::Degrees(h) => h,
            HourAngle::NeverRises => return Err(RiseSetResult::NeverRises),
            HourAngle::NeverSets => return Err(RiseSetResult::NeverSets),
        };
        let eot_hours = if config.apply_equation_of_time {
            eph.equation_of_time_min(jd) / 60.0
        } else {
            0.0
        };

        // UT hours on the transit date: 12 - H/15 for rise, 12 + H/15 for set.
        let noon_ut = 12.0 - location.longitude_deg / 15.0 - eot_hours;
        let ut_hours = if rising {
            noon_ut - h / 15.0
        } else {
            noon_ut + h / 15.0
        };
        let next = jdn as f64 + day_shift + (ut_hours - 12.0) / 24.0;
        let settled = (next - jd).abs() < CONVERGENCE_DAYS;
        jd = next;
        if settled {
            break;
        }
    }
    Ok(jd)
}

/// Compute a single rise/set event on the civil date with Julian Day Number `jdn`.
///
/// # Returns
/// * `RiseSetResult::Event` with the instant (JD, UT) and local clock hours
/// * `RiseSetResult::NeverRises` / `NeverSets` under polar conditions
/// * `RiseSetResult::NotOnThisDate` when no event of this kind falls within
///   the civil date (a lunar event skipping a day)
pub fn compute_rise_set(
    eph: &dyn Ephemeris,
    location: &GeoLocation,
    event: RiseSetEvent,
    jdn: i64,
    config: &RiseSetConfig,
) -> RiseSetResult {
    if event.is_lunar() {
        return moon_event(eph, location, event, jdn);
    }

    let rising = event.is_rising();
    let mut day_shift = transit_day_shift(jdn, location);
    // The transit nearest civil noon normally gives an event on the date. Near
    // the edges of very long days it can spill over midnight, in which case the
    // adjacent transit is tried once.
    for _ in 0..2 {
        let jd = match solve_sun_event(eph, location, rising, jdn, day_shift, config) {
            Ok(jd) => jd,
            Err(polar) => return polar,
        };
        let hours = local_hours_since_midnight(jd, jdn, location.utc_offset_hours);
        if (0.0..24.0).contains(&hours) {
            return RiseSetResult::Event {
                jd,
                local_hours: hours,
                event,
            };
        }
        day_shift += if hours < 0.0 { 1.0 } else { -1.0 };
    }
    RiseSetResult::NotOnThisDate
}

/// Sunrise and sunset for the civil date `jdn`.
pub fn sun_rise_set(
    eph: &dyn Ephemeris,
    location: &GeoLocation,
    jdn: i64,
    config: &RiseSetConfig,
) -> (RiseSetResult, RiseSetResult) {
    (
        compute_rise_set(eph, location, RiseSetEvent::Sunrise, jdn, config),
        compute_rise_set(eph, location, RiseSetEvent::Sunset, jdn, config),
    )
}

/// Moonrise and moonset for the civil date `jdn`.
///
/// Either may be `NotOnThisDate`; callers should treat both as optional.
pub fn compute_moon_rise_set(
    eph: &dyn Ephemeris,
    location: &GeoLocation,
    jdn: i64,
) -> (RiseSetResult, RiseSetResult) {
    (
        moon_event(eph, location, RiseSetEvent::Moonrise, jdn),
        moon_event(eph, location, RiseSetEvent::Moonset, jdn),
    )
}

/// Hours of daylight between a sunrise and a sunset.
///
/// Midnight sun counts as 24 hours and polar night as 0.
pub fn day_duration_hours(sunrise: &RiseSetResult, sunset: &RiseSetResult) -> f64 {
    match (sunrise, sunset) {
        (RiseSetResult::Event { jd: rise, .. }, RiseSetResult::Event { jd: set, .. }) => {
            (set - rise) * 24.0
        }
        (RiseSetResult::NeverSets, _) | (_, RiseSetResult::NeverSets) => 24.0,
        _ => 0.0,
    }
}

/// Refine a lunar event starting from `jd_guess`.
fn refine_moon_event(
    eph: &dyn Ephemeris,
    location: &GeoLocation,
    rising: bool,
    jd_guess: f64,
) -> Result<f64, RiseSetResult> {
    let mut jd = jd_guess;
    for _ in 0..MAX_ITERATIONS {
        let (ra, dec) = ecliptic_to_equatorial(
            eph.moon_longitude_deg(jd),
            eph.moon_latitude_deg(jd),
            eph.obliquity_deg(jd),
        );
        let h = match hour_angle(location.latitude_deg, dec, MOON_HORIZON_ALTITUDE_DEG) {
            HourAngle::Degrees(h) => h,
            HourAngle::NeverRises => return Err(RiseSetResult::NeverRises),
            HourAngle::NeverSets => return Err(RiseSetResult::NeverSets),
        };
        let target = if rising { -h } else { h };
        let actual = normalize_to_pm180(gmst_deg(jd) + location.longitude_deg - ra);
        let correction = normalize_to_pm180(target - actual) / LUNAR_HOUR_ANGLE_RATE;
        jd += correction;
        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }
    Ok(jd)
}

fn moon_event(
    eph: &dyn Ephemeris,
    location: &GeoLocation,
    event: RiseSetEvent,
    jdn: i64,
) -> RiseSetResult {
    let rising = event.is_rising();
    let local_noon = jdn as f64 - location.utc_offset_hours / 24.0;
    let lunar_day = LUNAR_DAY_HOURS / 24.0;

    let mut guess = local_noon;
    // The first pass lands on the event nearest local noon. If that falls on a
    // neighbouring date, one lunar day in the other direction is the only
    // remaining candidate.
    for _ in 0..2 {
        let jd = match refine_moon_event(eph, location, rising, guess) {
            Ok(jd) => jd,
            Err(polar) => return polar,
        };
        let hours = local_hours_since_midnight(jd, jdn, location.utc_offset_hours);
        if (0.0..24.0).contains(&hours) {
            return RiseSetResult::Event {
                jd,
                local_hours: hours,
                event,
            };
        }
        guess = if hours < 0.0 { jd + lunar_day } else { jd - lunar_day };
    }
    RiseSetResult::NotOnThisDate
}
