//! New-moon search and Moon-Sun elongation.
//!
//! A new moon is the instant the tropical elongation wraps through 0. The
//! search steps one day at a time (the elongation gains 10-15 deg/day, so a
//! step never jumps a whole half circle) and bisects the bracketing day.

use panchanga_base::{Ephemeris, normalize_360, normalize_to_pm180};

use crate::error::SearchError;
use crate::search_util::{BISECTION_TOLERANCE_DAYS, MAX_BISECTION_ITERATIONS, find_zero_crossing};

/// Coarse step for the new-moon scan.
const NEW_MOON_STEP_DAYS: f64 = 1.0;

/// Longest synodic month is under 30 days; leave headroom.
const NEW_MOON_MAX_STEPS: usize = 40;

/// Moon-minus-Sun tropical longitude at `jd`, in [0, 360).
pub fn elongation_at(eph: &dyn Ephemeris, jd: f64) -> f64 {
    normalize_360(eph.moon_longitude_deg(jd) - eph.sun_longitude_deg(jd))
}

/// First new moon strictly after `jd`.
pub fn next_new_moon(eph: &dyn Ephemeris, jd: f64) -> Result<f64, SearchError> {
    let f = |t: f64| normalize_to_pm180(elongation_at(eph, t));
    find_zero_crossing(
        &f,
        jd,
        NEW_MOON_STEP_DAYS,
        NEW_MOON_MAX_STEPS,
        MAX_BISECTION_ITERATIONS,
        BISECTION_TOLERANCE_DAYS,
    )?
    .ok_or(SearchError::NoConvergence("could not find next new moon"))
}

/// Latest new moon at or before `jd`.
pub fn prev_new_moon(eph: &dyn Ephemeris, jd: f64) -> Result<f64, SearchError> {
    let f = |t: f64| normalize_to_pm180(elongation_at(eph, t));
    find_zero_crossing(
        &f,
        jd,
        -NEW_MOON_STEP_DAYS,
        NEW_MOON_MAX_STEPS,
        MAX_BISECTION_ITERATIONS,
        BISECTION_TOLERANCE_DAYS,
    )?
    .ok_or(SearchError::NoConvergence("could not find previous new moon"))
}

/// All new moons in `[jd_start, jd_end)`, in order.
pub fn search_new_moons(
    eph: &dyn Ephemeris,
    jd_start: f64,
    jd_end: f64,
) -> Result<Vec<f64>, SearchError> {
    let mut found = Vec::new();
    let mut cursor = jd_start;
    loop {
        let nm = next_new_moon(eph, cursor)?;
        if nm >= jd_end {
            break;
        }
        found.push(nm);
        // Step past the root so the next scan cannot land on it again.
        cursor = nm + 1.0;
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use panchanga_base::MeanElementEphemeris;

    #[test]
    fn next_and_prev_bracket_query() {
        let eph = MeanElementEphemeris::default();
        let jd = 2_460_325.0;
        let prev = prev_new_moon(&eph, jd).unwrap();
        let next = next_new_moon(&eph, jd).unwrap();
        assert!(prev <= jd && jd < next);
        let month = next - prev;
        assert!((29.2..29.9).contains(&month), "month = {month}");
    }

    #[test]
    fn elongation_near_zero_at_root() {
        let eph = MeanElementEphemeris::default();
        let nm = next_new_moon(&eph, 2_460_310.5).unwrap();
        let e = normalize_to_pm180(elongation_at(&eph, nm));
        assert!(e.abs() < 1e-5, "elongation at root = {e}");
    }
}
