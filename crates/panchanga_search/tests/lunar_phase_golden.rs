//! Golden-value tests for new-moon search.
//!
//! Validates against NASA new moon dates. Pure-math model, no data files.

use panchanga_base::{MeanElementEphemeris, normalize_to_pm180};
use panchanga_search::{elongation_at, next_new_moon, prev_new_moon, search_new_moons};
use panchanga_time::{calendar_to_jd, jd_to_calendar};

fn utc_hours(jd: f64) -> (i32, u32, u32, f64) {
    let (y, m, day_frac) = jd_to_calendar(jd);
    let day = day_frac.floor();
    (y, m, day as u32, (day_frac - day) * 24.0)
}

/// NASA: New Moon 2024-Jan-11 11:57 UTC
#[test]
fn new_moon_jan_2024() {
    let eph = MeanElementEphemeris::default();
    let nm = next_new_moon(&eph, calendar_to_jd(2024, 1, 1.0)).unwrap();
    let (y, m, d, h) = utc_hours(nm);
    assert_eq!((y, m, d), (2024, 1, 11));
    assert!((h - 11.95).abs() < 1.0, "off by {:.2}h", h - 11.95);
}

/// NASA: New Moon 2024-Feb-09 22:59 UTC
#[test]
fn new_moon_feb_2024() {
    let eph = MeanElementEphemeris::default();
    let nm = next_new_moon(&eph, calendar_to_jd(2024, 2, 1.0)).unwrap();
    let (y, m, d, h) = utc_hours(nm);
    assert_eq!((y, m, d), (2024, 2, 9));
    assert!((h - 22.98).abs() < 1.0, "off by {:.2}h", h - 22.98);
}

/// NASA: New Moon 2024-Oct-02 18:49 UTC
#[test]
fn prev_new_moon_oct_2024() {
    let eph = MeanElementEphemeris::default();
    let nm = prev_new_moon(&eph, calendar_to_jd(2024, 10, 15.0)).unwrap();
    let (y, m, d, h) = utc_hours(nm);
    assert_eq!((y, m, d), (2024, 10, 2));
    assert!((h - 18.82).abs() < 1.0, "off by {:.2}h", h - 18.82);
}

/// 2024 has thirteen new moons, the last on 30 December.
#[test]
fn search_new_moons_2024() {
    let eph = MeanElementEphemeris::default();
    let start = calendar_to_jd(2024, 1, 1.0);
    let end = calendar_to_jd(2025, 1, 1.0);
    let found = search_new_moons(&eph, start, end).unwrap();
    assert_eq!(found.len(), 13);
    for pair in found.windows(2) {
        let gap = pair[1] - pair[0];
        assert!((29.2..29.9).contains(&gap), "gap = {gap}");
    }
    let (_, m, d, _) = utc_hours(found[12]);
    assert_eq!((m, d), (12, 30));
}

#[test]
fn prev_at_root_returns_root() {
    let eph = MeanElementEphemeris::default();
    let nm = next_new_moon(&eph, calendar_to_jd(2024, 3, 1.0)).unwrap();
    let again = prev_new_moon(&eph, nm).unwrap();
    assert!((again - nm).abs() < 1e-6);
    let e = normalize_to_pm180(elongation_at(&eph, nm));
    assert!(e.abs() < 1e-5);
}
