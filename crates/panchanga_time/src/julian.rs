//! Julian Day Number ↔ proleptic-Gregorian calendar conversions.
//!
//! The integral Julian Day Number (JDN) labels the civil day whose noon (UT)
//! carries that number, so the continuous Julian Date at 0h UT of a civil
//! date is `JDN - 0.5`.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Seconds in a civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Integral Julian Day Number of a proleptic-Gregorian civil date.
///
/// Integer month/year shift (March-based year) followed by the JDN
/// polynomial. Valid for every year after -4800.
pub fn jdn_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    day as i64 + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32_045
}

/// Proleptic-Gregorian civil date of an integral Julian Day Number.
///
/// Inverse of [`jdn_from_civil`]. Returns `(year, month, day)`.
pub fn civil_from_jdn(jdn: i64) -> (i32, u32, u32) {
    let f = jdn + 1401 + (((4 * jdn + 274_277).div_euclid(146_097)) * 3).div_euclid(4) - 38;
    let e = 4 * f + 3;
    let g = e.rem_euclid(1461).div_euclid(4);
    let h = 5 * g + 2;
    let day = h.rem_euclid(153).div_euclid(5) + 1;
    let month = (h.div_euclid(153) + 2).rem_euclid(12) + 1;
    let year = e.div_euclid(1461) - 4716 + (14 - month).div_euclid(12);
    (year as i32, month as u32, day as u32)
}

/// Continuous Julian Date for a calendar date with fractional day.
///
/// `day_frac` = 15.5 means the 15th at 12:00 UT.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let whole = day_frac.floor();
    jdn_from_civil(year, month, whole as u32) as f64 - 0.5 + (day_frac - whole)
}

/// Calendar date with fractional day for a continuous Julian Date.
///
/// Returns `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let shifted = jd + 0.5;
    let jdn = shifted.floor();
    let (year, month, day) = civil_from_jdn(jdn as i64);
    (year, month, day as f64 + (shifted - jdn))
}

/// Julian Date at 0h UT of the civil day labelled `jdn`.
pub fn jd_at_midnight(jdn: i64) -> f64 {
    jdn as f64 - 0.5
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Local clock hours of instant `jd`, measured from local midnight of the
/// civil day `jdn`.
///
/// Values of 24 or more denote instants after the following midnight,
/// negative values instants before the day began.
pub fn local_hours_since_midnight(jd: f64, jdn: i64, utc_offset_hours: f64) -> f64 {
    (jd - jd_at_midnight(jdn)) * 24.0 + utc_offset_hours
}
