//! Shared angle arithmetic for panchanga calculations.

/// Normalize an angle to [0, 360) degrees.
///
/// Same result as `((x mod 360) + 360) mod 360`, but values already in range
/// pass through untouched, so the function is exactly idempotent. A tiny
/// negative input that rounds up to 360 folds back to 0.
pub fn normalize_360(deg: f64) -> f64 {
    let mut r = deg % 360.0;
    if r < 0.0 {
        r += 360.0;
    }
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to [-180, 180).
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let d = normalize_360(deg);
    if d >= 180.0 { d - 360.0 } else { d }
}

/// 1-based segment number of an angle on a circle cut into `count` equal
/// segments of `span_deg`.
///
/// Uses the ceiling convention: an angle lying exactly on a boundary belongs
/// to the segment that boundary *ends*, so 0 deg (equivalently 360) is the
/// end of the last segment and maps to `count`, never to 0.
pub fn segment_number(angle_deg: f64, span_deg: f64, count: u8) -> u8 {
    let n = (normalize_360(angle_deg) / span_deg).ceil();
    if n < 1.0 {
        count
    } else if n > count as f64 {
        count
    } else {
        n as u8
    }
}

/// Angle at which segment `number` ends, in [0, 360).
pub fn segment_end_deg(number: u8, span_deg: f64) -> f64 {
    normalize_360(number as f64 * span_deg)
}

/// Angle split into degrees, arc-minutes and arc-seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
}

/// Split decimal degrees into DMS. The sign is dropped.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor();
    let remainder = (d - degrees) * 60.0;
    let minutes = remainder.floor();
    Dms {
        degrees: degrees as u16,
        minutes: minutes as u8,
        seconds: (remainder - minutes) * 60.0,
    }
}

/// Recombine DMS into decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}
