//! Root bracketing and bisection over angular functions of time.
//!
//! Every search here looks for the instant a continuous, increasing angle
//! reaches a target. The function handed in is already wrapped to
//! [-180, 180) around the target, so a crossing is a step from negative to
//! non-negative. The +180 to -180 jump half a circle away runs the other way
//! and is never mistaken for a root.

use panchanga_base::normalize_to_pm180;

use crate::error::SearchError;

/// Bisection stops once the bracket is narrower than this (about 1 ms).
pub(crate) const BISECTION_TOLERANCE_DAYS: f64 = 1e-8;

/// Hard cap on bisection halvings.
pub(crate) const MAX_BISECTION_ITERATIONS: usize = 60;

/// A converged root must sit this close to the target, in degrees.
const ROOT_RESIDUAL_LIMIT_DEG: f64 = 0.5;

/// Scan from `jd_start` in fixed steps for a negative-to-non-negative crossing.
///
/// `step` may be negative to scan backward in time. Returns `Ok(None)` if no
/// crossing occurs within `max_steps`.
pub(crate) fn find_zero_crossing(
    f: &dyn Fn(f64) -> f64,
    jd_start: f64,
    step: f64,
    max_steps: usize,
    max_iter: usize,
    tol: f64,
) -> Result<Option<f64>, SearchError> {
    let mut t0 = jd_start;
    let mut f0 = f(t0);
    for _ in 0..max_steps {
        let t1 = t0 + step;
        let f1 = f(t1);
        let (lo, f_lo, hi, f_hi) = if step > 0.0 {
            (t0, f0, t1, f1)
        } else {
            (t1, f1, t0, f0)
        };
        if f_lo < 0.0 && f_hi >= 0.0 {
            return bisect(f, lo, hi, max_iter, tol).map(Some);
        }
        t0 = t1;
        f0 = f1;
    }
    Ok(None)
}

/// First crossing inside `[jd_start, jd_end]`, scanning forward.
///
/// A function already at or past zero at `jd_start` (but within a quarter
/// turn) counts as crossing at `jd_start` itself.
pub(crate) fn find_crossing_in_window(
    f: &dyn Fn(f64) -> f64,
    jd_start: f64,
    jd_end: f64,
    step: f64,
) -> Result<Option<f64>, SearchError> {
    let mut t0 = jd_start;
    let mut f0 = f(t0);
    if (0.0..90.0).contains(&f0) {
        return Ok(Some(jd_start));
    }
    while t0 < jd_end {
        let t1 = (t0 + step).min(jd_end);
        let f1 = f(t1);
        if f0 < 0.0 && f1 >= 0.0 {
            return bisect(f, t0, t1, MAX_BISECTION_ITERATIONS, BISECTION_TOLERANCE_DAYS)
                .map(Some);
        }
        t0 = t1;
        f0 = f1;
    }
    Ok(None)
}

/// Instant inside `[jd_start, jd_end]` at which `angle` reaches `target_deg`.
pub(crate) fn find_angle_boundary(
    angle: &dyn Fn(f64) -> f64,
    target_deg: f64,
    jd_start: f64,
    jd_end: f64,
    step: f64,
) -> Result<Option<f64>, SearchError> {
    let wrapped = |t: f64| normalize_to_pm180(angle(t) - target_deg);
    find_crossing_in_window(&wrapped, jd_start, jd_end, step)
}

/// Halve `[lo, hi]` keeping `f(lo) < 0 <= f(hi)`; returns the upper end.
fn bisect(
    f: &dyn Fn(f64) -> f64,
    mut lo: f64,
    mut hi: f64,
    max_iter: usize,
    tol: f64,
) -> Result<f64, SearchError> {
    for _ in 0..max_iter {
        if hi - lo < tol {
            break;
        }
        let mid = 0.5 * (lo + hi);
        if f(mid) < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    let residual = f(hi);
    if !residual.is_finite() || residual.abs() > ROOT_RESIDUAL_LIMIT_DEG {
        return Err(SearchError::NoConvergence(
            "bisection bracket did not close on a root",
        ));
    }
    Ok(hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_crossing() {
        let f = |t: f64| t - 3.25;
        let root = find_zero_crossing(&f, 0.0, 1.0, 10, 60, 1e-10)
            .unwrap()
            .unwrap();
        assert!((root - 3.25).abs() < 1e-9);
    }

    #[test]
    fn backward_scan() {
        let f = |t: f64| t - 3.25;
        let root = find_zero_crossing(&f, 10.0, -1.0, 10, 60, 1e-10)
            .unwrap()
            .unwrap();
        assert!((root - 3.25).abs() < 1e-9);
    }

    #[test]
    fn no_crossing_in_range() {
        let f = |t: f64| t - 100.0;
        assert_eq!(find_zero_crossing(&f, 0.0, 1.0, 10, 60, 1e-8).unwrap(), None);
    }

    #[test]
    fn wrap_jump_is_not_a_root() {
        // Angle rises 10 deg/day from 150; target 0 sits behind it.
        let angle = |t: f64| 150.0 + 10.0 * t;
        let root = find_angle_boundary(&angle, 0.0, 0.0, 5.0, 0.25).unwrap();
        assert_eq!(root, None);
    }

    #[test]
    fn angle_boundary_across_360() {
        let angle = |t: f64| (355.0 + 12.0 * t).rem_euclid(360.0);
        let root = find_angle_boundary(&angle, 0.0, 0.0, 2.0, 0.1)
            .unwrap()
            .unwrap();
        assert!((root - 5.0 / 12.0).abs() < 1e-7, "root = {root}");
    }

    #[test]
    fn window_start_on_boundary() {
        let angle = |t: f64| 24.0 + 12.0 * t;
        let root = find_angle_boundary(&angle, 24.0, 0.0, 1.0, 0.1).unwrap();
        assert_eq!(root, Some(0.0));
    }

    #[test]
    fn discontinuous_function_reports_no_convergence() {
        let step = |t: f64| if t < 0.5 { -10.0 } else { 10.0 };
        let result = find_crossing_in_window(&step, 0.0, 1.0, 0.1);
        assert!(matches!(result, Err(SearchError::NoConvergence(_))));
    }
}
