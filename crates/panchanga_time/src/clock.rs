//! Sexagesimal clock time (hours, minutes, seconds).
//!
//! Decimal hours are rounded to the nearest whole second before being split,
//! so `from_decimal_hours(h).to_decimal_hours()` is within half a second of
//! `h` and a second round trip is exact.

use std::fmt::{Display, Formatter};

/// Clock time rendered from a decimal-hour value.
///
/// `hours` is unbounded: 25:10:00 is 01:10 on the following day, which is
/// how panchanga end times after midnight are traditionally written.
/// Negative values carry the sign in `hours` only (-0.5 h is -1:30:00).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime {
    pub hours: i32,
    /// 0..=59
    pub minutes: u8,
    /// 0..=59
    pub seconds: u8,
}

impl ClockTime {
    /// Build from validated parts; `None` if minutes or seconds exceed 59.
    pub fn new(hours: i32, minutes: u8, seconds: u8) -> Option<Self> {
        if minutes < 60 && seconds < 60 {
            Some(Self {
                hours,
                minutes,
                seconds,
            })
        } else {
            None
        }
    }

    /// Split decimal hours into h/m/s, rounding to the nearest second.
    pub fn from_decimal_hours(hours: f64) -> Self {
        let total = (hours * 3600.0).round() as i64;
        let h = total.div_euclid(3600);
        let rem = total.rem_euclid(3600);
        Self {
            hours: h as i32,
            minutes: (rem / 60) as u8,
            seconds: (rem % 60) as u8,
        }
    }

    /// Recombine into decimal hours.
    pub fn to_decimal_hours(self) -> f64 {
        self.hours as f64 + self.minutes as f64 / 60.0 + self.seconds as f64 / 3600.0
    }

    /// Whether the time falls on the day after the reference day.
    pub fn is_next_day(self) -> bool {
        self.hours >= 24
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}
