//! Validated proleptic-Gregorian civil date.
//!
//! A [`CivilDate`] can only be obtained through [`CivilDate::new`] (or
//! parsing / JDN conversion, which go through the same check), so holding
//! one is proof that the triple names a real calendar day.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{civil_from_jdn, jdn_from_civil};

/// Earliest accepted year. Keeps every JDN positive.
pub const MIN_YEAR: i32 = -4700;

/// Latest accepted year.
pub const MAX_YEAR: i32 = 9999;

/// Whether `year` is a proleptic-Gregorian leap year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or `None` for a month outside 1..=12.
pub const fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            if is_leap_year(year) {
                Some(29)
            } else {
                Some(28)
            }
        }
        _ => None,
    }
}

/// A civil calendar date (proleptic Gregorian).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    /// Construct a date, rejecting triples that do not name a calendar day.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        let invalid = TimeError::InvalidDate { year, month, day };
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(invalid);
        }
        match days_in_month(year, month) {
            Some(last) if (1..=last).contains(&day) => Ok(Self { year, month, day }),
            _ => Err(invalid),
        }
    }

    /// Civil date of an integral Julian Day Number.
    pub fn from_jdn(jdn: i64) -> Result<Self, TimeError> {
        let (year, month, day) = civil_from_jdn(jdn);
        Self::new(year, month, day)
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub const fn month(self) -> u32 {
        self.month
    }

    pub const fn day(self) -> u32 {
        self.day
    }

    /// Integral Julian Day Number of this date.
    pub fn to_jdn(self) -> i64 {
        jdn_from_civil(self.year, self.month, self.day)
    }

    /// The date `days` after (or before, if negative) this one.
    pub fn add_days(self, days: i64) -> Result<Self, TimeError> {
        Self::from_jdn(self.to_jdn() + days)
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`. A leading `-` on the year is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let parts: Vec<&str> = body.split('-').collect();
        if parts.len() != 3 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got '{s}'")));
        }
        let year: i32 = parts[0]
            .parse()
            .map_err(|_| TimeError::Parse(format!("bad year in '{s}'")))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|_| TimeError::Parse(format!("bad month in '{s}'")))?;
        let day: u32 = parts[2]
            .parse()
            .map_err(|_| TimeError::Parse(format!("bad day in '{s}'")))?;
        Self::new(if negative { -year } else { year }, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_date() {
        let d = CivilDate::new(2024, 1, 15).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2024, 1, 15));
    }

    #[test]
    fn rejects_month_13() {
        assert_eq!(
            CivilDate::new(2024, 13, 32),
            Err(TimeError::InvalidDate {
                year: 2024,
                month: 13,
                day: 32
            })
        );
    }

    #[test]
    fn rejects_day_zero() {
        assert!(CivilDate::new(2024, 5, 0).is_err());
    }

    #[test]
    fn feb_29_only_in_leap_years() {
        assert!(CivilDate::new(2024, 2, 29).is_ok());
        assert!(CivilDate::new(2023, 2, 29).is_err());
        assert!(CivilDate::new(1900, 2, 29).is_err());
        assert!(CivilDate::new(2000, 2, 29).is_ok());
    }

    #[test]
    fn rejects_out_of_range_year() {
        assert!(CivilDate::new(10_000, 1, 1).is_err());
        assert!(CivilDate::new(-5000, 1, 1).is_err());
    }

    #[test]
    fn jdn_roundtrip() {
        let d = CivilDate::new(2024, 1, 15).unwrap();
        assert_eq!(CivilDate::from_jdn(d.to_jdn()).unwrap(), d);
    }

    #[test]
    fn add_days_crosses_year() {
        let d = CivilDate::new(2023, 12, 31).unwrap();
        assert_eq!(d.add_days(1).unwrap(), CivilDate::new(2024, 1, 1).unwrap());
        assert_eq!(d.add_days(-365).unwrap(), CivilDate::new(2022, 12, 31).unwrap());
    }

    #[test]
    fn parse_and_display() {
        let d: CivilDate = "2024-01-15".parse().unwrap();
        assert_eq!(d.to_string(), "2024-01-15");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!("2024/01/15".parse::<CivilDate>(), Err(TimeError::Parse(_))));
        assert!(matches!("2024-xx-15".parse::<CivilDate>(), Err(TimeError::Parse(_))));
    }

    #[test]
    fn parse_rejects_invalid_calendar_day() {
        assert!(matches!(
            "2024-13-32".parse::<CivilDate>(),
            Err(TimeError::InvalidDate { .. })
        ));
    }
}
