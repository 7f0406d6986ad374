//! Golden Julian Day Number values for well-known civil dates.

use panchanga_time::{CivilDate, ClockTime, jd_to_calendar, jdn_from_civil};

#[test]
fn reference_dates() {
    let cases = [
        ((2024, 1, 1), 2_460_311),
        ((2000, 1, 1), 2_451_545),
        ((1900, 1, 1), 2_415_021),
        ((1987, 4, 29), 2_446_915),
        ((2024, 1, 15), 2_460_325),
    ];
    for ((y, m, d), expected) in cases {
        let date = CivilDate::new(y, m, d).unwrap();
        assert_eq!(date.to_jdn(), expected, "{date}");
        assert_eq!(jdn_from_civil(y, m, d), expected);
    }
}

#[test]
fn consecutive_days_are_consecutive_jdns() {
    let mut date = CivilDate::new(2023, 12, 25).unwrap();
    let mut jdn = date.to_jdn();
    for _ in 0..90 {
        let next = date.add_days(1).unwrap();
        assert_eq!(next.to_jdn(), jdn + 1);
        date = next;
        jdn += 1;
    }
    assert_eq!(date, CivilDate::new(2024, 3, 24).unwrap());
}

#[test]
fn fractional_jd_back_to_calendar() {
    // 2024-01-15 06:00 UT
    let jd = 2_460_324.5 + 0.25;
    let (y, m, d) = jd_to_calendar(jd);
    assert_eq!((y, m), (2024, 1));
    assert!((d - 15.25).abs() < 1e-9);
}

#[test]
fn invalid_inputs_rejected() {
    assert!(CivilDate::new(2024, 13, 32).is_err());
    assert!(CivilDate::new(2023, 2, 29).is_err());
    assert!(CivilDate::new(2024, 4, 31).is_err());
}

#[test]
fn clock_sweep_roundtrip() {
    for i in 0..2400 {
        let h = i as f64 * 0.01 + 0.003;
        let c = ClockTime::from_decimal_hours(h);
        assert!(c.minutes < 60 && c.seconds < 60);
        assert!((c.to_decimal_hours() - h).abs() <= 1.0 / 3600.0);
    }
}
