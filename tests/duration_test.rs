use chrono::{NaiveTime, TimeZone, Utc};
use dashu::integer::IBig;
use hms_duration::{Duration, DurationError, TimeInput};
use std::cmp::Ordering;

#[test]
fn test_canonical_round_trip() {
    assert_eq!(Duration::new("05:03:09").unwrap().text(), "05:03:09");
    assert_eq!(Duration::new("5:03:09").unwrap().text(), "05:03:09");
    assert_eq!(Duration::new("-12:00:00").unwrap().text(), "-12:00:00");
    assert_eq!(Duration::new("100:00:00").unwrap().text(), "100:00:00");
}

#[test]
fn test_rejects_single_digit_fields() {
    let err = Duration::new("5:3:9").unwrap_err();
    assert!(matches!(err, DurationError::InvalidFormat { .. }));
}

#[test]
fn test_scenario_sum_short_form_and_seconds() {
    let total = Duration::new("1:30")
        .unwrap()
        .sum(Duration::new(30).unwrap())
        .unwrap();
    assert_eq!(*total.total_seconds(), IBig::from(5430));
    assert_eq!(total.to_string(), "01:30:30");
}

#[test]
fn test_scenario_negative_seconds() {
    assert_eq!(Duration::new(-3661).unwrap().text(), "-01:01:01");
}

#[test]
fn test_scenario_past_twenty_four_hours() {
    let a = Duration::new("25:00:00").unwrap();
    let b = Duration::new("24:59:59").unwrap();
    assert!(a.is_greater_than(&b).unwrap());
    assert!(a > b);
}

#[test]
fn test_scenario_difference_below_zero() {
    let result = Duration::new(3600)
        .unwrap()
        .difference(Duration::new(7200).unwrap())
        .unwrap();
    assert_eq!(result.text(), "-01:00:00");
}

#[test]
fn test_zero_has_no_sign() {
    assert_eq!(Duration::new(0).unwrap().text(), "00:00:00");
    assert_eq!(Duration::new("-0").unwrap().text(), "00:00:00");
    assert_eq!(Duration::new("-0:00").unwrap().text(), "00:00:00");
    assert_eq!(Duration::default().text(), "00:00:00");
}

#[test]
fn test_format_validity_is_strict() {
    assert!(Duration::is_time_format_valid("12:30:00"));
    assert!(!Duration::is_time_format_valid("12:60:00"));
    assert!(!Duration::is_time_format_valid("12:30"));
}

#[test]
fn test_date_time_contributes_time_of_day_only() {
    let stamp = Utc.with_ymd_and_hms(2026, 10, 18, 23, 59, 58).unwrap();
    let duration = Duration::new(stamp).unwrap();
    assert_eq!(duration.text(), "23:59:58");

    let time = NaiveTime::from_hms_opt(1, 2, 3).unwrap();
    assert_eq!(Duration::from(time).text(), "01:02:03");
}

#[test]
fn test_compare_accepts_every_input_shape() {
    let d = Duration::new("01:00:00").unwrap();
    assert_eq!(d.compare("1:00").unwrap(), Ordering::Equal);
    assert_eq!(d.compare(3599).unwrap(), Ordering::Greater);
    assert_eq!(d.compare("3601").unwrap(), Ordering::Less);
    assert_eq!(d.compare(()).unwrap(), Ordering::Greater);
    assert_eq!(d.compare(TimeInput::Empty).unwrap(), Ordering::Greater);
}

#[test]
fn test_large_magnitudes_stay_exact() {
    let huge: IBig = "123456789012345678901234567890".parse().unwrap();
    let a = Duration::new(huge.clone()).unwrap();
    let b = a.sum(&a).unwrap().difference(&a).unwrap();
    assert_eq!(*b.total_seconds(), huge);
    assert_eq!(Duration::new(a.text()).unwrap(), a);
}

#[test]
fn test_operators_match_methods() {
    let a = Duration::new("02:00:00").unwrap();
    let b = Duration::new("00:45:00").unwrap();
    assert_eq!(&a + &b, a.sum(&b).unwrap());
    assert_eq!(&a - &b, a.difference(&b).unwrap());
    assert_eq!(-a.clone(), a.negate());
}

#[test]
fn test_values_are_not_mutated() {
    let a = Duration::new("00:10:00").unwrap();
    let _ = a.sum(60).unwrap();
    let _ = a.negate();
    assert_eq!(a.text(), "00:10:00");
}

#[test]
fn test_parse_via_from_str() {
    let parsed: Duration = "-2:30".parse().unwrap();
    assert_eq!(parsed.text(), "-02:30:00");
    assert!(parsed.is_negative());
    assert!("2:30:".parse::<Duration>().is_err());
}
