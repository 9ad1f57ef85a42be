#![cfg(feature = "chrono")]

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use fluent_rules::prelude::*;

fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap()
}

#[test]
fn business_hours_scenario() {
    let rule = time::is_business_hours::<NaiveTime>();
    assert!(!rule.is_satisfied_by(&hms(16, 0, 1)));
    assert!(rule.is_satisfied_by(&hms(16, 0, 0)));
    assert!(rule.is_satisfied_by(&hms(8, 0, 0)));
    assert!(!rule.is_satisfied_by(&hms(7, 59, 59)));

    let result = rule.check(&hms(16, 0, 1));
    let meta = &result.failures[0].metadata;
    assert_eq!(meta.code.key(), "time.business_hours");
    assert_eq!(meta.get_param("start"), Some("08:00:00"));
    assert_eq!(meta.get_param("end"), Some("16:00:00"));
}

#[test]
fn noon_belongs_to_overlapping_periods() {
    let noon = hms(12, 0, 0);
    assert!(time::is_afternoon::<NaiveTime>().is_satisfied_by(&noon));
    assert!(time::is_business_hours::<NaiveTime>().is_satisfied_by(&noon));
    assert!(time::is_lunch_hour::<NaiveTime>().is_satisfied_by(&noon));
    assert!(!time::is_morning::<NaiveTime>().is_satisfied_by(&noon));
    assert!(!time::is_evening::<NaiveTime>().is_satisfied_by(&noon));
}

#[test]
fn period_edges() {
    assert!(time::is_morning::<NaiveTime>().is_satisfied_by(&hms(0, 0, 0)));
    assert!(time::is_morning::<NaiveTime>().is_satisfied_by(&hms(11, 59, 59)));
    assert!(time::is_afternoon::<NaiveTime>().is_satisfied_by(&hms(17, 59, 59)));
    assert!(!time::is_afternoon::<NaiveTime>().is_satisfied_by(&hms(18, 0, 0)));
    assert!(time::is_evening::<NaiveTime>().is_satisfied_by(&hms(23, 59, 59)));
    assert!(time::is_lunch_hour::<NaiveTime>().is_satisfied_by(&hms(13, 0, 0)));
    assert!(!time::is_lunch_hour::<NaiveTime>().is_satisfied_by(&hms(13, 0, 1)));

    let result = time::is_evening::<NaiveTime>().check(&hms(9, 0, 0));
    assert_eq!(
        result.failures[0].message(),
        "Time must be in the evening (18:00:00 - 23:59:59)"
    );
}

#[test]
fn comparisons_use_local_time_of_day() {
    let reference = hms(9, 30, 0);
    let morning_meeting: NaiveDateTime = NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_time(hms(9, 0, 0));

    assert!(time::before(reference).is_satisfied_by(&morning_meeting));
    assert!(!time::after(reference).is_satisfied_by(&morning_meeting));
    assert!(time::before_or_equal(reference).is_satisfied_by(&hms(9, 30, 0)));
    assert!(time::after_or_equal(reference).is_satisfied_by(&hms(9, 30, 0)));
    assert!(time::equal_to::<NaiveTime>(reference).is_satisfied_by(&hms(9, 30, 0)));

    // 07:00 UTC is 09:00 in UTC+02:00; the local wall clock is compared.
    let zoned = FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 1, 2, 9, 0, 0)
        .unwrap();
    assert!(time::equal_to(hms(9, 0, 0)).is_satisfied_by(&zoned));
}

#[test]
fn between_rejects_inverted_bounds() {
    let rule = time::between::<NaiveTime>(hms(9, 0, 0), hms(17, 0, 0)).unwrap();
    assert!(rule.is_satisfied_by(&hms(17, 0, 0)));
    assert!(!rule.is_satisfied_by(&hms(17, 0, 1)));
    assert!(time::between::<NaiveTime>(hms(17, 0, 0), hms(9, 0, 0)).is_err());
}

#[test]
fn component_ranges() {
    let hours = time::hours_between::<NaiveTime>(9, 17).unwrap();
    assert!(hours.is_satisfied_by(&hms(17, 59, 0)));
    assert!(!hours.is_satisfied_by(&hms(18, 0, 0)));

    let minutes = time::minutes_between::<NaiveTime>(0, 15).unwrap();
    assert!(minutes.is_satisfied_by(&hms(10, 15, 0)));
    assert!(!minutes.is_satisfied_by(&hms(10, 16, 0)));

    let seconds = time::seconds_between::<NaiveTime>(30, 59).unwrap();
    assert!(seconds.is_satisfied_by(&hms(10, 0, 30)));
    assert!(!seconds.is_satisfied_by(&hms(10, 0, 29)));
}

#[test]
fn component_bounds_are_checked_at_construction() {
    assert_eq!(
        time::hours_between::<NaiveTime>(25, 17).unwrap_err(),
        ConfigError::OutOfDomain {
            name: "min",
            value: 25,
            min: 0,
            max: 23
        }
    );
    assert!(time::hours_between::<NaiveTime>(9, 24).is_err());
    assert!(time::hours_between::<NaiveTime>(17, 9).is_err());
    assert!(time::minutes_between::<NaiveTime>(0, 60).is_err());
    assert!(time::seconds_between::<NaiveTime>(61, 0).is_err());
}

#[test]
fn timezone_identity() {
    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
    let rule = time::in_timezone::<OffsetTime>(plus_two);

    assert!(rule.is_satisfied_by(&OffsetTime::new(hms(10, 0, 0), plus_two)));
    let utc_offset = FixedOffset::east_opt(0).unwrap();
    assert!(!rule.is_satisfied_by(&OffsetTime::new(hms(10, 0, 0), utc_offset)));

    let utc = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
    assert!(time::in_timezone(FixedOffset::east_opt(0).unwrap()).is_satisfied_by(&utc));

    let naive = time::in_timezone::<NaiveTime>(plus_two).check(&hms(10, 0, 0));
    assert_eq!(naive.failures[0].code().key(), "time.in_timezone");
}

#[test]
fn absent_times_are_skipped() {
    let rules: Vec<Rule<NaiveTime>> = vec![
        time::is_morning(),
        time::is_business_hours(),
        time::hours_between(1, 2).unwrap(),
        time::in_timezone(FixedOffset::east_opt(0).unwrap()),
    ];
    let mut result = ValidationResult::new();
    for rule in &rules {
        rule.apply(None, &mut result, &Identifier::field("starts_at"));
    }
    assert!(result.is_valid());
}
