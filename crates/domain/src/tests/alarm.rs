// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{capture_warnings, create_test_alarm};
use crate::{AlarmEntry, DomainError, RepeatDays, Weekday};

#[test]
fn test_new_uses_defaults() {
    let alarm: AlarmEntry = AlarmEntry::new(23, 59).unwrap();

    assert_eq!(alarm.hour(), 23);
    assert_eq!(alarm.minute(), 59);
    assert_eq!(alarm.repeat(), RepeatDays::NONE);
    assert!(alarm.enabled());
    assert_eq!(alarm.label(), "");
    assert_eq!(alarm.id(), None);
    assert_eq!(alarm.timestamp(), None);
}

#[test]
fn test_builder_sets_every_field() {
    let days: RepeatDays = RepeatDays::new([false, true, true, false, false, false, false]);
    let alarm: AlarmEntry = AlarmEntry::new(23, 59)
        .unwrap()
        .with_repeat(days)
        .with_enabled(false)
        .with_label("Alarm label")
        .with_timestamp(12_345_678)
        .unwrap()
        .with_id(265)
        .unwrap();

    assert_eq!(alarm.repeat(), days);
    assert!(!alarm.enabled());
    assert_eq!(alarm.label(), "Alarm label");
    assert_eq!(alarm.timestamp(), Some(12_345_678));
    assert_eq!(alarm.id(), Some(265));
}

#[test]
fn test_new_accepts_every_valid_time() {
    for hour in 0..24 {
        for minute in 0..60 {
            let alarm: AlarmEntry = AlarmEntry::new(hour, minute).unwrap();
            assert_eq!(i64::from(alarm.hour()), hour);
            assert_eq!(i64::from(alarm.minute()), minute);
        }
    }
}

#[test]
fn test_new_rejects_out_of_range_time() {
    for (hour, minute) in [(23, 60), (23, -50), (24, 59), (-12, 59), (24, 60), (-16, -45)] {
        let (result, logs) = capture_warnings(|| AlarmEntry::new(hour, minute));
        assert!(matches!(
            result,
            Err(DomainError::ConstructionRejected { .. })
        ));
        assert!(!logs.is_empty(), "no diagnostic for {hour}:{minute}");
    }
}

#[test]
fn test_new_reports_rejected_hour_before_minute() {
    let result: Result<AlarmEntry, DomainError> = AlarmEntry::new(24, 60);
    assert_eq!(
        result,
        Err(DomainError::ConstructionRejected {
            field: "hour",
            value: String::from("24"),
        })
    );
}

#[test]
fn test_hour_and_minute_setters_accept_valid_values_silently() {
    let mut alarm: AlarmEntry = AlarmEntry::new(0, 1).unwrap();

    let ((), logs) = capture_warnings(|| {
        alarm.set_hour(12).unwrap();
        alarm.set_minute(34).unwrap();
    });

    assert_eq!(alarm.hour(), 12);
    assert_eq!(alarm.minute(), 34);
    assert!(logs.is_empty());
}

#[test]
fn test_hour_and_minute_setters_retain_value_on_rejection() {
    let mut alarm: AlarmEntry = AlarmEntry::new(12, 34).unwrap();

    for minute in [60, -1] {
        let (result, logs) = capture_warnings(|| alarm.set_minute(minute));
        assert!(matches!(result, Err(DomainError::AssignmentRejected { .. })));
        assert!(logs.contains("minute"));
    }
    assert_eq!(alarm.minute(), 34);

    for hour in [24, -2] {
        let (result, logs) = capture_warnings(|| alarm.set_hour(hour));
        assert!(matches!(result, Err(DomainError::AssignmentRejected { .. })));
        assert!(logs.contains("hour"));
    }
    assert_eq!(alarm.hour(), 12);
    assert_eq!(alarm.minute(), 34);
}

#[test]
fn test_set_repeat_is_all_or_nothing() {
    let mut alarm: AlarmEntry = AlarmEntry::new(0, 0).unwrap();
    let valid_days: [bool; 7] = [false, true, true, false, false, false, false];

    alarm.set_repeat(&valid_days).unwrap();
    assert_eq!(alarm.repeat().as_array(), valid_days);

    let (result, logs) = capture_warnings(|| alarm.set_repeat(&[false; 8]));
    assert!(result.is_err());
    assert!(!logs.is_empty());
    assert_eq!(alarm.repeat().as_array(), valid_days);

    let (result, logs) = capture_warnings(|| alarm.set_repeat(&[true; 6]));
    assert!(result.is_err());
    assert!(!logs.is_empty());
    assert_eq!(alarm.repeat().as_array(), valid_days);
}

#[test]
fn test_weekday_getters_follow_repeat_pattern() {
    let mut days: [bool; 7] = [false, true, true, false, true, false, true];
    let mut alarm: AlarmEntry = AlarmEntry::new(0, 0)
        .unwrap()
        .with_repeat(RepeatDays::new(days))
        .with_enabled(false);

    let read = |alarm: &AlarmEntry| {
        [
            alarm.monday(),
            alarm.tuesday(),
            alarm.wednesday(),
            alarm.thursday(),
            alarm.friday(),
            alarm.saturday(),
            alarm.sunday(),
        ]
    };
    assert_eq!(read(&alarm), days);

    for day in &mut days {
        *day = !*day;
    }
    alarm.set_repeat(&days).unwrap();
    assert_eq!(read(&alarm), days);
}

#[test]
fn test_weekday_setters_update_single_day() {
    let mut alarm: AlarmEntry = AlarmEntry::new(0, 0).unwrap();

    alarm.set_monday(false);
    alarm.set_tuesday(true);
    alarm.set_wednesday(true);
    alarm.set_thursday(false);
    alarm.set_friday(true);
    alarm.set_saturday(false);
    alarm.set_sunday(true);

    assert_eq!(
        alarm.repeat().as_array(),
        [false, true, true, false, true, false, true]
    );

    alarm.set_repeats_on(Weekday::Saturday, true);
    assert!(alarm.saturday());
    assert!(alarm.repeats_on(Weekday::Saturday));
}

#[test]
fn test_id_setter_rejects_negative_values() {
    let mut alarm: AlarmEntry = AlarmEntry::new(0, 0).unwrap();
    alarm.set_id(5).unwrap();
    assert_eq!(alarm.id(), Some(5));

    let (result, logs) = capture_warnings(|| alarm.set_id(10));
    assert!(result.is_ok());
    assert!(logs.is_empty());
    assert_eq!(alarm.id(), Some(10));

    let (result, logs) = capture_warnings(|| alarm.set_id(-2));
    assert_eq!(
        result,
        Err(DomainError::AssignmentRejected {
            field: "id",
            value: String::from("-2"),
        })
    );
    assert!(!logs.is_empty());
    assert_eq!(alarm.id(), Some(10));
}

#[test]
fn test_timestamp_setter_rejects_negative_values() {
    let mut alarm: AlarmEntry = AlarmEntry::new(0, 0).unwrap();
    alarm.set_timestamp(1_427_486_989).unwrap();
    assert_eq!(alarm.timestamp(), Some(1_427_486_989));

    let (result, logs) = capture_warnings(|| alarm.set_timestamp(10));
    assert!(result.is_ok());
    assert!(logs.is_empty());

    let (result, logs) = capture_warnings(|| alarm.set_timestamp(-2));
    assert!(result.is_err());
    assert!(logs.contains("timestamp"));
    assert_eq!(alarm.timestamp(), Some(10));
}

#[test]
fn test_label_stores_text_rendering() {
    let mut alarm: AlarmEntry = AlarmEntry::new(0, 0).unwrap();

    let ((), logs) = capture_warnings(|| {
        alarm.set_label("Alarm test label");
        assert_eq!(alarm.label(), "Alarm test label");

        alarm.set_label(5);
        assert_eq!(alarm.label(), "5");

        alarm.set_label(true);
        assert_eq!(alarm.label(), "true");

        alarm.set_label(Weekday::Friday);
        assert_eq!(alarm.label(), "Friday");
    });
    assert!(logs.is_empty());
}

#[test]
fn test_any_day_enabled() {
    let mut alarm: AlarmEntry = create_test_alarm();
    assert!(alarm.any_day_enabled());

    alarm.set_repeat(&[false; 7]).unwrap();
    assert!(!alarm.any_day_enabled());

    alarm.set_friday(true);
    assert!(alarm.any_day_enabled());
}

#[test]
fn test_display_format() {
    let mut alarm: AlarmEntry = create_test_alarm();
    alarm.set_id(10).unwrap();

    assert_eq!(
        alarm.to_string(),
        "Alarm ID:  10 | Time: 09:30 | Enabled: Yes | Repeat: Mon --- --- Thu --- --- Sun "
    );
}

#[test]
fn test_display_format_without_id_and_disabled() {
    let alarm: AlarmEntry = AlarmEntry::new(7, 5).unwrap().with_enabled(false);

    assert_eq!(
        alarm.to_string(),
        "Alarm ID:     | Time: 07:05 | Enabled: No | Repeat: --- --- --- --- --- --- --- "
    );
}

#[test]
fn test_deserialize_runs_validation() {
    let alarm: AlarmEntry = serde_json::from_str(
        r#"{"hour": 6, "minute": 45, "repeat": [true, true, true, true, true, false, false], "id": 3}"#,
    )
    .unwrap();
    assert_eq!(alarm.hour(), 6);
    assert_eq!(alarm.minute(), 45);
    assert!(alarm.friday());
    assert!(!alarm.saturday());
    assert!(alarm.enabled());
    assert_eq!(alarm.id(), Some(3));
    assert_eq!(alarm.timestamp(), None);

    let invalid: Result<AlarmEntry, serde_json::Error> =
        serde_json::from_str(r#"{"hour": 24, "minute": 0}"#);
    assert!(invalid.is_err());

    let short_repeat: Result<AlarmEntry, serde_json::Error> =
        serde_json::from_str(r#"{"hour": 1, "minute": 0, "repeat": [true]}"#);
    assert!(short_repeat.is_err());
}

#[test]
fn test_serialize_then_deserialize_preserves_entry() {
    let alarm: AlarmEntry = create_test_alarm()
        .with_label("wake up")
        .with_id(4)
        .unwrap()
        .with_timestamp(99)
        .unwrap();

    let json: String = serde_json::to_string(&alarm).unwrap();
    let restored: AlarmEntry = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, alarm);
}
