// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crate::args::{Args, parse_days, parse_reference_time};
use crate::report::Report;
use clap::Parser;
use lightup_domain::{AlarmEntry, DomainError, RepeatDays, Weekday};
use time::macros::datetime;

#[test]
fn test_parse_days_accepts_names_and_indices() {
    let days: RepeatDays = parse_days(&[
        String::from("mon"),
        String::from("3"),
        String::from("Sunday"),
    ])
    .unwrap();

    assert_eq!(
        days,
        RepeatDays::from_days(&[Weekday::Monday, Weekday::Thursday, Weekday::Sunday])
    );
}

#[test]
fn test_parse_days_rejects_unknown_entries() {
    assert_eq!(
        parse_days(&[String::from("7")]),
        Err(DomainError::InvalidWeekday(7))
    );
    assert!(matches!(
        parse_days(&[String::from("someday")]),
        Err(DomainError::InvalidWeekdayName(_))
    ));
}

#[test]
fn test_parse_reference_time() {
    assert_eq!(
        parse_reference_time("2026-10-14 19:55"),
        Ok(datetime!(2026-10-14 19:55))
    );
    assert!(parse_reference_time("19:55").is_err());
}

#[test]
fn test_args_build_alarm() {
    let args: Args = Args::try_parse_from([
        "lightup", "--hour", "9", "--minute", "30", "--days", "mon,thu,sun", "--label", "work",
        "--id", "10",
    ])
    .unwrap();

    let alarm: AlarmEntry = args.alarm().unwrap();
    assert_eq!(
        alarm.to_string(),
        "Alarm ID:  10 | Time: 09:30 | Enabled: Yes | Repeat: Mon --- --- Thu --- --- Sun "
    );
    assert_eq!(alarm.label(), "work");
}

#[test]
fn test_args_reject_invalid_hour() {
    let args: Args =
        Args::try_parse_from(["lightup", "--hour", "-1", "--minute", "30"]).unwrap();
    assert!(matches!(
        args.alarm(),
        Err(DomainError::ConstructionRejected { field: "hour", .. })
    ));
}

#[test]
fn test_report_includes_snooze_variants() {
    let alarm: AlarmEntry = AlarmEntry::new(23, 50)
        .unwrap()
        .with_repeat(RepeatDays::from_days(&[Weekday::Wednesday]))
        .with_id(4)
        .unwrap();

    // 2026-10-14 is a Wednesday.
    let report: Report = Report::build(alarm, datetime!(2026-10-14 23:00), &[30, -10]).unwrap();

    assert_eq!(report.minutes_to_alert, Some(50));
    assert_eq!(report.derived.len(), 2);
    assert!(report.derived[0].alarm.thursday());
    assert_eq!(report.derived[0].minutes_to_alert, Some(80));
    assert_eq!(report.derived[1].alarm.label(), " (Alarm 4 -10min)");
    assert_eq!(report.derived[1].minutes_to_alert, Some(40));

    let text: String = report.to_string();
    assert!(text.contains("Next alert: in 0h 50m"));
    assert!(text.contains("+30min: Alarm ID:     | Time: 00:20"));
}

#[test]
fn test_report_rejects_out_of_range_offset() {
    let alarm: AlarmEntry = AlarmEntry::new(7, 0).unwrap();
    let result: Result<Report, DomainError> =
        Report::build(alarm, datetime!(2026-10-14 06:00), &[60]);
    assert!(matches!(result, Err(DomainError::OffsetRejected { .. })));
}

#[test]
fn test_report_disabled_alarm_never_alerts() {
    let alarm: AlarmEntry = AlarmEntry::new(7, 0)
        .unwrap()
        .with_repeat(RepeatDays::EVERY_DAY)
        .with_enabled(false);
    let report: Report = Report::build(alarm, datetime!(2026-10-14 06:00), &[]).unwrap();

    assert_eq!(report.minutes_to_alert, None);
    assert!(report.to_string().contains("Next alert: never"));
}
