// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command-line arguments and the conversions that turn them into an alarm.

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use lightup_domain::{AlarmEntry, DomainError, RepeatDays, Weekday};
use std::str::FromStr;
use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Accepted layout for `--at`.
const REFERENCE_TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

/// `LightUp` - inspect when an alarm fires next and build snooze variants
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Alarm hour (0-23)
    #[arg(long, allow_negative_numbers = true)]
    pub hour: i64,

    /// Alarm minute (0-59)
    #[arg(long, allow_negative_numbers = true)]
    pub minute: i64,

    /// Repeat days, comma separated. Accepts names (mon, Tuesday) or
    /// indices (0 = Monday)
    #[arg(short, long, value_delimiter = ',')]
    pub days: Vec<String>,

    /// Create the alarm disabled
    #[arg(long)]
    pub disabled: bool,

    /// Alarm label
    #[arg(short, long, default_value = "")]
    pub label: String,

    /// Store identifier to attach to the alarm
    #[arg(long, allow_negative_numbers = true)]
    pub id: Option<i64>,

    /// Derive an alarm offset by this many minutes (-59 to 59). Repeatable
    #[arg(short, long, allow_negative_numbers = true)]
    pub snooze: Vec<i64>,

    /// Reference wall-clock time as "YYYY-MM-DD HH:MM". Defaults to now
    #[arg(long, value_parser = parse_reference_time)]
    pub at: Option<PrimitiveDateTime>,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,
}

impl Args {
    /// Returns the log level selected with `-v`/`-q`.
    pub fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    /// Builds the alarm described by the arguments.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if the time, a repeat day or the identifier is
    /// invalid.
    pub fn alarm(&self) -> Result<AlarmEntry, DomainError> {
        let alarm: AlarmEntry = AlarmEntry::new(self.hour, self.minute)?
            .with_repeat(parse_days(&self.days)?)
            .with_enabled(!self.disabled)
            .with_label(&self.label);

        match self.id {
            Some(id) => alarm.with_id(id),
            None => Ok(alarm),
        }
    }
}

/// Parses a list of day names or indices into a repeat pattern.
///
/// # Errors
///
/// Returns a `DomainError` for an unknown name or an index outside 0..=6.
pub fn parse_days(days: &[String]) -> Result<RepeatDays, DomainError> {
    let days: Vec<Weekday> = days
        .iter()
        .map(|day| {
            day.trim()
                .parse::<i64>()
                .map_or_else(|_| Weekday::from_str(day), Weekday::from_index)
        })
        .collect::<Result<_, _>>()?;
    Ok(RepeatDays::from_days(&days))
}

/// Parses the `--at` value.
///
/// # Errors
///
/// Returns a message if the value does not match `YYYY-MM-DD HH:MM`.
pub fn parse_reference_time(value: &str) -> Result<PrimitiveDateTime, String> {
    PrimitiveDateTime::parse(value.trim(), REFERENCE_TIME_FORMAT)
        .map_err(|err| format!("expected YYYY-MM-DD HH:MM: {err}"))
}
