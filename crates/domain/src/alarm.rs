// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The alarm entry value object.
//!
//! ## Invariants
//!
//! - `hour` is always in 0..=23 and `minute` in 0..=59
//! - The repeat pattern always holds exactly seven flags
//! - `id` and `timestamp`, when set, are non-negative
//! - A rejected assignment leaves the previous value in place
//!
//! Every setter validates before it writes and reports rejections through
//! `tracing` at `warn` level as well as through its `Result`.

use crate::error::DomainError;
use crate::weekday::{RepeatDays, Weekday};
use serde::{Deserialize, Serialize};

/// Hours in a day.
pub const HOURS_PER_DAY: i64 = 24;
/// Minutes in an hour.
pub const MINUTES_PER_HOUR: i64 = 60;
/// Minutes in a day.
pub const MINUTES_PER_DAY: i64 = HOURS_PER_DAY * MINUTES_PER_HOUR;

/// Generates the per-weekday getter and setter pairs.
macro_rules! weekday_accessors {
    ($($name:ident => $day:ident),* $(,)?) => {
        pastey::paste! {
            $(
                #[doc = "Returns whether the alarm repeats on " $day "."]
                #[must_use]
                pub const fn $name(&self) -> bool {
                    self.repeat.get(Weekday::$day)
                }

                #[doc = "Sets whether the alarm repeats on " $day "."]
                pub const fn [<set_ $name>](&mut self, enabled: bool) {
                    self.repeat.set(Weekday::$day, enabled);
                }
            )*
        }
    };
}

/// A single recurring alarm.
///
/// An entry is created with [`AlarmEntry::new`] (or derived from another one
/// with [`AlarmEntry::diff_alarm`]) and only changes through its validated
/// setters. The identifier and timestamp belong to whatever store holds the
/// entry; they are `None` until that store assigns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAlarmEntry")]
pub struct AlarmEntry {
    /// Hour of the day, 0 to 23.
    hour: u8,
    /// Minute of the hour, 0 to 59.
    minute: u8,
    /// Days of the week the alarm fires on.
    repeat: RepeatDays,
    /// Whether the alarm fires at all.
    enabled: bool,
    /// Free-form label.
    label: String,
    /// Store-assigned identifier.
    id: Option<u64>,
    /// Store-assigned creation time.
    timestamp: Option<u64>,
}

impl AlarmEntry {
    /// Creates an alarm at `hour:minute` with no repeat days, enabled, with an
    /// empty label and no identifier or timestamp.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ConstructionRejected` if the hour is not in
    /// 0..=23 or the minute is not in 0..=59. No entry is produced.
    pub fn new(hour: i64, minute: i64) -> Result<Self, DomainError> {
        let hour: u8 = validate_hour(hour).ok_or_else(|| DomainError::construction("hour", hour))?;
        let minute: u8 =
            validate_minute(minute).ok_or_else(|| DomainError::construction("minute", minute))?;

        Ok(Self::at(hour, minute))
    }

    /// Creates an alarm from a time of day already within range.
    pub(crate) const fn at(hour: u8, minute: u8) -> Self {
        debug_assert!(hour < 24 && minute < 60);
        Self {
            hour,
            minute,
            repeat: RepeatDays::NONE,
            enabled: true,
            label: String::new(),
            id: None,
            timestamp: None,
        }
    }

    /// Replaces the repeat pattern.
    #[must_use]
    pub fn with_repeat(mut self, repeat: RepeatDays) -> Self {
        self.repeat = repeat;
        self
    }

    /// Sets the enabled flag.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the label to the textual rendering of `label`.
    #[must_use]
    pub fn with_label(mut self, label: impl std::fmt::Display) -> Self {
        self.set_label(label);
        self
    }

    /// Sets the store identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AssignmentRejected` if `id` is negative.
    pub fn with_id(mut self, id: i64) -> Result<Self, DomainError> {
        self.set_id(id)?;
        Ok(self)
    }

    /// Sets the creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AssignmentRejected` if `timestamp` is negative.
    pub fn with_timestamp(mut self, timestamp: i64) -> Result<Self, DomainError> {
        self.set_timestamp(timestamp)?;
        Ok(self)
    }

    /// Returns the hour of the day.
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Sets the hour of the day.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AssignmentRejected` if `hour` is not in 0..=23.
    /// The stored hour is unchanged in that case.
    pub fn set_hour(&mut self, hour: i64) -> Result<(), DomainError> {
        self.hour = validate_hour(hour).ok_or_else(|| DomainError::assignment("hour", hour))?;
        Ok(())
    }

    /// Returns the minute of the hour.
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Sets the minute of the hour.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AssignmentRejected` if `minute` is not in 0..=59.
    /// The stored minute is unchanged in that case.
    pub fn set_minute(&mut self, minute: i64) -> Result<(), DomainError> {
        self.minute =
            validate_minute(minute).ok_or_else(|| DomainError::assignment("minute", minute))?;
        Ok(())
    }

    /// Returns the repeat pattern.
    #[must_use]
    pub const fn repeat(&self) -> RepeatDays {
        self.repeat
    }

    /// Replaces the repeat pattern from a slice of flags, Monday first.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AssignmentRejected` unless the slice holds exactly
    /// seven flags. Nothing is written in that case.
    pub fn set_repeat(&mut self, days: &[bool]) -> Result<(), DomainError> {
        self.repeat = RepeatDays::try_from(days)?;
        Ok(())
    }

    /// Replaces the repeat pattern.
    pub const fn set_repeat_days(&mut self, repeat: RepeatDays) {
        self.repeat = repeat;
    }

    /// Returns whether the alarm repeats on `day`.
    #[must_use]
    pub const fn repeats_on(&self, day: Weekday) -> bool {
        self.repeat.get(day)
    }

    /// Sets whether the alarm repeats on `day`.
    pub const fn set_repeats_on(&mut self, day: Weekday, enabled: bool) {
        self.repeat.set(day, enabled);
    }

    weekday_accessors! {
        monday => Monday,
        tuesday => Tuesday,
        wednesday => Wednesday,
        thursday => Thursday,
        friday => Friday,
        saturday => Saturday,
        sunday => Sunday,
    }

    /// Returns true if the alarm repeats on at least one day.
    #[must_use]
    pub fn any_day_enabled(&self) -> bool {
        self.repeat.any()
    }

    /// Returns whether the alarm is enabled.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the alarm.
    pub const fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns the label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Stores the textual rendering of `label`. Never rejected.
    pub fn set_label(&mut self, label: impl std::fmt::Display) {
        self.label = label.to_string();
    }

    /// Returns the store identifier, if assigned.
    #[must_use]
    pub const fn id(&self) -> Option<u64> {
        self.id
    }

    /// Sets the store identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AssignmentRejected` if `id` is negative. The
    /// stored identifier is unchanged in that case.
    pub fn set_id(&mut self, id: i64) -> Result<(), DomainError> {
        let id: u64 = u64::try_from(id).map_err(|_| DomainError::assignment("id", id))?;
        self.id = Some(id);
        Ok(())
    }

    /// Returns the creation timestamp, if set.
    #[must_use]
    pub const fn timestamp(&self) -> Option<u64> {
        self.timestamp
    }

    /// Sets the creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AssignmentRejected` if `timestamp` is negative.
    /// The stored timestamp is unchanged in that case.
    pub fn set_timestamp(&mut self, timestamp: i64) -> Result<(), DomainError> {
        let timestamp: u64 = u64::try_from(timestamp)
            .map_err(|_| DomainError::assignment("timestamp", timestamp))?;
        self.timestamp = Some(timestamp);
        Ok(())
    }

    /// Stores an identifier that is already known to be non-negative.
    pub(crate) const fn store_id(&mut self, id: u64) {
        self.id = Some(id);
    }

    /// Stores a timestamp that is already known to be non-negative.
    pub(crate) const fn store_timestamp(&mut self, timestamp: u64) {
        self.timestamp = Some(timestamp);
    }

    /// Returns the alarm time as minutes since midnight.
    #[must_use]
    pub fn minute_of_day(&self) -> i64 {
        i64::from(self.hour) * MINUTES_PER_HOUR + i64::from(self.minute)
    }
}

impl std::fmt::Display for AlarmEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id: String = self.id.map_or_else(String::new, |id| id.to_string());
        write!(
            f,
            "Alarm ID: {id:>3} | Time: {:02}:{:02} | Enabled: {} | Repeat: {}",
            self.hour,
            self.minute,
            if self.enabled { "Yes" } else { "No" },
            self.repeat
        )
    }
}

/// Returns the hour as `u8` if it is in 0..=23.
pub(crate) fn validate_hour(hour: i64) -> Option<u8> {
    u8::try_from(hour)
        .ok()
        .filter(|hour| i64::from(*hour) < HOURS_PER_DAY)
}

/// Returns the minute as `u8` if it is in 0..=59.
pub(crate) fn validate_minute(minute: i64) -> Option<u8> {
    u8::try_from(minute)
        .ok()
        .filter(|minute| i64::from(*minute) < MINUTES_PER_HOUR)
}

/// Unvalidated shape of a serialized alarm entry.
#[derive(Debug, Deserialize)]
struct RawAlarmEntry {
    hour: i64,
    minute: i64,
    #[serde(default)]
    repeat: RepeatDays,
    #[serde(default = "default_enabled")]
    enabled: bool,
    #[serde(default)]
    label: String,
    #[serde(default)]
    id: Option<u64>,
    #[serde(default)]
    timestamp: Option<u64>,
}

const fn default_enabled() -> bool {
    true
}

impl TryFrom<RawAlarmEntry> for AlarmEntry {
    type Error = DomainError;

    fn try_from(raw: RawAlarmEntry) -> Result<Self, Self::Error> {
        let mut entry: Self = Self::new(raw.hour, raw.minute)?
            .with_repeat(raw.repeat)
            .with_enabled(raw.enabled)
            .with_label(raw.label);
        entry.id = raw.id;
        entry.timestamp = raw.timestamp;
        Ok(entry)
    }
}
