// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Untyped field assignment.
//!
//! Stores and web front ends hand over alarm edits as JSON values whose types
//! are not known until runtime. This module checks the type as well as the
//! range of each value before it reaches the typed setters:
//!
//! - `hour`, `minute`, `id`, `timestamp` and offsets must be JSON integers
//!   (booleans, floats and strings are rejected)
//! - `enabled` and the weekday flags must be JSON booleans (0/1 are rejected)
//! - `repeat` must be an array of exactly seven JSON booleans
//! - `label` accepts anything and stores its text
//!
//! Field keys are the lowercase names returned by [`AlarmField::name`]; day
//! keys are full day names (`"monday"`), not abbreviations.

use crate::alarm::AlarmEntry;
use crate::error::DomainError;
use crate::weekday::Weekday;
use serde_json::{Map, Value};
use std::str::FromStr;

/// A named, assignable alarm field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlarmField {
    Hour,
    Minute,
    Repeat,
    Day(Weekday),
    Enabled,
    Label,
    Id,
    Timestamp,
}

impl AlarmField {
    /// Returns the field name as used in documents and diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Repeat => "repeat",
            Self::Day(Weekday::Monday) => "monday",
            Self::Day(Weekday::Tuesday) => "tuesday",
            Self::Day(Weekday::Wednesday) => "wednesday",
            Self::Day(Weekday::Thursday) => "thursday",
            Self::Day(Weekday::Friday) => "friday",
            Self::Day(Weekday::Saturday) => "saturday",
            Self::Day(Weekday::Sunday) => "sunday",
            Self::Enabled => "enabled",
            Self::Label => "label",
            Self::Id => "id",
            Self::Timestamp => "timestamp",
        }
    }
}

impl std::fmt::Display for AlarmField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AlarmField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hour" => Ok(Self::Hour),
            "minute" => Ok(Self::Minute),
            "repeat" => Ok(Self::Repeat),
            "enabled" => Ok(Self::Enabled),
            "label" => Ok(Self::Label),
            "id" => Ok(Self::Id),
            "timestamp" => Ok(Self::Timestamp),
            other => Weekday::ALL
                .into_iter()
                .map(Self::Day)
                .find(|field| field.name() == other)
                .ok_or_else(|| DomainError::unknown_field(other)),
        }
    }
}

impl AlarmEntry {
    /// Assigns an untyped value to `field`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AssignmentRejected` if the value has the wrong
    /// type or is out of range for the field. The entry is unchanged in that
    /// case.
    pub fn assign(&mut self, field: AlarmField, value: &Value) -> Result<(), DomainError> {
        match field {
            AlarmField::Hour => self.set_hour(integer(field, value)?),
            AlarmField::Minute => self.set_minute(integer(field, value)?),
            AlarmField::Id => {
                self.store_id(unsigned(field, value)?);
                Ok(())
            }
            AlarmField::Timestamp => {
                self.store_timestamp(unsigned(field, value)?);
                Ok(())
            }
            AlarmField::Repeat => {
                let days: Vec<bool> = value
                    .as_array()
                    .and_then(|items| items.iter().map(Value::as_bool).collect())
                    .ok_or_else(|| DomainError::assignment(field.name(), value))?;
                self.set_repeat(&days)
            }
            AlarmField::Day(day) => {
                self.set_repeats_on(day, boolean(field, value)?);
                Ok(())
            }
            AlarmField::Enabled => {
                self.set_enabled(boolean(field, value)?);
                Ok(())
            }
            AlarmField::Label => {
                match value {
                    Value::String(text) => self.set_label(text),
                    other => self.set_label(other),
                }
                Ok(())
            }
        }
    }

    /// Applies every key of `patch` as an untyped assignment.
    ///
    /// Each key is handled on its own: a rejected key does not stop the
    /// others from being applied. Unknown keys are rejected with
    /// `DomainError::UnknownField`.
    ///
    /// Returns the rejections, empty if every key was applied.
    pub fn apply_patch(&mut self, patch: &Map<String, Value>) -> Vec<DomainError> {
        patch
            .iter()
            .filter_map(|(key, value)| {
                AlarmField::from_str(key)
                    .and_then(|field| self.assign(field, value))
                    .err()
            })
            .collect()
    }

    /// Same as [`AlarmEntry::diff_alarm`] with an untyped offset.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::OffsetRejected` if the offset is not a JSON
    /// integer in -59..=59.
    pub fn diff_alarm_value(&self, offset_minutes: &Value) -> Result<Self, DomainError> {
        let minutes: i64 = offset_minutes
            .as_i64()
            .ok_or_else(|| DomainError::offset(offset_minutes))?;
        self.diff_alarm(minutes)
    }
}

fn integer(field: AlarmField, value: &Value) -> Result<i64, DomainError> {
    value
        .as_i64()
        .ok_or_else(|| DomainError::assignment(field.name(), value))
}

fn unsigned(field: AlarmField, value: &Value) -> Result<u64, DomainError> {
    value
        .as_u64()
        .ok_or_else(|| DomainError::assignment(field.name(), value))
}

fn boolean(field: AlarmField, value: &Value) -> Result<bool, DomainError> {
    value
        .as_bool()
        .ok_or_else(|| DomainError::assignment(field.name(), value))
}
