// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors produced while building or editing an alarm entry.
///
/// None of these are fatal. A rejected construction yields no entry, a
/// rejected assignment leaves the previous value in place, and a rejected
/// offset yields no derived entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The hour or minute given to the constructor is out of range or of the
    /// wrong type.
    #[error("Cannot create alarm: invalid {field} value '{value}'")]
    ConstructionRejected {
        /// The rejected field.
        field: &'static str,
        /// The rejected value, as text.
        value: String,
    },

    /// A setter was given an out-of-range, wrong-type or malformed value.
    #[error("Rejected {field} assignment: '{value}'")]
    AssignmentRejected {
        /// The rejected field.
        field: &'static str,
        /// The rejected value, as text.
        value: String,
    },

    /// The offset given to `diff_alarm` is not an integer in [-59, 59].
    #[error("Rejected alarm offset '{value}': must be an integer between -59 and 59")]
    OffsetRejected {
        /// The rejected offset, as text.
        value: String,
    },

    /// A reference time of day outside 00:00 to 23:59.
    #[error("Invalid current time {hour}:{minute}: hour must be 0-23 and minute 0-59")]
    InvalidCurrentTime {
        /// The rejected hour.
        hour: i64,
        /// The rejected minute.
        minute: i64,
    },

    /// A weekday index outside 0 (Monday) to 6 (Sunday).
    #[error("Invalid weekday index {0}: must be between 0 (Monday) and 6 (Sunday)")]
    InvalidWeekday(i64),

    /// A weekday name that is neither a full nor a three-letter day name.
    #[error("Invalid weekday name '{0}'")]
    InvalidWeekdayName(String),

    /// A patch key that names no alarm field.
    #[error("Unknown alarm field '{0}'")]
    UnknownField(String),
}

impl DomainError {
    /// Builds a `ConstructionRejected` error and reports it.
    pub(crate) fn construction(field: &'static str, value: impl ToString) -> Self {
        let value: String = value.to_string();
        tracing::warn!(field, value = %value, "alarm construction rejected");
        Self::ConstructionRejected { field, value }
    }

    /// Builds an `AssignmentRejected` error and reports it.
    pub(crate) fn assignment(field: &'static str, value: impl ToString) -> Self {
        let value: String = value.to_string();
        tracing::warn!(field, value = %value, "alarm field assignment rejected");
        Self::AssignmentRejected { field, value }
    }

    /// Builds an `OffsetRejected` error and reports it.
    pub(crate) fn offset(value: impl ToString) -> Self {
        let value: String = value.to_string();
        tracing::warn!(value = %value, "alarm offset rejected");
        Self::OffsetRejected { value }
    }

    /// Builds an `InvalidCurrentTime` error and reports it.
    pub(crate) fn current_time(hour: i64, minute: i64) -> Self {
        tracing::warn!(hour, minute, "reference time rejected");
        Self::InvalidCurrentTime { hour, minute }
    }

    /// Builds an `InvalidWeekday` error and reports it.
    pub(crate) fn weekday(index: i64) -> Self {
        tracing::warn!(index, "weekday index rejected");
        Self::InvalidWeekday(index)
    }

    /// Builds an `InvalidWeekdayName` error and reports it.
    pub(crate) fn weekday_name(name: &str) -> Self {
        tracing::warn!(value = name, "weekday name rejected");
        Self::InvalidWeekdayName(name.to_string())
    }

    /// Builds an `UnknownField` error and reports it.
    pub(crate) fn unknown_field(key: &str) -> Self {
        tracing::warn!(key, "unknown alarm field rejected");
        Self::UnknownField(key.to_string())
    }
}
