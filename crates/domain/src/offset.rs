// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived alarms offset from an existing one.
//!
//! Used by notification and editing layers to build snooze or pre-alarm
//! variants. The derived alarm is a new record: it never carries the source's
//! identifier or timestamp, and the source is never modified.

use crate::alarm::{AlarmEntry, MINUTES_PER_DAY, MINUTES_PER_HOUR};
use crate::error::DomainError;

/// A signed alarm offset of at most 59 minutes either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Offset(i64);

impl Offset {
    /// Largest offset magnitude in minutes.
    pub const MAX_MINUTES: i64 = 59;

    /// Creates an offset.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::OffsetRejected` if `minutes` is not in -59..=59.
    pub fn new(minutes: i64) -> Result<Self, DomainError> {
        if (-Self::MAX_MINUTES..=Self::MAX_MINUTES).contains(&minutes) {
            Ok(Self(minutes))
        } else {
            Err(DomainError::offset(minutes))
        }
    }

    /// Returns the offset in minutes.
    #[must_use]
    pub const fn minutes(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Offset {
    type Error = DomainError;

    fn try_from(minutes: i64) -> Result<Self, Self::Error> {
        Self::new(minutes)
    }
}

impl std::fmt::Display for Offset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+}min", self.0)
    }
}

impl AlarmEntry {
    /// Returns a new alarm `offset_minutes` away from this one.
    ///
    /// The time of day wraps within a single day. When the shift crosses
    /// midnight the repeat pattern moves with it: forwards one day for a
    /// forward crossing, backwards one day for a backward crossing. The
    /// enabled flag is copied, the label records the shift, and the
    /// identifier and timestamp are left unset.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::OffsetRejected` if `offset_minutes` is not in
    /// -59..=59. No alarm is derived in that case.
    ///
    /// # Example
    ///
    /// ```text
    /// 14:10 Mon Thu Sun, +59  ->  15:09 Mon Thu Sun
    /// 23:50 Mon Thu Fri Sun, +30  ->  00:20 Mon Tue Fri Sat
    /// 00:10 Mon Thu Fri Sun, -30  ->  23:40 Wed Thu Sat Sun
    /// ```
    pub fn diff_alarm(&self, offset_minutes: i64) -> Result<Self, DomainError> {
        Ok(self.derive(Offset::new(offset_minutes)?))
    }

    /// Same as [`AlarmEntry::diff_alarm`] with an already validated offset.
    #[must_use]
    pub fn derive(&self, offset: Offset) -> Self {
        let shifted: i64 = self.minute_of_day() + offset.minutes();
        let days_crossed: i64 = shifted.div_euclid(MINUTES_PER_DAY);
        let minute_of_day: i64 = shifted.rem_euclid(MINUTES_PER_DAY);

        let id: String = self
            .id()
            .map_or_else(|| String::from("None"), |id| id.to_string());
        let label: String = format!("{} (Alarm {id} {offset})", self.label());

        tracing::debug!(
            source_id = ?self.id(),
            offset = offset.minutes(),
            days_crossed,
            "deriving offset alarm"
        );

        // rem_euclid keeps minute_of_day in 0..1440.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (hour, minute): (u8, u8) = (
            (minute_of_day / MINUTES_PER_HOUR) as u8,
            (minute_of_day % MINUTES_PER_HOUR) as u8,
        );

        Self::at(hour, minute)
            .with_repeat(self.repeat().rotated(days_crossed))
            .with_enabled(self.enabled())
            .with_label(label)
    }
}
