// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time remaining until an alarm's next trigger.
//!
//! The calculation works on naive local wall-clock values: an hour, a minute
//! and a weekday. Only the repeat pattern decides which days fire. The
//! `enabled` flag is left to the scheduler, which is also expected to check
//! [`AlarmEntry::any_day_enabled`] first.
//!
//! ## Rules
//!
//! - If today is a repeat day and the alarm time has not passed, the alarm
//!   fires today (a result of 0 means it is due now)
//! - Otherwise the nearest repeat day after today wins, wrapping across the
//!   end of the week
//! - If today is the only repeat day and its time has passed, the alarm fires
//!   a full week later

use crate::alarm::{AlarmEntry, MINUTES_PER_DAY, MINUTES_PER_HOUR, validate_hour, validate_minute};
use crate::error::DomainError;
use crate::weekday::{DAYS_PER_WEEK, Weekday};
use time::PrimitiveDateTime;

impl AlarmEntry {
    /// Returns the minutes from `current_hour:current_minute` on
    /// `current_weekday` (0 = Monday) until the alarm next fires.
    ///
    /// Returns `Ok(None)` when no repeat day is enabled.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCurrentTime` if the hour or minute is out
    /// of range, or `DomainError::InvalidWeekday` if the weekday is not in
    /// 0..=6.
    ///
    /// # Example
    ///
    /// ```text
    /// alarm 09:30, repeats Monday, Thursday, Sunday
    ///
    /// Wednesday 19:55  ->  815   (Thursday 09:30)
    /// Wednesday 09:30  ->  1440  (Thursday 09:30)
    /// Tuesday   09:30  ->  2880  (Thursday 09:30)
    /// ```
    pub fn minutes_to_alert(
        &self,
        current_hour: i64,
        current_minute: i64,
        current_weekday: i64,
    ) -> Result<Option<u32>, DomainError> {
        let (Some(hour), Some(minute)) = (validate_hour(current_hour), validate_minute(current_minute))
        else {
            return Err(DomainError::current_time(current_hour, current_minute));
        };
        let weekday: Weekday = Weekday::from_index(current_weekday)?;

        let current: i64 = i64::from(hour) * MINUTES_PER_HOUR + i64::from(minute);
        Ok(self.minutes_from(current, weekday))
    }

    /// Returns the minutes from the wall-clock value `now` until the alarm
    /// next fires, or `None` when no repeat day is enabled.
    ///
    /// Seconds are ignored.
    #[must_use]
    pub fn minutes_to_alert_at(&self, now: PrimitiveDateTime) -> Option<u32> {
        let current: i64 = i64::from(now.hour()) * MINUTES_PER_HOUR + i64::from(now.minute());
        self.minutes_from(current, Weekday::from(now.weekday()))
    }

    fn minutes_from(&self, current: i64, weekday: Weekday) -> Option<u32> {
        let same_day_delta: i64 = self.minute_of_day() - current;

        if same_day_delta >= 0 && self.repeats_on(weekday) {
            return u32::try_from(same_day_delta).ok();
        }

        // Not firing today: at least one full day rolls over before the
        // matched day, then the exact minute difference is added.
        #[allow(clippy::cast_possible_wrap)]
        let days_ahead: i64 = (1..=DAYS_PER_WEEK as i64)
            .find(|days| self.repeats_on(weekday.shifted(*days)))?;

        let minutes: i64 = (days_ahead - 1) * MINUTES_PER_DAY + same_day_delta + MINUTES_PER_DAY;
        tracing::trace!(days_ahead, minutes, "computed minutes to alert");
        u32::try_from(minutes).ok()
    }
}
