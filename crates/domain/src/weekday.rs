// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weekdays and the seven-day repeat pattern.
//!
//! Days are indexed Monday (0) through Sunday (6). The repeat pattern uses the
//! same indexing, so `RepeatDays::get(Weekday::Thursday)` reads slot 3.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of days in the repeat pattern.
pub const DAYS_PER_WEEK: usize = 7;

/// A day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days in Monday to Sunday order.
    pub const ALL: [Self; DAYS_PER_WEEK] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Returns the zero-based index of this day (Monday = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the weekday for a zero-based index.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWeekday` if the index is not in 0..=6.
    pub fn from_index(index: i64) -> Result<Self, DomainError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| DomainError::weekday(index))
    }

    /// Returns the three-letter English abbreviation.
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
            Self::Sunday => "Sun",
        }
    }

    /// Returns the full English name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Returns the day `days` after this one, wrapping around the week.
    /// Negative values step backwards.
    #[must_use]
    pub const fn shifted(self, days: i64) -> Self {
        #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        let index: usize = (self.index() as i64 + days).rem_euclid(DAYS_PER_WEEK as i64) as usize;
        Self::ALL[index]
    }

    /// Returns the following day.
    #[must_use]
    pub const fn next(self) -> Self {
        self.shifted(1)
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = DomainError;

    /// Accepts full or three-letter day names in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle: String = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| {
                day.as_str().to_lowercase() == needle || day.abbreviation().to_lowercase() == needle
            })
            .ok_or_else(|| DomainError::weekday_name(s))
    }
}

impl From<time::Weekday> for Weekday {
    fn from(day: time::Weekday) -> Self {
        match day {
            time::Weekday::Monday => Self::Monday,
            time::Weekday::Tuesday => Self::Tuesday,
            time::Weekday::Wednesday => Self::Wednesday,
            time::Weekday::Thursday => Self::Thursday,
            time::Weekday::Friday => Self::Friday,
            time::Weekday::Saturday => Self::Saturday,
            time::Weekday::Sunday => Self::Sunday,
        }
    }
}

/// The per-weekday repeat flags of an alarm.
///
/// Always exactly seven entries. Construction from a slice checks the length
/// before anything is stored, so a malformed pattern never half-applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<bool>", into = "[bool; 7]")]
pub struct RepeatDays([bool; DAYS_PER_WEEK]);

impl RepeatDays {
    /// A pattern with no day enabled.
    pub const NONE: Self = Self([false; DAYS_PER_WEEK]);

    /// A pattern with every day enabled.
    pub const EVERY_DAY: Self = Self([true; DAYS_PER_WEEK]);

    /// Creates a pattern from seven flags, Monday first.
    #[must_use]
    pub const fn new(days: [bool; DAYS_PER_WEEK]) -> Self {
        Self(days)
    }

    /// Creates a pattern with only the given days enabled.
    #[must_use]
    pub fn from_days(days: &[Weekday]) -> Self {
        let mut pattern: Self = Self::NONE;
        for day in days {
            pattern.set(*day, true);
        }
        pattern
    }

    /// Returns whether the alarm repeats on `day`.
    #[must_use]
    pub const fn get(&self, day: Weekday) -> bool {
        self.0[day.index()]
    }

    /// Sets whether the alarm repeats on `day`.
    pub const fn set(&mut self, day: Weekday, enabled: bool) {
        self.0[day.index()] = enabled;
    }

    /// Returns true if at least one day is enabled.
    #[must_use]
    pub fn any(&self) -> bool {
        self.0.iter().any(|day| *day)
    }

    /// Returns the raw flags, Monday first.
    #[must_use]
    pub const fn as_array(&self) -> [bool; DAYS_PER_WEEK] {
        self.0
    }

    /// Returns the enabled days in Monday to Sunday order.
    pub fn enabled_days(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL.into_iter().filter(move |day| self.get(*day))
    }

    /// Returns the pattern moved `days` forward through the week.
    ///
    /// A flag set on Monday with `days = 1` ends up on Tuesday; with
    /// `days = -1` it ends up on Sunday.
    #[must_use]
    pub fn rotated(&self, days: i64) -> Self {
        let mut rotated: Self = Self::NONE;
        for day in Weekday::ALL {
            rotated.set(day.shifted(days), self.get(day));
        }
        rotated
    }
}

impl TryFrom<&[bool]> for RepeatDays {
    type Error = DomainError;

    fn try_from(days: &[bool]) -> Result<Self, Self::Error> {
        <[bool; DAYS_PER_WEEK]>::try_from(days)
            .map(Self)
            .map_err(|_| DomainError::assignment("repeat", format!("{days:?}")))
    }
}

impl TryFrom<Vec<bool>> for RepeatDays {
    type Error = DomainError;

    fn try_from(days: Vec<bool>) -> Result<Self, Self::Error> {
        Self::try_from(days.as_slice())
    }
}

impl From<RepeatDays> for [bool; DAYS_PER_WEEK] {
    fn from(days: RepeatDays) -> Self {
        days.0
    }
}

impl std::fmt::Display for RepeatDays {
    /// Renders each day as its abbreviation when enabled or `---` otherwise,
    /// each followed by a single space.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for day in Weekday::ALL {
            let text: &str = if self.get(day) {
                day.abbreviation()
            } else {
                "---"
            };
            write!(f, "{text} ")?;
        }
        Ok(())
    }
}
