// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! What the command prints about an alarm.

use lightup_domain::{AlarmEntry, DomainError};
use serde::Serialize;
use time::PrimitiveDateTime;
use tracing::debug;

/// Everything reported for one alarm.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// The alarm as built from the arguments.
    pub alarm: AlarmEntry,
    /// The canonical text rendering of the alarm.
    pub summary: String,
    /// Minutes until the alarm next fires. `None` if no repeat day is set.
    pub minutes_to_alert: Option<u32>,
    /// Alarms derived with the requested offsets.
    pub derived: Vec<DerivedAlarm>,
}

/// An alarm derived from the reported one.
#[derive(Debug, Clone, Serialize)]
pub struct DerivedAlarm {
    /// The offset applied, in minutes.
    pub offset: i64,
    /// The derived alarm.
    pub alarm: AlarmEntry,
    /// Minutes until the derived alarm next fires.
    pub minutes_to_alert: Option<u32>,
}

impl Report {
    /// Builds the report for `alarm` as seen at `now`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::OffsetRejected` for the first offset outside
    /// -59..=59.
    pub fn build(
        alarm: AlarmEntry,
        now: PrimitiveDateTime,
        offsets: &[i64],
    ) -> Result<Self, DomainError> {
        let derived: Vec<DerivedAlarm> = offsets
            .iter()
            .map(|offset| -> Result<DerivedAlarm, DomainError> {
                let derived: AlarmEntry = alarm.diff_alarm(*offset)?;
                Ok(DerivedAlarm {
                    offset: *offset,
                    minutes_to_alert: next_alert(&derived, now),
                    alarm: derived,
                })
            })
            .collect::<Result<_, DomainError>>()?;

        debug!(count = derived.len(), "Derived offset alarms");

        Ok(Self {
            summary: alarm.to_string(),
            minutes_to_alert: next_alert(&alarm, now),
            alarm,
            derived,
        })
    }
}

/// Minutes until `alarm` fires, or `None` if it never will.
fn next_alert(alarm: &AlarmEntry, now: PrimitiveDateTime) -> Option<u32> {
    if !alarm.enabled() {
        return None;
    }
    alarm.minutes_to_alert_at(now)
}

fn describe(minutes: Option<u32>) -> String {
    minutes.map_or_else(
        || String::from("never"),
        |minutes| format!("in {}h {:02}m", minutes / 60, minutes % 60),
    )
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.summary)?;
        writeln!(f, "Next alert: {}", describe(self.minutes_to_alert))?;
        for derived in &self.derived {
            writeln!(
                f,
                "{:+}min: {} | Label: {} | Next alert: {}",
                derived.offset,
                derived.alarm,
                derived.alarm.label(),
                describe(derived.minutes_to_alert)
            )?;
        }
        Ok(())
    }
}
