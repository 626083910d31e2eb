// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod alarm;
mod error;
mod field;
mod offset;
mod schedule;
mod weekday;

#[cfg(test)]
mod tests;

pub use alarm::{AlarmEntry, HOURS_PER_DAY, MINUTES_PER_DAY, MINUTES_PER_HOUR};
pub use error::DomainError;
pub use field::AlarmField;
pub use offset::Offset;
pub use weekday::{DAYS_PER_WEEK, RepeatDays, Weekday};
