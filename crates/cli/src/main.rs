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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod report;

#[cfg(test)]
mod tests;

use args::Args;
use clap::Parser;
use color_eyre::{Result, eyre::WrapErr};
use lightup_domain::AlarmEntry;
use report::Report;
use time::{OffsetDateTime, PrimitiveDateTime};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // RUST_LOG wins over -v/-q when set.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::default().add_directive(args.log_level().into())),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let alarm: AlarmEntry = args.alarm().wrap_err("Could not build alarm")?;
    info!(%alarm, "Alarm created");

    let now: PrimitiveDateTime = args.at.unwrap_or_else(local_now);
    let report: Report = Report::build(alarm, now, &args.snooze)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).wrap_err("Could not serialize report")?
        );
    } else {
        print!("{report}");
    }

    Ok(())
}

/// Returns the local wall-clock time, falling back to UTC when the local
/// offset cannot be determined.
fn local_now() -> PrimitiveDateTime {
    let now: OffsetDateTime = OffsetDateTime::now_local().unwrap_or_else(|err| {
        warn!(error = %err, "Local offset unavailable, using UTC");
        OffsetDateTime::now_utc()
    });
    PrimitiveDateTime::new(now.date(), now.time())
}
