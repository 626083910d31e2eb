// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AlarmEntry, RepeatDays, Weekday};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// In-memory sink for formatted tracing output.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a warn-level subscriber installed and returns its result
/// together with everything that was logged.
pub fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs: CapturedLogs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .finish();
    let result: T = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}

/// 09:30 on Monday, Thursday and Sunday.
pub fn create_test_alarm() -> AlarmEntry {
    AlarmEntry::new(9, 30)
        .unwrap()
        .with_repeat(RepeatDays::from_days(&[
            Weekday::Monday,
            Weekday::Thursday,
            Weekday::Sunday,
        ]))
}
