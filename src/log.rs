// src/log.rs
//
// Append-only run log at `LOG_FILE`. Lines look like
//   [00:00:05.012][DEBUG][us_men_25_34] GET https://.../reachestimate
// The bracketed label is the spec being worked on, set with `spec_scope`
// by the runner; lines outside any spec have no label.
//
// Never fails: an unwritable log file just drops the line.

use std::cell::RefCell;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use crate::config::consts::LOG_FILE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Debug,
    Error,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Error => "ERROR",
        }
    }
}

static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();

thread_local! {
    static SPEC: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Tags this thread's log lines with `label` until dropped.
#[must_use = "the label is cleared when the scope is dropped"]
pub struct SpecScope {
    prev: Option<String>,
}

pub fn spec_scope(label: &str) -> SpecScope {
    let prev = SPEC.with(|s| s.replace(Some(s!(label))));
    SpecScope { prev }
}

impl Drop for SpecScope {
    fn drop(&mut self) {
        let prev = self.prev.take();
        SPEC.with(|s| *s.borrow_mut() = prev);
    }
}

fn current_spec() -> Option<String> {
    SPEC.with(|s| s.borrow().clone())
}

fn clock(ms: u128) -> String {
    let ms = ms as u64;
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        ms / 3_600_000,
        ms / 60_000 % 60,
        ms / 1_000 % 60,
        ms % 1_000
    )
}

fn format_line(elapsed_ms: u128, level: Level, spec: Option<&str>, msg: &str) -> String {
    match spec {
        Some(label) => format!("[{}][{}][{label}] {msg}\n", clock(elapsed_ms), level.tag()),
        None => format!("[{}][{}] {msg}\n", clock(elapsed_ms), level.tag()),
    }
}

pub fn write_log(level: Level, msg: &str) {
    let start = *START.get_or_init(Instant::now);
    let line = format_line(start.elapsed().as_millis(), level, current_spec().as_deref(), msg);

    let Ok(_guard) = LOG_LOCK.lock() else { return };
    if let Some(dir) = Path::new(LOG_FILE).parent() {
        let _ = fs::create_dir_all(dir);
    }
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(LOG_FILE) {
        let _ = file.write_all(line.as_bytes());
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Info, &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Debug, &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Error, &format!($($arg)*))
    };
}
