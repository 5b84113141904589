//! Rolling Logger
//!
//! `log` backend for the browser: every record goes to the devtools console
//! and into a bounded ring buffer that can be read back for diagnostics.
//! Off-wasm (unit tests, tooling) records go to stderr instead of the console.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 500;

static LOGGER: OnceLock<&'static RollingLogger> = OnceLock::new();

/// Console logger with a circular buffer of the most recent lines
pub struct RollingLogger {
    app_name: String,
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(app_name: &str, level: LevelFilter, capacity: usize) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Format a record the way it is written out and buffered
    pub fn format_line(&self, level: Level, target: &str, message: &str) -> String {
        format!(
            "{} {:<5} {} [{}] {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            level,
            self.app_name,
            target,
            message
        )
    }

    /// Append a line, evicting the oldest one once the buffer is full
    pub fn push_line(&self, line: String) {
        let Ok(mut lines) = self.lines.lock() else { return };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Snapshot of the buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format_line(record.level(), record.target(), &record.args().to_string());
        write_out(record.level(), &line);
        self.push_line(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_out(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_out(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the rolling logger as the global `log` backend.
///
/// Calling it again after a successful install returns the `log` crate's error.
pub fn init_logger(app_name: &str, level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger: &'static RollingLogger = Box::leak(Box::new(RollingLogger::new(app_name, level, capacity)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    let _ = LOGGER.set(logger);
    Ok(())
}

/// Lines buffered by the installed logger (empty before `init_logger`)
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(|logger| logger.lines()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_most_recent_lines() {
        let logger = RollingLogger::new("Test", LevelFilter::Info, 3);
        for i in 0..5 {
            logger.push_line(format!("line {}", i));
        }

        assert_eq!(logger.lines(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_filters_by_level() {
        let logger = RollingLogger::new("Test", LevelFilter::Warn, 10);
        logger.log(&Record::builder().level(Level::Info).args(format_args!("skipped")).build());
        logger.log(&Record::builder().level(Level::Warn).args(format_args!("kept")).build());

        let lines = logger.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("kept"));
        assert!(lines[0].contains("WARN"));
    }

    #[test]
    fn test_zero_capacity_still_keeps_last_line() {
        let logger = RollingLogger::new("Test", LevelFilter::Info, 0);
        logger.push_line("a".to_string());
        logger.push_line("b".to_string());

        assert_eq!(logger.lines(), vec!["b"]);
    }
}
