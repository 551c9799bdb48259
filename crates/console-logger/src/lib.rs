//! Console Logger
//!
//! A `log` backend that writes `HH:MM:SS.mmm [LEVEL target] message` lines to
//! the browser console (stderr off wasm) and keeps the most recent lines
//! in a circular buffer for the dashboard's recent activity panel.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Lines kept in the circular buffer
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

struct ConsoleLogger {
    app_name: String,
    level: LevelFilter,
    buffer: Mutex<RingBuffer>,
}

/// Fixed-capacity buffer that drops the oldest line when full
#[derive(Debug)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn format_line(level: Level, target: &str, message: &str) -> String {
    format!(
        "{} [{} {}] {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        level,
        target,
        message
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        emit(record.level(), &line);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    fn flush(&self) {}
}

/// Install the logger; calling it twice is an error
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), String> {
    init_with_capacity(app_name, level, DEFAULT_CAPACITY)
}

pub fn init_with_capacity(app_name: &str, level: LevelFilter, capacity: usize) -> Result<(), String> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger {
        app_name: app_name.to_string(),
        level,
        buffer: Mutex::new(RingBuffer::new(capacity)),
    });
    log::set_logger(logger).map_err(|e| format!("logger already set: {}", e))?;
    log::set_max_level(level);
    log::info!("{} logging at {}", logger.app_name, level);
    Ok(())
}

/// Buffered lines, oldest first; empty before `init_logger`
pub fn recent_lines() -> Vec<String> {
    LOGGER
        .get()
        .and_then(|logger| logger.buffer.lock().ok().map(|buffer| buffer.lines()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut buffer = RingBuffer::new(2);
        buffer.push("a".to_string());
        buffer.push("b".to_string());
        buffer.push("c".to_string());
        assert_eq!(buffer.lines(), vec!["b", "c"]);
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut buffer = RingBuffer::new(0);
        buffer.push("a".to_string());
        buffer.push("b".to_string());
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_line_format() {
        let line = format_line(Level::Warn, "admin_core::csv_io", "row 2 skipped");
        assert!(line.ends_with(" [WARN admin_core::csv_io] row 2 skipped"));
    }

    // Single test for the global logger since it can only be installed once
    #[test]
    fn test_init_records_lines() {
        init_with_capacity("test", LevelFilter::Info, 8).unwrap();
        assert!(init_logger("again", LevelFilter::Info).is_err());

        log::info!("hello");
        log::debug!("filtered out");
        log::error!("boom");

        let lines = recent_lines();
        assert!(lines.iter().any(|l| l.ends_with("] hello")));
        assert!(lines.iter().any(|l| l.contains("[ERROR") && l.ends_with("] boom")));
        assert!(!lines.iter().any(|l| l.contains("filtered out")));
    }
}
