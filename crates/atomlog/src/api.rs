//! crates/atomlog/src/api.rs
//! Free functions over the process-wide [`Logger`].
//!
//! `warn`, `error` and `critical` are `#[track_caller]`, so the location
//! suffix names the line that called them rather than this module.

use std::panic::Location;

use crate::levels::LogLevel;
use crate::logger::Logger;
use crate::palette::CRITICAL_MARKER;

/// Sets the minimum level emitted by the process-wide logger.
pub fn set_level(level: LogLevel) {
    Logger::instance().set_level(level);
}

/// Returns the minimum level emitted by the process-wide logger.
#[must_use]
pub fn level() -> LogLevel {
    Logger::instance().level()
}

/// Logs through the process-wide logger with an explicit location.
pub fn log(level: LogLevel, message: &str, file: Option<&str>, line: u32) {
    Logger::instance().log(level, message, file, line);
}

/// Logs an `INFO` message.
pub fn info(message: &str) {
    log(LogLevel::Info, message, None, 0);
}

/// Logs a `DEBUG` message.
pub fn debug(message: &str) {
    log(LogLevel::Debug, message, None, 0);
}

/// Logs a `WARN` message tagged with the caller's file and line.
#[track_caller]
pub fn warn(message: &str) {
    let caller = Location::caller();
    log(LogLevel::Warn, message, Some(caller.file()), caller.line());
}

/// Logs an `ERROR` message tagged with the caller's file and line.
#[track_caller]
pub fn error(message: &str) {
    let caller = Location::caller();
    log(LogLevel::Error, message, Some(caller.file()), caller.line());
}

/// Logs a message at any level, without a location.
pub fn custom(level: LogLevel, message: &str) {
    log(level, message, None, 0);
}

/// Logs an `ERROR` message prefixed with a bold `CRITICAL:` marker.
#[track_caller]
pub fn critical(message: &str) {
    let caller = Location::caller();
    let logger = Logger::instance();
    if !logger.enabled(LogLevel::Error) {
        return;
    }
    let marked = critical_message(message);
    logger.log(LogLevel::Error, &marked, Some(caller.file()), caller.line());
}

/// Logs `message` at `level` only when `condition` holds.
pub fn conditional(condition: bool, level: LogLevel, message: &str) {
    if condition {
        custom(level, message);
    }
}

/// Prefixes `message` with [`CRITICAL_MARKER`].
#[must_use]
pub fn critical_message(message: &str) -> String {
    let mut marked = String::with_capacity(CRITICAL_MARKER.len() + message.len());
    marked.push_str(CRITICAL_MARKER);
    marked.push_str(message);
    marked
}
