//! Logging primitives: levels, records, the `Logger` trait and the clock.
//!
//! Only two levels exist. A record carries the level that was current when
//! the caller logged it, so changing the level never retags messages that
//! are already queued.
//!
//! Implementors of `Logger` must be `Send + Sync + 'static` so the trait
//! objects can be stored in global contexts and shared between threads.

use crate::error::LoggerError;
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Info,
    Error,
}

impl LogLevel {
    /// Returns the tag written between the brackets of a record.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Error => "error",
        }
    }

    pub(crate) fn as_u8(self) -> u8 {
        match self {
            LogLevel::Info => 0,
            LogLevel::Error => 1,
        }
    }

    /// Anything that is not `Error` reads back as `Info`.
    pub(crate) fn from_u8(value: u8) -> Self {
        if value == LogLevel::Error.as_u8() {
            LogLevel::Error
        } else {
            LogLevel::Info
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(LogLevel::Info),
            "error" => Ok(LogLevel::Error),
            _ => Err(LoggerError::UnknownLevel(s.to_string())),
        }
    }
}

/// A message waiting in the queue, tagged with its level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
}

impl LogRecord {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Renders the record as one line of a day file, stamped with `now`.
    ///
    /// Format: `H:M:S=>[level]=>message\n`, no zero padding.
    pub fn format(&self, now: NaiveDateTime) -> String {
        format!(
            "{}=>[{}]=>{}\n",
            crate::utilities::clock_time(now),
            self.level,
            self.message
        )
    }
}

/// Minimal logger interface used throughout the crate.
///
/// The core requirement is `log_at` plus access to the current level;
/// the remaining helpers are implemented in terms of those.
pub trait Logger: Send + Sync + 'static {
    /// Queue a message at an explicit level.
    fn log_at(&self, level: LogLevel, message: &str);

    /// Current level applied by `log`.
    fn level(&self) -> LogLevel;

    fn set_level(&self, level: LogLevel);

    /// Queue a message tagged with the current level.
    fn log(&self, message: &str) {
        self.log_at(self.level(), message);
    }

    /// Block until every queued record has been written.
    fn flush(&self) {}

    fn info(&self, message: &str) {
        self.log_at(LogLevel::Info, message);
    }

    fn error(&self, message: &str) {
        self.log_at(LogLevel::Error, message);
    }
}

/// Source of wall-clock time for the writer.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> NaiveDateTime;
}

/// Local time of the host, the clock used outside of tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}
