//! Top-level logger exports and the process-wide facade.
//!
//! - `AsyncLogger`: queue-backed logger with a background day-file writer
//! - `Logger`: trait defining the logging surface
//! - `LogLevel`: the two levels, `info` and `error`
//! - `DayFileWriter`: the file side of the writer thread
//!
//! The facade holds exactly one `AsyncLogger` per process. It is created on
//! first use with the default configuration (files in the working
//! directory), or up front by `init_logger`. Construction happens once even
//! when several threads race to be first.
//!
//! ```rust,no_run
//! use daylog::logger::{self, LogLevel};
//! logger::log("app started");
//! logger::set_level(LogLevel::Error);
//! logger::log("something broke");
//! logger::shutdown();
//! ```

pub mod core;
#[allow(clippy::module_inception)]
pub mod logger;
pub mod writer;

pub use core::{Clock, LocalClock, LogLevel, LogRecord, Logger};
pub use logger::AsyncLogger;
pub use writer::DayFileWriter;

use crate::config::LoggerConfig;
use crate::error::LoggerError;
use std::sync::OnceLock;

static GLOBAL_LOGGER: OnceLock<AsyncLogger> = OnceLock::new();

/// Returns the process-wide logger, starting it on first call.
///
/// A writer thread that cannot be spawned is fatal, like any other writer failure.
pub fn instance() -> &'static AsyncLogger {
    GLOBAL_LOGGER.get_or_init(|| {
        AsyncLogger::new(LoggerConfig::default()).unwrap_or_else(|err| writer::fatal(&err))
    })
}

/// Initialize the global logger for the lifetime of the program.
///
/// Must run before anything else touches the facade; fails with
/// `AlreadyInitialized` otherwise.
pub fn init_logger(config: LoggerConfig) -> Result<&'static AsyncLogger, LoggerError> {
    if GLOBAL_LOGGER.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }
    let logger = AsyncLogger::new(config)?;
    // Lost a race with another initializer: the rejected logger is dropped,
    // which stops its writer thread.
    GLOBAL_LOGGER
        .set(logger)
        .map_err(|_rejected| LoggerError::AlreadyInitialized)?;
    Ok(instance())
}

pub fn set_level(level: LogLevel) {
    instance().set_level(level);
}

pub fn level() -> LogLevel {
    instance().level()
}

/// Queue a message at the current level. Never blocks on I/O.
pub fn log(message: &str) {
    instance().log(message);
}

/// Convenience functions
pub fn info(message: &str) {
    instance().info(message);
}

pub fn error(message: &str) {
    instance().error(message);
}

/// Blocks until every message logged so far is on disk.
pub fn flush() {
    instance().flush();
}

/// Drains the queue and stops the writer thread. Call once before exiting.
pub fn shutdown() {
    instance().shutdown();
}
