//! Queue-backed logger that hands every record to a dedicated writer thread.

use super::core::{Clock, LocalClock, LogLevel, LogRecord, Logger};
use super::writer::{self, DayFileWriter};
use crate::config::LoggerConfig;
use crate::error::LoggerError;
use crate::utilities::thread_safe_queue::ThreadSafeQueue;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};

/// Asynchronous day-file logger.
///
/// `log` only pushes onto an unbounded queue and returns. A single writer
/// thread, started by the constructor, pops records in arrival order and
/// appends them to `<directory>/<y>-<m>-<d>-log.txt`.
///
/// Dropping the logger shuts it down, which flushes everything that was
/// queued before the drop. The global instance in [`crate::logger`] is
/// never dropped, so callers must use [`crate::logger::shutdown`] to flush
/// it before the process exits.
pub struct AsyncLogger {
    queue: ThreadSafeQueue<LogRecord>,
    level: AtomicU8,
    writer: Mutex<Option<JoinHandle<()>>>,
}

impl AsyncLogger {
    /// Starts a logger that stamps records with the host's local time.
    pub fn new(config: LoggerConfig) -> Result<Self, LoggerError> {
        Self::with_clock(config, Arc::new(LocalClock))
    }

    pub fn with_clock(config: LoggerConfig, clock: Arc<dyn Clock>) -> Result<Self, LoggerError> {
        let queue = ThreadSafeQueue::new();
        let day_writer = DayFileWriter::new(config.directory);

        let writer_queue = queue.clone();
        let handle = thread::Builder::new()
            .name("daylog-writer".to_string())
            .spawn(move || writer::run(writer_queue, day_writer, clock))
            .map_err(LoggerError::Spawn)?;

        Ok(Self {
            queue,
            level: AtomicU8::new(config.level.as_u8()),
            writer: Mutex::new(Some(handle)),
        })
    }

    /// Number of records waiting for the writer.
    #[cfg(test)]
    pub(crate) fn pending(&self) -> usize {
        self.queue.queue_size()
    }

    /// Stops accepting records, waits for the writer to drain the queue and joins it.
    ///
    /// Safe to call more than once. Records logged afterwards are dropped.
    pub fn shutdown(&self) {
        self.queue.close();
        let handle = self
            .writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            // The writer never panics on its own; a panic here means the
            // thread is already gone and there is nothing left to drain.
            handle.join().ok();
        }
    }

    pub fn is_shut_down(&self) -> bool {
        self.queue.is_closed()
    }
}

impl Logger for AsyncLogger {
    fn log_at(&self, level: LogLevel, message: &str) {
        // The only failure is QueueClosed after shutdown; the record is
        // dropped because logging never fails the caller.
        self.queue.enqueue(LogRecord::new(level, message)).ok();
    }

    fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed))
    }

    fn set_level(&self, level: LogLevel) {
        self.level.store(level.as_u8(), Ordering::Relaxed);
    }

    fn flush(&self) {
        if !self.is_shut_down() {
            self.queue.wait_processed();
        }
    }
}

impl Drop for AsyncLogger {
    fn drop(&mut self) {
        self.shutdown();
    }
}
