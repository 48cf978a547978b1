//! Background writer: drains the queue into one file per calendar day.

use super::core::{Clock, LogRecord};
use crate::error::LoggerError;
use crate::utilities::log_file_path;
use crate::utilities::thread_safe_queue::ThreadSafeQueue;
use chrono::{NaiveDate, NaiveDateTime};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// Appends records to the file for the current day.
///
/// The handle is cached and only reopened when the date of the record's
/// timestamp differs from the date of the open file.
pub struct DayFileWriter {
    directory: PathBuf,
    current: Option<OpenDay>,
}

struct OpenDay {
    date: NaiveDate,
    path: PathBuf,
    file: File,
}

impl DayFileWriter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            current: None,
        }
    }

    /// Path of the file currently held open, if any.
    #[cfg(test)]
    pub(crate) fn current_path(&self) -> Option<&std::path::Path> {
        self.current.as_ref().map(|day| day.path.as_path())
    }

    /// Formats `record` with the time `now` and appends it to the file for `now`'s date.
    ///
    /// On error no file is held open; the next record retries the open.
    pub fn write_record(
        &mut self,
        record: &LogRecord,
        now: NaiveDateTime,
    ) -> Result<(), LoggerError> {
        let date = now.date();
        let day = match self.current.take() {
            Some(day) if day.date == date => day,
            stale => {
                drop(stale);
                self.open(date)?
            }
        };
        let day = self.current.insert(day);

        let line = record.format(now);
        day.file
            .write_all(line.as_bytes())
            .map_err(|source| LoggerError::Io {
                path: day.path.clone(),
                source,
            })
    }

    fn open(&self, date: NaiveDate) -> Result<OpenDay, LoggerError> {
        let path = log_file_path(&self.directory, date);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LoggerError::Io {
                path: path.clone(),
                source,
            })?;
        Ok(OpenDay { date, path, file })
    }
}

/// Writer thread body. Runs until the queue is closed and drained.
///
/// Any I/O failure is fatal for the whole process.
pub(crate) fn run(
    queue: ThreadSafeQueue<LogRecord>,
    mut writer: DayFileWriter,
    clock: Arc<dyn Clock>,
) {
    while let Some(record) = queue.dequeue_blocking() {
        if let Err(err) = writer.write_record(&record, clock.now()) {
            fatal(&err);
        }
        queue.task_done();
    }
}

/// Emits a diagnostic and terminates the process.
pub(crate) fn fatal(err: &LoggerError) -> ! {
    eprintln!("daylog: {err}");
    std::process::exit(1);
}
