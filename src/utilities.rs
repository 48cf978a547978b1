//! Date helpers for day-scoped log files and the thread-safe queue.
//!
//! All numeric fields are rendered as plain decimals without zero padding,
//! so the first of May 2024 becomes `2024-5-1-log.txt` and ten past one in
//! the morning becomes `1:10:0`.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use std::path::{Path, PathBuf};

pub mod thread_safe_queue;

/// Returns the file name holding every record written on `date`.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use daylog::utilities::log_file_name;
///
/// let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// assert_eq!(log_file_name(date), "2024-5-1-log.txt");
/// ```
pub fn log_file_name(date: NaiveDate) -> String {
    format!("{}-{}-{}-log.txt", date.year(), date.month(), date.day())
}

/// Joins `directory` with the file name for `date`.
pub fn log_file_path(directory: &Path, date: NaiveDate) -> PathBuf {
    directory.join(log_file_name(date))
}

/// Renders the `H:M:S` prefix of a record.
pub fn clock_time(now: NaiveDateTime) -> String {
    format!("{}:{}:{}", now.hour(), now.minute(), now.second())
}
