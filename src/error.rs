//! Error type shared by the queue, the writer and the configuration loader.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    /// The day file could not be opened or appended to.
    #[error("log file {path} open error: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("global logger is already initialized")]
    AlreadyInitialized,

    #[error("queue is closed")]
    QueueClosed,

    #[error("unknown log level `{0}` (expected `info` or `error`)")]
    UnknownLevel(String),

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to spawn writer thread: {0}")]
    Spawn(#[source] std::io::Error),
}
