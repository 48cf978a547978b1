//! Logger configuration loaded from a small JSON file.
//!
//! ```json
//! { "directory": "/var/log/myapp", "level": "error" }
//! ```
//!
//! Both fields are optional; missing ones fall back to the current working
//! directory and the `info` level.

use crate::error::LoggerError;
use crate::logger::LogLevel;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Directory the day files are created in.
    pub directory: PathBuf,
    /// Level the logger starts with.
    pub level: LogLevel,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            level: LogLevel::Info,
        }
    }
}

impl LoggerConfig {
    pub fn with_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }
}

pub fn load_config(path: &Path) -> Result<LoggerConfig, LoggerError> {
    let content = fs::read_to_string(path).map_err(|source| LoggerError::ConfigIo {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_working_directory_and_info() {
        let config = LoggerConfig::default();
        assert_eq!(config.directory, PathBuf::from("."));
        assert_eq!(config.level, LogLevel::Info);
    }

    #[test]
    fn test_load_config_full_success() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"directory": "/tmp/logs", "level": "error"}"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.directory, PathBuf::from("/tmp/logs"));
        assert_eq!(config.level, LogLevel::Error);
    }

    // edge case: every field is optional
    #[test]
    fn test_load_config_empty_object_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        assert_eq!(load_config(&path).unwrap(), LoggerConfig::default());
    }

    #[test]
    fn test_load_config_rejects_unknown_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"level": "warn"}"#).unwrap();

        assert!(matches!(load_config(&path), Err(LoggerError::Config(_))));
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(LoggerError::ConfigIo { .. })));
    }
}
