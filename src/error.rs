//! # Configuration Error Types
//!
//! Unified error handling for job configuration, counter retrieval, and
//! generic option parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration operation result type
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors surfaced by the configuration layer.
///
/// All failures are reported immediately to the caller; nothing in this
/// crate retries or recovers.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML properties file {path}: {source}")]
    TomlParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse JSON properties file {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported properties file extension: {path}")]
    UnsupportedConfFile { path: PathBuf },

    #[error("invalid property definition '{0}' (expected key=value)")]
    InvalidDefine(String),

    #[error("invalid generic options: {0}")]
    InvalidArguments(String),

    #[error("counters not available for job '{job}'")]
    CountersUnavailable { job: String },

    #[error("counter not found: {group}/{counter}")]
    CounterNotFound { group: String, counter: String },
}

impl ConfigError {
    /// Create a counters-unavailable error for a job
    pub fn counters_unavailable(job: impl Into<String>) -> Self {
        Self::CountersUnavailable { job: job.into() }
    }

    /// Create a counter-not-found error
    pub fn counter_not_found(group: impl Into<String>, counter: impl Into<String>) -> Self {
        Self::CounterNotFound {
            group: group.into(),
            counter: counter.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_counters_unavailable() {
        let err = ConfigError::counters_unavailable("nightly-import");
        assert_eq!(
            err.to_string(),
            "counters not available for job 'nightly-import'"
        );
    }

    #[test]
    fn test_error_display_counter_not_found() {
        let err = ConfigError::counter_not_found("gridpump.task.counters", "MAP_INPUT_RECORDS");
        assert_eq!(
            err.to_string(),
            "counter not found: gridpump.task.counters/MAP_INPUT_RECORDS"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = ConfigError::from(io);
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
