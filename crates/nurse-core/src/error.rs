use std::path::PathBuf;

/// Failures outside the form itself. Editing the record never fails.
#[derive(Debug, thiserror::Error)]
pub enum NurseError {
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("tracing subscriber already installed")]
    TracingInit,
}

pub type Result<T> = std::result::Result<T, NurseError>;
