//! Error types for the logger system

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A file sink could not open its target for appending
    #[error("Unable to open log file '{}': {}", .path.display(), .source)]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error while writing or flushing a sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoggerError {
    /// Create a file open error for `path`
    pub fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoggerError::FileOpen {
            path: path.into(),
            source,
        }
    }
}
