use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WatcherError {
    #[error("Failed to create file watcher: {0}")]
    Init(String),
    #[error("Failed to watch {path}: {reason}")]
    Watch { path: String, reason: String },
    #[error("File watcher error: {0}")]
    Stream(String),
}
