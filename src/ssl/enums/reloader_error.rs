use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::watcher_error::WatcherError;
use thiserror::Error;

/// Errors that prevent a reloader from starting. No background task exists
/// when one of these is returned.
#[derive(Debug, Error)]
pub enum ReloaderError {
    #[error("Failed loading TLS certificate: {0}")]
    CertificateLoad(#[from] CertificateError),
    #[error("Failed to setup file watcher for hot reloading TLS certificates: {0}")]
    WatcherInit(#[from] WatcherError),
    #[error("Certificate reloader must be started from within a Tokio runtime")]
    NoRuntime,
}
