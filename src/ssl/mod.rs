//! SSL/TLS certificate management module.
//!
//! This module keeps a certificate/private-key pair loaded from disk, serves it to
//! every TLS handshake and swaps in a new pair whenever the files change, without
//! restarting the listener.
//!
//! # Features
//!
//! - Hot-reload certificates without server restart
//! - Filesystem events instead of polling (`notify`)
//! - Survives symlink-swap replacement as done by container orchestrators
//! - Last known-good certificate keeps being served when a reload fails
//! - Optional reload notifications with an explicit delivery policy
//! - Per-instance cancellation, no process-wide signal handlers
//!
//! # Components
//!
//! - `CertificateStore` - the single slot holding the active `CertificateBundle`
//! - `FileWatcher` - capability trait over the platform watcher
//! - `ReloadCoordinator` - the background loop reacting on watcher events
//! - `CertificateReloader` - owns the loop and hands out the rustls resolver
//!
//! # Example
//!
//! ```rust,ignore
//! use tls_hotreload::config::structs::reloader_config::ReloaderConfig;
//! use tls_hotreload::ssl::structs::certificate_paths::CertificatePaths;
//! use tls_hotreload::ssl::structs::certificate_reloader::CertificateReloader;
//!
//! let paths = CertificatePaths::new("cert.pem", "key.pem");
//! let reloader = CertificateReloader::start(paths, ReloaderConfig::default(), None)?;
//! let server_config = reloader.server_config()?;
//! // bind a listener with `server_config`...
//! reloader.stop();
//! ```

/// Error and classification enumerations.
pub mod enums;

/// Data structures for certificates, events and the reload lifecycle.
pub mod structs;

/// Implementation blocks for the SSL structures.
pub mod impls;

/// File watcher capability trait.
pub mod traits;

/// Free functions (server config, self-signed generation).
#[allow(clippy::module_inception)]
pub mod ssl;
