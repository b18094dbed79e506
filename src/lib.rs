//! # TLS Hot Reload
//!
//! Zero-downtime certificate rotation for long-running rustls listeners.
//!
//! ## Overview
//!
//! A certificate/private-key pair is loaded from disk once, served to every TLS handshake
//! through a rustls certificate resolver, and replaced in place whenever either file changes.
//! Handshakes always see a complete, consistent pair: the previous one until the new pair has
//! been fully parsed and validated, the new one right after.
//!
//! ## Features
//!
//! - **Event driven**: filesystem notifications (`notify`), no polling
//! - **Symlink swaps**: watches are re-added after the watched file was replaced
//! - **Last known-good**: a broken or half-written pair never replaces a working one
//! - **Notifications**: optional per-reload signal with explicit back-pressure policy
//! - **Lifecycle**: per-instance stop, no process-wide signal handlers in the library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tls_hotreload::config::structs::reloader_config::ReloaderConfig;
//! use tls_hotreload::ssl::structs::certificate_paths::CertificatePaths;
//! use tls_hotreload::ssl::structs::certificate_reloader::CertificateReloader;
//!
//! let reloader = CertificateReloader::start(
//!     CertificatePaths::new("/etc/tls/tls.crt", "/etc/tls/tls.key"),
//!     ReloaderConfig::default(),
//!     None,
//! )?;
//! let server_config = reloader.server_config()?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup and shared error type
//! - [`config`] - Configuration management and TOML parsing
//! - [`http`] - HTTPS listener serving the hot-reloaded certificate
//! - [`ssl`] - Certificate store, file watcher, reload loop and lifecycle control
//! - [`structs`] - CLI argument parsing

/// Common utilities and shared functionality.
///
/// Contains the log level parser, logging setup and the message error type used
/// by the binary.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
pub mod config;

/// HTTPS listener module.
///
/// Binds `actix-web` listeners with a per-handshake certificate resolver and exposes
/// the active certificate metadata.
pub mod http;

/// SSL/TLS certificate management module.
///
/// Provides the certificate store, the file watcher abstraction, the reload
/// coordinator and the reloader lifecycle.
pub mod ssl;

/// CLI argument parsing.
pub mod structs;
