//! SSL data structures.

/// Parsed certificate chain and private key with metadata.
pub mod certificate_bundle;

/// The certificate and key file locations being served and watched.
pub mod certificate_paths;

/// Single slot holding the active certificate bundle.
pub mod certificate_store;

/// rustls resolver reading from the store on every handshake.
pub mod dynamic_certificate_resolver;

/// Classified filesystem event as produced by a `FileWatcher`.
pub mod watch_event;

/// Qualifying change on one of the watched paths.
pub mod reload_event;

/// Notification sent to observers after a successful reload.
pub mod reload_signal;

/// `notify` backed file watcher.
pub mod notify_file_watcher;

/// Background loop reacting on watcher events.
pub mod reload_coordinator;

/// Owner of the reload loop and its cancellation handle.
pub mod certificate_reloader;
