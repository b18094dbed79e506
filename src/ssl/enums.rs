//! SSL enumerations.

/// Certificate loading errors.
pub mod certificate_error;

/// Fatal errors while starting a reloader.
pub mod reloader_error;

/// File watcher errors.
pub mod watcher_error;

/// Classification of raw filesystem events.
pub mod watch_event_kind;

/// Delivery policy for reload notifications.
pub mod notification_policy;
