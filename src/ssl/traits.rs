//! SSL trait definitions.

/// Filesystem watch capability consumed by the reload loop.
pub mod file_watcher;
