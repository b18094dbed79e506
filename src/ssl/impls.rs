//! Implementation blocks for the SSL structures.

pub mod certificate_bundle;
pub mod certificate_paths;
pub mod certificate_store;
pub mod dynamic_certificate_resolver;
pub mod watch_event_kind;
pub mod watch_event;
pub mod reload_event;
pub mod notify_file_watcher;
pub mod reload_coordinator;
pub mod certificate_reloader;
