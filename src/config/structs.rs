//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Certificate reload tuning.
pub mod reloader_config;

/// HTTPS listener configuration (address, certificate pair, timeouts).
pub mod https_server_config;
