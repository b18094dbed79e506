//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the service configuration
//! from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains:
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **reloader**: Certificate reload tuning (re-subscribe retries, notification policy)
//! - **https_server**: HTTPS listener instances, each with its own certificate pair
//!
//! # Example
//!
//! ```rust,ignore
//! use tls_hotreload::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one on request
//! let config = Configuration::load_from_file("config.toml", false)?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! Configuration::save_file("config.toml", toml::to_string(&default_config)?)?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
