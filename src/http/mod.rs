//! HTTPS listener serving the hot-reloaded certificate.
//!
//! Every enabled `[[https_server]]` entry gets its own `actix-web` listener whose
//! rustls configuration resolves the certificate per handshake, so a reload is
//! picked up by the next connection without rebinding.
//!
//! # Supported Endpoints
//!
//! - `GET /certificate` - Metadata of the certificate currently being served (JSON)

/// Response structures.
pub mod structs;

/// Implementation blocks for response structures.
pub mod impls;

/// Listener setup and request handlers.
#[allow(clippy::module_inception)]
pub mod http;
