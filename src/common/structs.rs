//! Common data structures.

/// Message-only error used by the binary.
pub mod custom_error;
