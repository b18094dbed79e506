//! HTTPS response structures.

/// JSON view of the active certificate.
pub mod certificate_status;
