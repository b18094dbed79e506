//! Implementation blocks for HTTPS response structures.

pub mod certificate_status;
