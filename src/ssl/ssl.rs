use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use chrono::Datelike;
use rcgen::{CertificateParams, KeyPair};
use std::sync::Arc;

/// TLS 1.2 and 1.3 only, no client authentication, certificate picked per handshake.
pub fn create_server_config_with_resolver(
    resolver: Arc<DynamicCertificateResolver>,
) -> Result<rustls::ServerConfig, CertificateError> {
    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let config = rustls::ServerConfig::builder_with_provider(provider)
        .with_protocol_versions(&[&rustls::version::TLS13, &rustls::version::TLS12])
        .map_err(|e| CertificateError::ServerConfigError(e.to_string()))?
        .with_no_client_auth()
        .with_cert_resolver(resolver);
    Ok(config)
}

/// Self-signed certificate valid from today 00:00 UTC for exactly `days` days.
/// Returns `(certificate_pem, pkcs8_key_pem)`.
pub fn generate_self_signed(
    subject_alt_names: Vec<String>,
    days: u64,
) -> Result<(String, String), CertificateError> {
    let mut params = CertificateParams::new(subject_alt_names)
        .map_err(|e| CertificateError::GenerateError(e.to_string()))?;
    let today = chrono::Utc::now().date_naive();
    params.not_before = rcgen::date_time_ymd(today.year(), today.month() as u8, today.day() as u8);
    let expires = today
        .checked_add_days(chrono::Days::new(days))
        .filter(|date| date.year() <= 9999)
        .ok_or_else(|| CertificateError::GenerateError(format!("validity of {days} days is out of range")))?;
    params.not_after = rcgen::date_time_ymd(expires.year(), expires.month() as u8, expires.day() as u8);
    let key_pair = KeyPair::generate().map_err(|e| CertificateError::GenerateError(e.to_string()))?;
    let cert = params
        .self_signed(&key_pair)
        .map_err(|e| CertificateError::GenerateError(e.to_string()))?;
    Ok((cert.pem(), key_pair.serialize_pem()))
}
