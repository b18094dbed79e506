use rustls::pki_types::CertificateDer;
use rustls::sign::CertifiedKey;
use std::sync::Arc;

/// A loaded certificate bundle containing the certificate chain and private key.
///
/// The bundle is immutable. A reload builds a new bundle and replaces the old one
/// in the `CertificateStore`; handshakes still holding the old `Arc` finish with it.
pub struct CertificateBundle {
    pub certs: Vec<CertificateDer<'static>>,
    pub certified_key: Arc<CertifiedKey>,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
    pub not_before: chrono::DateTime<chrono::Utc>,
    pub not_after: chrono::DateTime<chrono::Utc>,
    pub fingerprint: String,
    pub cert_path: String,
    pub key_path: String,
}
