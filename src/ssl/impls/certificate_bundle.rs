use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use rustls::pki_types::{
    CertificateDer,
    PrivateKeyDer
};
use rustls::sign::CertifiedKey;
use sha1::{Digest, Sha1};
use std::sync::Arc;

impl std::fmt::Debug for CertificateBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateBundle")
            .field("certs_count", &self.certs.len())
            .field("fingerprint", &self.fingerprint)
            .field("not_before", &self.not_before)
            .field("not_after", &self.not_after)
            .field("cert_path", &self.cert_path)
            .field("key_path", &self.key_path)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

impl CertificateBundle {
    /// Reads and parses both files together. The key must belong to the leaf
    /// certificate, so a half-replaced pair is rejected instead of served.
    pub fn load_from_files(
        cert_path: &str,
        key_path: &str,
    ) -> Result<CertificateBundle, CertificateError> {
        let cert_data = std::fs::read(cert_path)
            .map_err(|e| CertificateError::CertFileNotFound(format!("{}: {}", cert_path, e)))?;
        let key_data = std::fs::read(key_path)
            .map_err(|e| CertificateError::KeyFileNotFound(format!("{}: {}", key_path, e)))?;
        let mut bundle = Self::from_pem(&cert_data, &key_data)?;
        bundle.cert_path = cert_path.to_string();
        bundle.key_path = key_path.to_string();
        Ok(bundle)
    }

    pub fn from_pem(
        cert_data: &[u8],
        key_data: &[u8],
    ) -> Result<CertificateBundle, CertificateError> {
        let tls_certs: Vec<CertificateDer<'static>> = rustls_pemfile::certs(&mut &cert_data[..])
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CertificateError::CertParseError(e.to_string()))?;
        if tls_certs.is_empty() {
            return Err(CertificateError::CertParseError(
                "No certificates found in file".to_string(),
            ));
        }
        let tls_key = Self::parse_private_key(key_data)?;
        let certified_key = Self::build_certified_key(&tls_certs, &tls_key)?;
        let (not_before, not_after) = Self::parse_validity(&tls_certs[0])?;
        let fingerprint = Self::fingerprint_of(&tls_certs[0]);
        Ok(CertificateBundle {
            certs: tls_certs,
            certified_key: Arc::new(certified_key),
            loaded_at: chrono::Utc::now(),
            not_before,
            not_after,
            fingerprint,
            cert_path: String::new(),
            key_path: String::new(),
        })
    }

    /// Length of the leaf certificate validity window.
    pub fn validity(&self) -> chrono::TimeDelta {
        self.not_after - self.not_before
    }

    pub fn is_valid_at(&self, at: chrono::DateTime<chrono::Utc>) -> bool {
        self.not_before <= at && at <= self.not_after
    }

    pub fn leaf(&self) -> &CertificateDer<'static> {
        &self.certs[0]
    }

    fn parse_private_key(key_data: &[u8]) -> Result<PrivateKeyDer<'static>, CertificateError> {
        // PKCS#8, PKCS#1 (RSA) and SEC1 (EC) are all accepted
        rustls_pemfile::private_key(&mut &key_data[..])
            .map_err(|e| CertificateError::KeyParseError(e.to_string()))?
            .ok_or(CertificateError::NoKeyFound)
    }

    fn build_certified_key(
        certs: &[CertificateDer<'static>],
        key: &PrivateKeyDer<'static>,
    ) -> Result<CertifiedKey, CertificateError> {
        let signing_key = rustls::crypto::ring::sign::any_supported_type(key)
            .map_err(|e| CertificateError::CertifiedKeyError(format!("{}", e)))?;
        let certified_key = CertifiedKey::new(certs.to_vec(), signing_key);
        certified_key
            .keys_match()
            .map_err(|e| CertificateError::KeyMismatch(format!("{}", e)))?;
        Ok(certified_key)
    }

    fn parse_validity(
        leaf: &CertificateDer<'static>,
    ) -> Result<(chrono::DateTime<chrono::Utc>, chrono::DateTime<chrono::Utc>), CertificateError> {
        let (_, cert) = x509_parser::parse_x509_certificate(leaf.as_ref())
            .map_err(|e| CertificateError::CertParseError(e.to_string()))?;
        let validity = cert.validity();
        let not_before = chrono::DateTime::from_timestamp(validity.not_before.timestamp(), 0)
            .ok_or_else(|| CertificateError::CertParseError("notBefore out of range".to_string()))?;
        let not_after = chrono::DateTime::from_timestamp(validity.not_after.timestamp(), 0)
            .ok_or_else(|| CertificateError::CertParseError("notAfter out of range".to_string()))?;
        Ok((not_before, not_after))
    }

    fn fingerprint_of(leaf: &CertificateDer<'static>) -> String {
        let mut hasher = Sha1::new();
        hasher.update(leaf.as_ref());
        hex::encode(hasher.finalize().as_slice())
    }
}
