#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct CertificatePaths {
    pub cert_path: String,
    pub key_path: String,
}
