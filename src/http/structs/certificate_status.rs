use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CertificateStatus {
    pub fingerprint: String,
    pub not_before: String,
    pub not_after: String,
    pub loaded_at: String,
    pub validity_days: i64,
    pub cert_path: String,
    pub key_path: String,
}
