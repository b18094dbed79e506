use crate::http::structs::certificate_status::CertificateStatus;
use crate::ssl::structs::certificate_bundle::CertificateBundle;

impl From<&CertificateBundle> for CertificateStatus {
    fn from(bundle: &CertificateBundle) -> Self {
        CertificateStatus {
            fingerprint: bundle.fingerprint.clone(),
            not_before: bundle.not_before.to_rfc3339(),
            not_after: bundle.not_after.to_rfc3339(),
            loaded_at: bundle.loaded_at.to_rfc3339(),
            validity_days: bundle.validity().num_days(),
            cert_path: bundle.cert_path.clone(),
            key_path: bundle.key_path.clone(),
        }
    }
}
