use crate::ssl::structs::certificate_paths::CertificatePaths;
use std::path::Path;

impl CertificatePaths {
    pub fn new(cert_path: &str, key_path: &str) -> CertificatePaths {
        CertificatePaths {
            cert_path: cert_path.to_string(),
            key_path: key_path.to_string(),
        }
    }

    pub fn cert(&self) -> &Path {
        Path::new(&self.cert_path)
    }

    pub fn key(&self) -> &Path {
        Path::new(&self.key_path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        path == self.cert() || path == self.key()
    }
}

impl std::fmt::Display for CertificatePaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.cert_path, self.key_path)
    }
}
