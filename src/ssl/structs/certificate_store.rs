use crate::ssl::structs::certificate_bundle::CertificateBundle;
use parking_lot::RwLock;
use std::sync::Arc;

pub struct CertificateStore {
    pub(crate) current: RwLock<Arc<CertificateBundle>>,
}
