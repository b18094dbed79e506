use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use rustls::server::ResolvesServerCert;
use std::sync::Arc;

impl std::fmt::Debug for DynamicCertificateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicCertificateResolver")
            .field("store", &self.store)
            .finish()
    }
}

impl DynamicCertificateResolver {
    pub fn new(store: Arc<CertificateStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<CertificateStore> {
        &self.store
    }
}

impl ResolvesServerCert for DynamicCertificateResolver {
    fn resolve(&self, _client_hello: rustls::server::ClientHello<'_>) -> Option<Arc<rustls::sign::CertifiedKey>> {
        Some(self.store.get().certified_key.clone())
    }
}
