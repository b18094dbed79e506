use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::certificate_store::CertificateStore;
use parking_lot::RwLock;
use std::sync::Arc;

impl std::fmt::Debug for CertificateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let current = self.current.read();
        f.debug_struct("CertificateStore")
            .field("fingerprint", &current.fingerprint)
            .field("not_after", &current.not_after)
            .field("loaded_at", &current.loaded_at)
            .finish()
    }
}

impl CertificateStore {
    pub fn new(bundle: CertificateBundle) -> Self {
        Self::from_arc(Arc::new(bundle))
    }

    pub fn from_arc(bundle: Arc<CertificateBundle>) -> Self {
        Self {
            current: RwLock::new(bundle),
        }
    }

    /// Active bundle. Called on every handshake: a read lock held for one `Arc` clone.
    pub fn get(&self) -> Arc<CertificateBundle> {
        self.current.read().clone()
    }

    /// Replaces the active bundle and returns the one it superseded.
    pub fn swap(&self, bundle: Arc<CertificateBundle>) -> Arc<CertificateBundle> {
        std::mem::replace(&mut *self.current.write(), bundle)
    }
}
