use crate::ssl::structs::certificate_paths::CertificatePaths;
use crate::ssl::structs::certificate_store::CertificateStore;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub struct CertificateReloader {
    pub(crate) paths: CertificatePaths,
    pub(crate) store: Arc<CertificateStore>,
    pub(crate) shutdown: watch::Sender<bool>,
    pub(crate) task: Mutex<Option<JoinHandle<()>>>,
}
