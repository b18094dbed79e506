use crate::config::structs::reloader_config::ReloaderConfig;
use crate::ssl::structs::certificate_paths::CertificatePaths;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::reload_signal::ReloadSignal;
use crate::ssl::traits::file_watcher::FileWatcher;
use std::sync::Arc;
use tokio::sync::mpsc::Sender;

pub struct ReloadCoordinator<W: FileWatcher> {
    pub(crate) paths: CertificatePaths,
    pub(crate) store: Arc<CertificateStore>,
    pub(crate) watcher: W,
    pub(crate) config: ReloaderConfig,
    pub(crate) notifier: Option<Sender<ReloadSignal>>,
}
