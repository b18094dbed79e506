use crate::config::structs::reloader_config::ReloaderConfig;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::reloader_error::ReloaderError;
use crate::ssl::ssl::create_server_config_with_resolver;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::certificate_paths::CertificatePaths;
use crate::ssl::structs::certificate_reloader::CertificateReloader;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use crate::ssl::structs::notify_file_watcher::NotifyFileWatcher;
use crate::ssl::structs::reload_coordinator::ReloadCoordinator;
use crate::ssl::structs::reload_signal::ReloadSignal;
use crate::ssl::traits::file_watcher::FileWatcher;
use log::{error, info};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::mpsc::Sender;
use tokio::sync::watch;

impl std::fmt::Debug for CertificateReloader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateReloader")
            .field("paths", &self.paths)
            .field("store", &self.store)
            .field("stopped", &*self.shutdown.borrow())
            .finish()
    }
}

impl CertificateReloader {
    /// Loads the pair, watches both files with the platform watcher and spawns
    /// the reload loop on the current Tokio runtime.
    pub fn start(
        paths: CertificatePaths,
        config: ReloaderConfig,
        notifier: Option<Sender<ReloadSignal>>,
    ) -> Result<Self, ReloaderError> {
        tokio::runtime::Handle::try_current().map_err(|_| ReloaderError::NoRuntime)?;
        let watcher = NotifyFileWatcher::new()?;
        Self::start_with_watcher(paths, config, notifier, watcher)
    }

    /// Same as `start` with a caller supplied watcher. On error the watcher is
    /// dropped and no task is spawned.
    pub fn start_with_watcher<W: FileWatcher>(
        paths: CertificatePaths,
        config: ReloaderConfig,
        notifier: Option<Sender<ReloadSignal>>,
        mut watcher: W,
    ) -> Result<Self, ReloaderError> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| ReloaderError::NoRuntime)?;
        watcher.watch(paths.cert())?;
        watcher.watch(paths.key())?;
        let bundle = CertificateBundle::load_from_files(&paths.cert_path, &paths.key_path)?;
        info!(
            "[CERTIFICATE] Loaded TLS certificate {} from {} (valid until {})",
            bundle.fingerprint,
            paths,
            bundle.not_after.to_rfc3339()
        );
        let store = Arc::new(CertificateStore::new(bundle));
        let (shutdown, shutdown_rx) = watch::channel(false);
        let coordinator = ReloadCoordinator::new(paths.clone(), Arc::clone(&store), watcher, config, notifier);
        let task = runtime.spawn(coordinator.run(shutdown_rx));
        Ok(Self {
            paths,
            store,
            shutdown,
            task: Mutex::new(Some(task)),
        })
    }

    pub fn paths(&self) -> &CertificatePaths {
        &self.paths
    }

    pub fn store(&self) -> Arc<CertificateStore> {
        Arc::clone(&self.store)
    }

    pub fn get_certificate(&self) -> Arc<CertificateBundle> {
        self.store.get()
    }

    /// Per-handshake certificate callback for rustls.
    pub fn resolver(&self) -> Arc<DynamicCertificateResolver> {
        Arc::new(DynamicCertificateResolver::new(self.store()))
    }

    pub fn server_config(&self) -> Result<rustls::ServerConfig, CertificateError> {
        create_server_config_with_resolver(self.resolver())
    }

    /// Asks the reload loop to exit. Safe to call any number of times; dropping
    /// the reloader has the same effect.
    pub fn stop(&self) {
        if !self.shutdown.send_replace(true) {
            info!("[CERTIFICATE] Stop requested for certificate watcher {}", self.paths);
        }
    }

    /// Waits until the reload loop has exited.
    pub async fn stopped(&self) {
        let task = self.task.lock().take();
        if let Some(task) = task
            && let Err(e) = task.await
        {
            error!("[CERTIFICATE] Certificate watcher task for {} failed: {}", self.paths, e);
        }
    }

    /// True until the reload loop has exited. The loop owns the only shutdown
    /// receiver, so this holds while another caller is awaiting `stopped`.
    pub fn is_running(&self) -> bool {
        self.shutdown.receiver_count() > 0
    }
}
