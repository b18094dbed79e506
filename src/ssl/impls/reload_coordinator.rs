use crate::config::structs::reloader_config::ReloaderConfig;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::notification_policy::NotificationPolicy;
use crate::ssl::enums::watch_event_kind::WatchEventKind;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::certificate_paths::CertificatePaths;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::reload_coordinator::ReloadCoordinator;
use crate::ssl::structs::reload_event::ReloadEvent;
use crate::ssl::structs::reload_signal::ReloadSignal;
use crate::ssl::structs::watch_event::WatchEvent;
use crate::ssl::traits::file_watcher::FileWatcher;
use log::{debug, error, info, warn};
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::mpsc::Sender;
use tokio::sync::watch;

impl<W: FileWatcher> ReloadCoordinator<W> {
    pub fn new(
        paths: CertificatePaths,
        store: Arc<CertificateStore>,
        watcher: W,
        config: ReloaderConfig,
        notifier: Option<Sender<ReloadSignal>>,
    ) -> Self {
        Self {
            paths,
            store,
            watcher,
            config,
            notifier,
        }
    }

    /// Event loop. Returns when `shutdown` flips (or its sender is dropped) or when
    /// the watcher stream closes; the watcher is dropped with `self` either way.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        if *shutdown.borrow_and_update() {
            return;
        }
        info!("[CERTIFICATE] Watching {} for changes", self.paths);
        loop {
            let next = tokio::select! {
                biased;
                _ = shutdown.changed() => {
                    info!("[CERTIFICATE] Stopping certificate watcher for {}", self.paths);
                    break;
                }
                next = self.watcher.next_event() => next,
            };
            match next {
                None => {
                    warn!(
                        "[CERTIFICATE] Watcher stream for {} closed, keeping certificate {} until restart",
                        self.paths,
                        self.store.get().fingerprint
                    );
                    break;
                }
                Some(Err(e)) => {
                    error!("[CERTIFICATE] TLS certificate watcher error: {}", e);
                }
                Some(Ok(event)) => {
                    if self.handle_event(event, &mut shutdown).await.is_break() {
                        info!("[CERTIFICATE] Stopping certificate watcher for {}", self.paths);
                        break;
                    }
                }
            }
        }
    }

    pub(crate) async fn handle_event(
        &mut self,
        event: WatchEvent,
        shutdown: &mut watch::Receiver<bool>,
    ) -> ControlFlow<()> {
        let Some(reload_event) = ReloadEvent::from_watch_event(&event, &self.paths) else {
            debug!("[CERTIFICATE] Ignoring {:?} on {:?}", event.kind, event.paths);
            return ControlFlow::Continue(());
        };
        if reload_event.kind == WatchEventKind::Removed {
            // Kubernetes swaps a symlink to fake atomic writes, which drops the watch
            for path in self.removed_targets(&event) {
                if self.resubscribe(&path, shutdown).await.is_break() {
                    return ControlFlow::Break(());
                }
            }
        }
        info!("[CERTIFICATE] Hot reloading the TLS certificate ({})", reload_event);
        let bundle = match self.reload() {
            Ok(bundle) => bundle,
            Err(e) => {
                error!("[CERTIFICATE] Failed to load certificates: {}", e);
                return ControlFlow::Continue(());
            }
        };
        self.store.swap(bundle.clone());
        info!(
            "[CERTIFICATE] Successfully hot reloaded the TLS certificate {} (valid {} until {})",
            bundle.fingerprint,
            bundle.not_before.to_rfc3339(),
            bundle.not_after.to_rfc3339()
        );
        self.deliver(ReloadSignal { bundle, event: reload_event }, shutdown).await
    }

    pub(crate) fn reload(&self) -> Result<Arc<CertificateBundle>, CertificateError> {
        CertificateBundle::load_from_files(&self.paths.cert_path, &self.paths.key_path).map(Arc::new)
    }

    fn removed_targets(&self, event: &WatchEvent) -> Vec<PathBuf> {
        let named: Vec<PathBuf> = event
            .paths
            .iter()
            .filter(|path| self.paths.contains(path))
            .cloned()
            .collect();
        if named.is_empty() {
            vec![self.paths.cert().to_path_buf(), self.paths.key().to_path_buf()]
        } else {
            named
        }
    }

    async fn resubscribe(
        &mut self,
        path: &Path,
        shutdown: &mut watch::Receiver<bool>,
    ) -> ControlFlow<()> {
        let attempts = self.config.resubscribe_attempts.max(1);
        for attempt in 1..=attempts {
            match self.watcher.resubscribe(path) {
                Ok(()) => {
                    debug!("[WATCHER] Re-added {} (attempt {})", path.display(), attempt);
                    return ControlFlow::Continue(());
                }
                Err(e) if attempt == attempts => {
                    error!(
                        "[WATCHER] Failed to re-add file watcher for {}, changes will go unnoticed until restart: {}",
                        path.display(),
                        e
                    );
                }
                Err(e) => {
                    debug!("[WATCHER] Re-adding {} failed (attempt {}): {}", path.display(), attempt, e);
                    tokio::select! {
                        biased;
                        _ = shutdown.changed() => return ControlFlow::Break(()),
                        _ = tokio::time::sleep(self.config.resubscribe_delay()) => {}
                    }
                }
            }
        }
        ControlFlow::Continue(())
    }

    async fn deliver(
        &mut self,
        signal: ReloadSignal,
        shutdown: &mut watch::Receiver<bool>,
    ) -> ControlFlow<()> {
        let Some(sender) = self.notifier.clone() else {
            return ControlFlow::Continue(());
        };
        let closed = match self.config.notification_policy {
            NotificationPolicy::drop_when_full => match sender.try_send(signal) {
                Ok(()) => false,
                Err(TrySendError::Full(_)) => {
                    warn!("[CERTIFICATE] Reload notification dropped, observer channel is full");
                    false
                }
                Err(TrySendError::Closed(_)) => true,
            },
            NotificationPolicy::wait => {
                tokio::select! {
                    biased;
                    _ = shutdown.changed() => return ControlFlow::Break(()),
                    result = sender.send(signal) => result.is_err(),
                }
            }
        };
        if closed {
            debug!("[CERTIFICATE] Reload observer went away, notifications disabled");
            self.notifier = None;
        }
        ControlFlow::Continue(())
    }
}
