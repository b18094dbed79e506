use async_trait::async_trait;
use crate::ssl::enums::watcher_error::WatcherError;
use crate::ssl::structs::notify_file_watcher::NotifyFileWatcher;
use crate::ssl::structs::watch_event::WatchEvent;
use crate::ssl::traits::file_watcher::FileWatcher;
use notify::{RecursiveMode, Watcher};
use std::path::Path;
use tokio::sync::mpsc;

impl std::fmt::Debug for NotifyFileWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotifyFileWatcher")
            .field("pending_events", &self.events.len())
            .finish_non_exhaustive()
    }
}

impl NotifyFileWatcher {
    pub fn new() -> Result<Self, WatcherError> {
        let (tx, events) = mpsc::unbounded_channel();
        let watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
            // receiver gone means the reload loop has stopped
            let _ = tx.send(res);
        })
        .map_err(|e| WatcherError::Init(e.to_string()))?;
        Ok(Self { watcher, events })
    }
}

#[async_trait]
impl FileWatcher for NotifyFileWatcher {
    fn watch(&mut self, path: &Path) -> Result<(), WatcherError> {
        self.watcher
            .watch(path, RecursiveMode::NonRecursive)
            .map_err(|e| WatcherError::Watch {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
    }

    fn unwatch(&mut self, path: &Path) -> Result<(), WatcherError> {
        self.watcher.unwatch(path).map_err(|e| WatcherError::Watch {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    async fn next_event(&mut self) -> Option<Result<WatchEvent, WatcherError>> {
        let result = self.events.recv().await?;
        Some(
            result
                .map(WatchEvent::from)
                .map_err(|e| WatcherError::Stream(e.to_string())),
        )
    }
}
