use async_trait::async_trait;
use crate::ssl::enums::watcher_error::WatcherError;
use crate::ssl::structs::watch_event::WatchEvent;
use std::path::Path;

/// Source of filesystem change events for a fixed set of paths.
///
/// Platform watchers usually drop a watch once the watched inode is removed,
/// which is how a symlink swap shows up. `resubscribe` puts the path back on
/// the watch list so the new file behind it is observed again.
#[async_trait]
pub trait FileWatcher: Send + 'static {
    fn watch(&mut self, path: &Path) -> Result<(), WatcherError>;

    fn unwatch(&mut self, path: &Path) -> Result<(), WatcherError>;

    fn resubscribe(&mut self, path: &Path) -> Result<(), WatcherError> {
        // the watch is usually gone already
        let _ = self.unwatch(path);
        self.watch(path)
    }

    /// Next event, or `None` once the stream has closed for good.
    async fn next_event(&mut self) -> Option<Result<WatchEvent, WatcherError>>;
}
