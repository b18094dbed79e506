use notify::RecommendedWatcher;
use tokio::sync::mpsc::UnboundedReceiver;

pub struct NotifyFileWatcher {
    pub(crate) watcher: RecommendedWatcher,
    pub(crate) events: UnboundedReceiver<notify::Result<notify::Event>>,
}
