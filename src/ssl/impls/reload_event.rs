use crate::ssl::structs::certificate_paths::CertificatePaths;
use crate::ssl::structs::reload_event::ReloadEvent;
use crate::ssl::structs::watch_event::WatchEvent;

impl ReloadEvent {
    /// `None` for events that must not trigger a reload. The triggering path is
    /// the first watched path named by the event, falling back to the first
    /// path reported and then to the certificate path.
    pub fn from_watch_event(event: &WatchEvent, paths: &CertificatePaths) -> Option<ReloadEvent> {
        if !event.kind.is_relevant() {
            return None;
        }
        let path = event
            .paths
            .iter()
            .find(|path| paths.contains(path))
            .or_else(|| event.paths.first())
            .cloned()
            .unwrap_or_else(|| paths.cert().to_path_buf());
        Some(ReloadEvent {
            kind: event.kind,
            path,
        })
    }
}

impl std::fmt::Display for ReloadEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.path.display(), self.kind)
    }
}
