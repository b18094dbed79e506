use crate::ssl::enums::watch_event_kind::WatchEventKind;
use crate::ssl::structs::watch_event::WatchEvent;
use std::path::PathBuf;

impl WatchEvent {
    pub fn new(kind: WatchEventKind, path: impl Into<PathBuf>) -> WatchEvent {
        WatchEvent {
            kind,
            paths: vec![path.into()],
        }
    }
}

impl From<notify::Event> for WatchEvent {
    fn from(event: notify::Event) -> Self {
        WatchEvent {
            kind: WatchEventKind::from(&event.kind),
            paths: event.paths,
        }
    }
}
