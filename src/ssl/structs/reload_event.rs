use crate::ssl::enums::watch_event_kind::WatchEventKind;
use std::path::PathBuf;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ReloadEvent {
    pub kind: WatchEventKind,
    pub path: PathBuf,
}
