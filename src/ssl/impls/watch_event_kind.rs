use crate::ssl::enums::watch_event_kind::WatchEventKind;
use notify::event::ModifyKind;
use notify::EventKind;

impl WatchEventKind {
    pub fn is_relevant(&self) -> bool {
        matches!(self, WatchEventKind::Modified | WatchEventKind::Removed)
    }
}

impl From<&EventKind> for WatchEventKind {
    fn from(kind: &EventKind) -> Self {
        match kind {
            EventKind::Modify(ModifyKind::Data(_)) | EventKind::Modify(ModifyKind::Any) => WatchEventKind::Modified,
            // a renamed watched file is as good as gone for its old path
            EventKind::Modify(ModifyKind::Name(_)) | EventKind::Remove(_) => WatchEventKind::Removed,
            _ => WatchEventKind::Other,
        }
    }
}

impl std::fmt::Display for WatchEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WatchEventKind::Modified => write!(f, "modified"),
            WatchEventKind::Removed => write!(f, "removed"),
            WatchEventKind::Other => write!(f, "other"),
        }
    }
}
