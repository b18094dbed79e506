#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum WatchEventKind {
    /// File content was written.
    Modified,
    /// The watched path no longer points at the watched inode (unlink, rename, symlink swap).
    Removed,
    /// Anything else: metadata, access, create.
    Other,
}
