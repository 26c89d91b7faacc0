use std::fs::Metadata;

/// Classification of a visited filesystem entry.
///
/// Derived from [`Metadata::file_type`] without following symlinks, so a
/// symlink (dangling or not), socket, fifo, or device classifies as
/// [`Other`](EntryKind::Other). `Other` entries are visited like any entry
/// but are never recursed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory; the walk lists and descends into its children.
    Dir,
    /// Anything else. A terminal entry for the walk.
    Other,
}

impl EntryKind {
    /// Classify the entry described by `metadata`.
    pub fn of(metadata: &Metadata) -> EntryKind {
        let file_type = metadata.file_type();
        if file_type.is_dir() {
            EntryKind::Dir
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}
