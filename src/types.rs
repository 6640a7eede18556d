/*!
 * Core types and data structures for the dirprint application
 */

use std::path::PathBuf;

/// Kind of a filesystem entry the report cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file (after following symlinks)
    File,
    /// Directory (after following symlinks)
    Directory,
}

/// One child of a listed directory
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    /// Entry name
    pub name: String,
    /// Full path on disk
    pub path: PathBuf,
    /// Entry kind
    pub kind: EntryKind,
}

impl DirectoryEntry {
    /// Whether this entry is a directory
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// The non-ignored children of a directory, directories first.
///
/// Both groups are sorted by name.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    /// Child directories
    pub directories: Vec<DirectoryEntry>,
    /// Child files
    pub files: Vec<DirectoryEntry>,
}

impl Listing {
    /// Iterate directories, then files
    pub fn iter(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.directories.iter().chain(self.files.iter())
    }

    /// Total number of children
    pub fn len(&self) -> usize {
        self.directories.len() + self.files.len()
    }

    /// True if the directory has no listed children
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
