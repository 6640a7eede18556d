/*!
 * Directory listing
 */

use std::io;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::filter::FilterSet;
use crate::types::{DirectoryEntry, EntryKind, Listing};

/// List the immediate children of `dir`, dropping ignored names.
///
/// Symlinks are followed to decide between file and directory. Anything that
/// resolves to neither (broken links, sockets, ...) is skipped. An error is
/// returned only when `dir` itself cannot be read.
pub fn list_children(dir: &Path, filters: &FilterSet) -> io::Result<Listing> {
    let mut listing = Listing::default();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                debug!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().to_string();
        if filters.is_ignored(&name) {
            continue;
        }

        let file_type = entry.file_type();
        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            debug!("Skipping special file {}", entry.path().display());
            continue;
        };

        let child = DirectoryEntry {
            name,
            path: entry.into_path(),
            kind,
        };
        match kind {
            EntryKind::Directory => listing.directories.push(child),
            EntryKind::File => listing.files.push(child),
        }
    }

    Ok(listing)
}

/// List a nested directory, treating a read failure as an empty directory
pub fn list_children_or_empty(dir: &Path, filters: &FilterSet) -> Listing {
    list_children(dir, filters).unwrap_or_else(|e| {
        warn!("Failed to list directory {}: {}", dir.display(), e);
        Listing::default()
    })
}
