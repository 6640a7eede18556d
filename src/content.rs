/*!
 * File contents section of the report
 */

use std::fs;
use std::io::Write;
use std::path::Path;

use indicatif::ProgressBar;
use tracing::{debug, warn};

use crate::error::Result;
use crate::filter::FilterSet;
use crate::language::language_for;
use crate::scanner::{list_children, list_children_or_empty};
use crate::types::{DirectoryEntry, Listing};

/// Placeholder written for omitted directories
pub const DIRECTORY_OMITTED: &str = "[Directory contents omitted for brevity...]";
/// Placeholder written for omitted files
pub const CONTENT_OMITTED: &str = "[Content omitted for brevity...]";

/// Counters collected while serializing contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentStats {
    /// Files whose contents were written
    pub files_included: usize,
    /// Files replaced by the omission placeholder
    pub files_omitted: usize,
    /// Directories replaced by the omission placeholder
    pub directories_omitted: usize,
    /// Files that could not be read as text
    pub read_errors: usize,
}

/// Writes every non-ignored file as a fenced, labelled block
pub struct ContentSerializer<'a> {
    filters: &'a FilterSet,
    /// Progress bar
    pub progress: ProgressBar,
}

impl<'a> ContentSerializer<'a> {
    /// Create a new content serializer
    pub fn new(filters: &'a FilterSet, progress: ProgressBar) -> Self {
        Self { filters, progress }
    }

    /// Write the contents of everything under `root` into `out`
    pub fn serialize<W: Write>(&self, root: &Path, out: &mut W) -> Result<ContentStats> {
        let mut stats = ContentStats::default();
        let listing = list_children(root, self.filters)?;
        self.process_listing(root, &listing, out, &mut stats)?;
        Ok(stats)
    }

    fn process_listing<W: Write>(
        &self,
        root: &Path,
        listing: &Listing,
        out: &mut W,
        stats: &mut ContentStats,
    ) -> Result<()> {
        for dir in &listing.directories {
            if self.filters.is_omitted(&dir.name) {
                writeln!(out, "{}/:", relative_display(root, &dir.path))?;
                writeln!(out, "{}", DIRECTORY_OMITTED)?;
                writeln!(out)?;
                stats.directories_omitted += 1;
            } else {
                let children = list_children_or_empty(&dir.path, self.filters);
                self.process_listing(root, &children, out, stats)?;
            }
        }

        for file in &listing.files {
            if self.filters.is_ignored(&file.name) {
                continue;
            }
            self.process_file(root, file, out, stats)?;
        }

        Ok(())
    }

    fn process_file<W: Write>(
        &self,
        root: &Path,
        file: &DirectoryEntry,
        out: &mut W,
        stats: &mut ContentStats,
    ) -> Result<()> {
        let rel = relative_display(root, &file.path);
        writeln!(out, "{}:", rel)?;

        if self.filters.is_omitted(&file.name) {
            writeln!(out, "{}", CONTENT_OMITTED)?;
            writeln!(out)?;
            stats.files_omitted += 1;
            return Ok(());
        }

        self.progress.inc(1);
        self.progress.set_message(format!("Current file: {}", rel));
        debug!("Serializing {}", rel);

        writeln!(out, "```{}", language_for(&file.path))?;
        match fs::read_to_string(&file.path) {
            Ok(content) => {
                writeln!(out, "{}", content)?;
                stats.files_included += 1;
            }
            Err(e) => {
                warn!("Failed to read {}: {}", file.path.display(), e);
                writeln!(out, "Error reading file: {}", e)?;
                stats.read_errors += 1;
            }
        }
        writeln!(out, "```")?;
        writeln!(out)?;

        Ok(())
    }
}

/// Path of `path` relative to `root`, for headers
fn relative_display(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
