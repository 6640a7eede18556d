/*!
 * Line counting for the tree annotations
 *
 * Counts are gathered in one depth-first pass. Every directory's count is the
 * sum of its non-ignored children; omitted children are recorded as zero and
 * never descended into.
 */

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::filter::FilterSet;
use crate::scanner::{list_children, list_children_or_empty};
use crate::utils::format_line_annotation;

/// Table key used for the scan root
pub const ROOT_KEY: &str = ".";

/// Table key for a path relative to the scan root
pub fn rel_key(rel_path: &Path) -> String {
    if rel_path.as_os_str().is_empty() {
        ROOT_KEY.to_string()
    } else {
        rel_path.to_string_lossy().to_string()
    }
}

/// Line counts keyed by relative path, plus the root total
#[derive(Debug, Clone, Default)]
pub struct LineCounts {
    /// Count per relative path (`.` for the root)
    pub table: BTreeMap<String, usize>,
    /// Total line count of the root
    pub total: usize,
}

impl LineCounts {
    /// Count recorded for a key, zero if absent
    pub fn get(&self, key: &str) -> usize {
        self.table.get(key).copied().unwrap_or(0)
    }

    /// Annotation for a non-root entry, e.g. ` (3 lines, 60.0%)`
    pub fn annotation(&self, key: &str) -> String {
        format_line_annotation(self.get(key), self.total)
    }

    /// Annotation for the root line, always at 100%
    pub fn root_annotation(&self) -> String {
        format!(" ({} lines, 100%)", self.total)
    }
}

/// Recursive line counter honoring ignore and omit filters
pub struct LineCounter<'a> {
    filters: &'a FilterSet,
}

impl<'a> LineCounter<'a> {
    /// Create a new line counter
    pub fn new(filters: &'a FilterSet) -> Self {
        Self { filters }
    }

    /// Count lines under `root`.
    ///
    /// Fails only if the root itself cannot be listed. Unreadable files and
    /// nested directories count as zero.
    pub fn count(&self, root: &Path) -> Result<LineCounts> {
        let mut counts = LineCounts::default();

        let listing = list_children(root, self.filters)?;
        let mut total = 0;
        for child in listing.iter() {
            total += self.count_path(&child.path, Path::new(&child.name), &mut counts.table);
        }

        counts.table.insert(ROOT_KEY.to_string(), total);
        counts.total = total;
        Ok(counts)
    }

    fn count_path(
        &self,
        path: &Path,
        rel_path: &Path,
        table: &mut BTreeMap<String, usize>,
    ) -> usize {
        let key = rel_key(rel_path);
        let name = rel_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        if self.filters.is_omitted(&name) {
            table.insert(key, 0);
            return 0;
        }

        let lines = if path.is_file() {
            count_file_lines(path)
        } else if path.is_dir() {
            list_children_or_empty(path, self.filters)
                .iter()
                .map(|child| self.count_path(&child.path, &rel_path.join(&child.name), table))
                .sum()
        } else {
            0
        };

        table.insert(key, lines);
        lines
    }
}

/// Number of lines in a text file, zero if it cannot be read as UTF-8
pub fn count_file_lines(path: &Path) -> usize {
    match fs::read_to_string(path) {
        Ok(content) => content.lines().count(),
        Err(e) => {
            debug!("Counting {} as 0 lines: {}", path.display(), e);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use tempfile::tempdir;

    #[test]
    fn test_directory_sums_children() -> io::Result<()> {
        let temp_dir = tempdir()?;
        fs::write(temp_dir.path().join("a.py"), "x = 1\ny = 2\n")?;
        fs::create_dir(temp_dir.path().join("b"))?;
        fs::write(temp_dir.path().join("b").join("c.py"), "1\n2\n3\n")?;

        let filters = FilterSet::default();
        let counts = LineCounter::new(&filters).count(temp_dir.path())?;

        assert_eq!(counts.total, 5);
        assert_eq!(counts.get(ROOT_KEY), 5);
        assert_eq!(counts.get("a.py"), 2);
        assert_eq!(counts.get("b"), 3);
        assert_eq!(counts.get(&rel_key(&Path::new("b").join("c.py"))), 3);
        assert_eq!(counts.annotation("a.py"), " (2 lines, 40.0%)");
        assert_eq!(counts.root_annotation(), " (5 lines, 100%)");

        Ok(())
    }

    #[test]
    fn test_omitted_children_count_zero() -> io::Result<()> {
        let temp_dir = tempdir()?;
        fs::write(temp_dir.path().join("keep.txt"), "one\n")?;
        fs::create_dir(temp_dir.path().join("vendor"))?;
        fs::write(temp_dir.path().join("vendor").join("lib.go"), "a\nb\nc\nd\n")?;

        let filters = FilterSet::new(Vec::<String>::new(), vec!["vendor".to_string()]);
        let counts = LineCounter::new(&filters).count(temp_dir.path())?;

        assert_eq!(counts.total, 1);
        assert_eq!(counts.get("vendor"), 0);
        assert!(!counts
            .table
            .contains_key(&rel_key(&Path::new("vendor").join("lib.go"))));

        Ok(())
    }

    #[test]
    fn test_ignored_children_excluded() -> io::Result<()> {
        let temp_dir = tempdir()?;
        fs::write(temp_dir.path().join("keep.txt"), "one\ntwo\n")?;
        fs::create_dir(temp_dir.path().join("build"))?;
        fs::write(temp_dir.path().join("build").join("out.txt"), "x\n")?;

        let filters = FilterSet::new(["build"], ["build"]);
        let counts = LineCounter::new(&filters).count(temp_dir.path())?;

        assert_eq!(counts.total, 2);
        assert!(!counts.table.contains_key("build"));

        Ok(())
    }

    #[test]
    fn test_undecodable_file_counts_zero() -> io::Result<()> {
        let temp_dir = tempdir()?;
        fs::write(temp_dir.path().join("blob.bin"), [0xffu8, 0xfe, b'\n', 0x80])?;
        fs::write(temp_dir.path().join("ok.txt"), "line\n")?;

        let filters = FilterSet::default();
        let counts = LineCounter::new(&filters).count(temp_dir.path())?;

        assert_eq!(counts.get("blob.bin"), 0);
        assert_eq!(counts.total, 1);

        Ok(())
    }

    #[test]
    fn test_empty_root() -> io::Result<()> {
        let temp_dir = tempdir()?;
        let filters = FilterSet::default();
        let counts = LineCounter::new(&filters).count(temp_dir.path())?;
        assert_eq!(counts.total, 0);
        assert_eq!(counts.annotation("anything"), " (0 lines, 0.0%)");
        Ok(())
    }

    #[test]
    fn test_missing_root_is_error() {
        let temp_dir = tempdir().unwrap();
        let filters = FilterSet::default();
        assert!(LineCounter::new(&filters)
            .count(&temp_dir.path().join("missing"))
            .is_err());
    }
}
