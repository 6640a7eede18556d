/*!
 * ASCII tree rendering of the directory structure
 */

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::filter::FilterSet;
use crate::line_count::{rel_key, LineCounts};
use crate::scanner::{list_children, list_children_or_empty};
use crate::types::Listing;

const TEE: &str = "├── ";
const CORNER: &str = "└── ";
const VERTICAL: &str = "│   ";
const BLANK: &str = "    ";

/// Marker printed before omitted entries
pub const OMITTED_MARKER: &str = "[omitted] ";

/// Renders the structure section of the report
pub struct TreeRenderer<'a> {
    filters: &'a FilterSet,
    show_omitted_structure: bool,
    line_counts: Option<&'a LineCounts>,
}

impl<'a> TreeRenderer<'a> {
    /// Create a new tree renderer
    pub fn new(
        filters: &'a FilterSet,
        show_omitted_structure: bool,
        line_counts: Option<&'a LineCounts>,
    ) -> Self {
        Self {
            filters,
            show_omitted_structure,
            line_counts,
        }
    }

    /// Write the tree for `root` into `out`, ending with a blank line.
    ///
    /// `root` should be canonical so its base name is meaningful.
    pub fn render<W: Write>(&self, root: &Path, out: &mut W) -> Result<()> {
        let base = root.file_name().unwrap_or_default().to_string_lossy();
        match self.line_counts {
            Some(counts) => writeln!(out, "{}/{}", base, counts.root_annotation())?,
            None => writeln!(out, "{}/", base)?,
        }

        let listing = list_children(root, self.filters)?;
        self.render_listing(&listing, Path::new(""), "", self.line_counts, out)?;

        writeln!(out)?;
        Ok(())
    }

    fn render_listing<W: Write>(
        &self,
        listing: &Listing,
        rel_dir: &Path,
        prefix: &str,
        line_counts: Option<&LineCounts>,
        out: &mut W,
    ) -> Result<()> {
        let count = listing.len();

        for (i, entry) in listing.iter().enumerate() {
            let is_last = i + 1 == count;
            let (connector, continuation) = if is_last {
                (CORNER, BLANK)
            } else {
                (TEE, VERTICAL)
            };
            let child_prefix = format!("{}{}", prefix, continuation);
            let rel_path = rel_dir.join(&entry.name);
            let suffix = if entry.is_dir() { "/" } else { "" };

            if self.filters.is_omitted(&entry.name) {
                writeln!(out, "{}{}{}{}{}", prefix, connector, OMITTED_MARKER, entry.name, suffix)?;
                if entry.is_dir() && self.show_omitted_structure {
                    let children = list_children_or_empty(&entry.path, self.filters);
                    self.render_listing(&children, &rel_path, &child_prefix, None, out)?;
                }
                continue;
            }

            let annotation = line_counts
                .map(|counts| counts.annotation(&rel_key(&rel_path)))
                .unwrap_or_default();
            writeln!(out, "{}{}{}{}{}", prefix, connector, entry.name, suffix, annotation)?;

            if entry.is_dir() {
                let children = list_children_or_empty(&entry.path, self.filters);
                self.render_listing(&children, &rel_path, &child_prefix, line_counts, out)?;
            }
        }

        Ok(())
    }
}
