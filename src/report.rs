/*!
 * Report assembly
 *
 * Combines the structure section and the content section into one text and
 * sends it to a single destination: stdout or the export file.
 */

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use tracing::{debug, info};

use crate::config::Config;
use crate::content::{ContentSerializer, ContentStats};
use crate::error::{Result, ResultExt};
use crate::filter::FilterSet;
use crate::line_count::LineCounter;
use crate::tree::TreeRenderer;

/// How the two sections are framed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLayout {
    /// Single header line, used for stdout
    Plain,
    /// Sections wrapped in `<name-Section>` tags, used for exported files
    Tagged,
}

/// What ended up in a built report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportStats {
    /// Content section counters
    pub content: ContentStats,
    /// Root line count, when line counting was requested
    pub total_lines: Option<usize>,
    /// Size of the report in bytes
    pub bytes: usize,
}

/// Builds and writes the combined report
pub struct ReportBuilder {
    config: Config,
    filters: FilterSet,
    progress: ProgressBar,
}

impl ReportBuilder {
    /// Create a new report builder
    pub fn new(config: Config, progress: ProgressBar) -> Self {
        let filters = FilterSet::new(&config.ignore_patterns, &config.omit_patterns);
        Self {
            config,
            filters,
            progress,
        }
    }

    /// Layout implied by the configuration
    pub fn layout(&self) -> ReportLayout {
        if self.config.export_file.is_some() {
            ReportLayout::Tagged
        } else {
            ReportLayout::Plain
        }
    }

    /// Canonical scan root; fails if it does not exist
    fn resolve_root(&self) -> Result<PathBuf> {
        fs::canonicalize(&self.config.target_dir)
            .with_context(|| format!("Failed to resolve {}", self.config.target_dir.display()))
    }

    /// Write the full report for the configured root into `out`
    pub fn render<W: Write>(&self, out: &mut W) -> Result<ReportStats> {
        let root = self.resolve_root()?;
        let name = root_name(&root);
        debug!("Building report for {}", root.display());

        let line_counts = if self.config.line_count {
            Some(LineCounter::new(&self.filters).count(&root)?)
        } else {
            None
        };

        let tree = TreeRenderer::new(
            &self.filters,
            self.config.show_omitted_structure,
            line_counts.as_ref(),
        );
        let serializer = ContentSerializer::new(&self.filters, self.progress.clone());

        let content = match self.layout() {
            ReportLayout::Plain => {
                writeln!(out, "{} Directory Structure:", name)?;
                tree.render(&root, out)?;
                serializer.serialize(&root, out)?
            }
            ReportLayout::Tagged => {
                writeln!(out, "{} Directory Structure and File Contents:\n", name)?;
                writeln!(out, "<{}-Directory-Structure>\n", name)?;
                tree.render(&root, out)?;
                writeln!(out, "<{}-Directory-Structure>\n", name)?;
                writeln!(out, "<{}-File-Contents>\n", name)?;
                let stats = serializer.serialize(&root, out)?;
                writeln!(out, "<{}-File-Contents>\n", name)?;
                stats
            }
        };

        Ok(ReportStats {
            content,
            total_lines: line_counts.map(|counts| counts.total),
            bytes: 0,
        })
    }

    /// Build the report and write it to the export file or stdout.
    ///
    /// The export file is created (or truncated) before the tree is walked,
    /// so an export inside the scanned root always shows up empty. A missing
    /// root is detected before the file is touched.
    pub fn build(&self) -> Result<ReportStats> {
        self.resolve_root()?;

        let mut export = match &self.config.export_file {
            Some(path) => Some(File::create(path)?),
            None => None,
        };

        let mut buffer = Vec::new();
        let mut stats = self.render(&mut buffer)?;
        stats.bytes = buffer.len();

        match export.as_mut() {
            Some(file) => {
                file.write_all(&buffer)?;
                file.flush()?;
                if let Some(path) = &self.config.export_file {
                    info!("Wrote {} bytes to {}", buffer.len(), path.display());
                }
            }
            None => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(&buffer)?;
                handle.flush()?;
            }
        }

        Ok(stats)
    }

    /// Export destination, if any
    pub fn export_file(&self) -> Option<&PathBuf> {
        self.config.export_file.as_ref()
    }
}

/// Base name of the canonical root
fn root_name(root: &Path) -> String {
    root.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
