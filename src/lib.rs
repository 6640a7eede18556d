/*!
 * DirPrint - Print a directory structure and file contents as one text report
 *
 * This library renders an ASCII tree of a directory followed by the fenced
 * contents of each file, with ignore/omit filters and optional line counts.
 */

pub mod config;
pub mod content;
pub mod error;
pub mod filter;
pub mod language;
pub mod line_count;
pub mod pattern;
pub mod report;
pub mod scanner;
pub mod summary;
pub mod tree;
pub mod types;
pub mod utils;


// Re-export main components for easier access
pub use config::{Args, Config};
pub use content::{ContentSerializer, ContentStats};
pub use error::{DirPrintError, Result};
pub use filter::FilterSet;
pub use line_count::{LineCounter, LineCounts};
pub use pattern::{pattern_matches, Pattern};
pub use report::{ReportBuilder, ReportLayout, ReportStats};
pub use summary::{ExportSummary, ReportFormat, Reporter};
pub use tree::TreeRenderer;
pub use types::{DirectoryEntry, EntryKind, Listing};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
