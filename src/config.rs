/*!
 * Configuration handling for dirprint
 */

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::ensure;
use crate::error::Result;

/// Command-line arguments for dirprint
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "dirprint",
    version = env!("CARGO_PKG_VERSION"),
    about = "Print your directory structure and file contents",
    long_about = "Prints an ASCII tree of a directory followed by the contents of every file, \
                  each fenced and labelled. Patterns match by substring by default; wrap a \
                  pattern in carets (e.g. ^build^) to require an exact name match."
)]
pub struct Args {
    /// Directory path to print
    #[clap(required_unless_present = "generate")]
    pub path: Option<String>,

    /// Patterns to completely hide (e.g. __pycache__ .git node_modules)
    #[clap(short = 'I', long, num_args = 0..)]
    pub ignore: Vec<String>,

    /// Patterns to show in the structure but hide the contents of
    #[clap(short = 'O', long, num_args = 0..)]
    pub omit: Vec<String>,

    /// Export output to a file instead of stdout
    #[clap(short = 'E', long, value_name = "FILE")]
    pub export: Option<String>,

    /// Show the structure of omitted directories
    #[clap(long = "show-omitted-structure", visible_alias = "sos")]
    pub show_omitted_structure: bool,

    /// Annotate each entry with its line count and share of the total
    #[clap(long = "line-count", visible_alias = "lc")]
    pub line_count: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Rewrite `-lc` to `--line-count` so clap accepts the two-letter short form.
///
/// Arguments after a `--` separator are passed through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut past_separator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if past_separator {
                return arg;
            }
            if arg.as_os_str() == "--" {
                past_separator = true;
                arg
            } else if arg.as_os_str() == "-lc" {
                OsString::from("--line-count")
            } else {
                arg
            }
        })
        .collect()
}

impl Args {
    /// Parse the process arguments
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Root directory to print
    pub target_dir: PathBuf,

    /// Patterns hidden everywhere
    pub ignore_patterns: Vec<String>,

    /// Patterns shown in the structure only
    pub omit_patterns: Vec<String>,

    /// Export destination, stdout when unset
    pub export_file: Option<PathBuf>,

    /// Recurse into omitted directories in the structure view
    pub show_omitted_structure: bool,

    /// Annotate the structure view with line counts
    pub line_count: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            target_dir: PathBuf::from(args.path.unwrap_or_else(|| ".".to_string())),
            ignore_patterns: args.ignore,
            omit_patterns: args.omit,
            export_file: args.export.map(PathBuf::from),
            show_omitted_structure: args.show_omitted_structure,
            line_count: args.line_count,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.target_dir.exists(),
            PathNotFound,
            "{}",
            self.target_dir.display()
        );
        ensure!(
            self.target_dir.is_dir(),
            NotADirectory,
            "{}",
            self.target_dir.display()
        );

        if let Some(export) = self.export_file.as_deref() {
            ensure!(
                !export.is_dir(),
                InvalidArgument,
                "Export path is a directory: {}",
                export.display()
            );

            // Export parent directory must already exist
            if let Some(parent) = export.parent() {
                ensure!(
                    parent.as_os_str().is_empty() || parent.exists(),
                    PathNotFound,
                    "Output directory not found: {}",
                    parent.display()
                );
            }
        }

        Ok(())
    }
}
