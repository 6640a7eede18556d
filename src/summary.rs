/*!
 * Export summary for dirprint
 *
 * After a report is exported to a file, a short table describing what went
 * into it is printed to stderr using the tabled library.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::report::ReportStats;
use crate::utils::format_file_size;

/// Statistics for one exported report
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Output file path
    pub output_file: String,
    /// Time taken to build and write the report
    pub duration: Duration,
    /// What the report contains
    pub stats: ReportStats,
}

/// Format of the summary output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Summary generator for exported reports
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a summary string
    pub fn generate_report(&self, summary: &ExportSummary) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(summary),
        }
    }

    /// Print the summary to stderr, keeping stdout free
    pub fn print_report(&self, summary: &ExportSummary) {
        eprintln!("\n{}", self.generate_report(summary));
    }

    fn generate_console_report(&self, summary: &ExportSummary) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let stats = &summary.stats;
        let mut rows = vec![
            SummaryRow {
                key: "📂 Output File".to_string(),
                value: summary.output_file.clone(),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", summary.duration),
            },
            SummaryRow {
                key: "📄 Files Included".to_string(),
                value: self.format_number(stats.content.files_included),
            },
            SummaryRow {
                key: "🙈 Omitted Entries".to_string(),
                value: format!(
                    "{} files, {} directories",
                    self.format_number(stats.content.files_omitted),
                    self.format_number(stats.content.directories_omitted)
                ),
            },
        ];

        if stats.content.read_errors > 0 {
            rows.push(SummaryRow {
                key: "⚠️ Unreadable Files".to_string(),
                value: self.format_number(stats.content.read_errors),
            });
        }

        if let Some(lines) = stats.total_lines {
            rows.push(SummaryRow {
                key: "📝 Total Lines".to_string(),
                value: self.format_number(lines),
            });
        }

        rows.push(SummaryRow {
            key: "📦 Report Size".to_string(),
            value: format_file_size(stats.bytes as u64),
        });

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        format!("✅  EXPORT COMPLETE\n{}", table)
    }
}
