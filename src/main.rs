/*!
 * Command-line interface for DirPrint
 */

use std::io;
use std::time::{Duration, Instant};

use clap::CommandFactory;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use dirprint::config::{Args, Config};
use dirprint::report::ReportBuilder;
use dirprint::summary::{ExportSummary, ReportFormat, Reporter};

fn main() -> io::Result<()> {
    // Logs go to stderr so they never mix with a report on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse_normalized();

    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let config = Config::from_args(args);
    config.validate()?;

    // Only show progress when stdout is not carrying the report
    let progress = if config.export_file.is_some() {
        let progress = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos} files")
        {
            progress.set_style(style);
        }
        progress.set_prefix("📄 Collecting");
        progress.enable_steady_tick(Duration::from_millis(100));
        progress
    } else {
        ProgressBar::hidden()
    };

    let start_time = Instant::now();
    let builder = ReportBuilder::new(config, progress.clone());
    let result = builder.build();
    progress.finish_and_clear();
    let stats = result?;

    if let Some(path) = builder.export_file() {
        let summary = ExportSummary {
            output_file: path.display().to_string(),
            duration: start_time.elapsed(),
            stats,
        };
        Reporter::new(ReportFormat::ConsoleTable).print_report(&summary);
    }

    Ok(())
}
