//! Download command implementation

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use tracing::info;

use crate::downloader::{
    ConsoleObserver, DownloadObserver, DownloadReport, RetryOrchestrator, SilentObserver,
};
use crate::fetcher::HttpFetcher;
use crate::source::{BseEquitySource, Source, YahooHistorySource};

use super::CliError;

/// Parse a `YYYY-MM-DD` date argument.
fn parse_date(input: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| format!("'{input}' is not a YYYY-MM-DD date: {e}"))
}

/// Output format for the final report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Transient progress plus the one-line summary
    Human,
    /// Full machine-readable report on stdout
    Json,
}

/// Bhav copy downloader CLI
#[derive(Parser, Debug)]
#[command(name = "bhav-dl")]
#[command(about = "Download daily equity bhav copy files between two dates", long_about = None)]
#[command(version)]
pub struct Cli {
    /// First date to download, inclusive (YYYY-MM-DD)
    #[arg(value_parser = parse_date)]
    pub start: NaiveDate,

    /// End of the range, exclusive (YYYY-MM-DD)
    #[arg(value_parser = parse_date)]
    pub end: NaiveDate,

    /// Destination directory for the downloaded files
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,

    /// Download one symbol's full price history from Yahoo instead of the
    /// daily BSE bhav copies (e.g. KOTAKBANK.BO)
    #[arg(long)]
    pub symbol: Option<String>,

    /// Output format
    #[arg(long, default_value = "human")]
    pub output_format: OutputFormat,
}

impl Cli {
    /// Run the download and render the report.
    pub async fn execute(&self) -> Result<DownloadReport, CliError> {
        if !self.out.is_dir() {
            return Err(CliError::InvalidArgument(format!(
                "output directory {:?} does not exist",
                self.out
            )));
        }

        let tasks: Vec<_> = match &self.symbol {
            Some(symbol) => YahooHistorySource::new(symbol)
                .tasks_for_range(self.start, self.end)
                .collect(),
            None => BseEquitySource::new()
                .tasks_for_range(self.start, self.end)
                .collect(),
        };
        info!(tasks = tasks.len(), out = %self.out.display(), "starting download");

        let fetcher = HttpFetcher::new();
        let observer: Box<dyn DownloadObserver> = match self.output_format {
            OutputFormat::Human => Box::new(ConsoleObserver::new()),
            OutputFormat::Json => Box::new(SilentObserver),
        };

        let report = RetryOrchestrator::new(&fetcher, observer.as_ref())
            .download(tasks, &self.out)
            .await?;

        if self.output_format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Ok(report)
    }
}
