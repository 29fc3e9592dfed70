use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args as ClapArgs, Parser, Subcommand};
use scopeon_inventory::application::dto::OutputFormat;
use std::path::PathBuf;

/// Track which package versions were installed on which hosts, and when
#[derive(Parser, Debug)]
#[command(name = "scopeon")]
#[command(version)]
#[command(about = "Track package version history across scanned hosts", long_about = None)]
pub struct Args {
    /// Path to a config file (defaults to ./scopeon.config.yml if present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show informational log output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Show debug log output, including every timeline transition
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply a scan report to the inventory store
    Ingest(IngestArgs),
    /// Render the package inventory of one host
    Report(ReportArgs),
    /// List the hosts known to the inventory store
    Hosts(HostsArgs),
}

#[derive(ClapArgs, Debug)]
pub struct IngestArgs {
    /// Scan report JSON file
    #[arg(value_name = "SCAN_REPORT")]
    pub scan_report: PathBuf,

    /// Inventory store directory
    #[arg(short, long, value_name = "DIR")]
    pub store: Option<PathBuf>,

    /// Treat the report as partial: packages it does not list are not removed
    #[arg(long)]
    pub partial: bool,

    /// Only print conflicts and errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(ClapArgs, Debug)]
pub struct ReportArgs {
    /// Host to report on
    pub hostname: String,

    /// Inventory store directory
    #[arg(short, long, value_name = "DIR")]
    pub store: Option<PathBuf>,

    /// Output format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Include packages that are no longer installed
    #[arg(short, long)]
    pub all: bool,

    /// Show the versions installed at this instant (RFC 3339 or YYYY-MM-DD)
    #[arg(long, value_name = "TIMESTAMP", value_parser = parse_timestamp)]
    pub as_of: Option<DateTime<Utc>>,
}

#[derive(ClapArgs, Debug)]
pub struct HostsArgs {
    /// Inventory store directory
    #[arg(short, long, value_name = "DIR")]
    pub store: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Accepts a full RFC 3339 timestamp or a bare date (midnight UTC).
fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Ok(at.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|at| at.and_utc())
        .ok_or_else(|| {
            format!(
                "Invalid timestamp: {}. Use RFC 3339 (2025-01-15T00:00:00Z) or YYYY-MM-DD",
                value
            )
        })
}
