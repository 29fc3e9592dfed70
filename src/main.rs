mod cli;

use cli::{Args, Command, HostsArgs, IngestArgs, ReportArgs};
use owo_colors::OwoColorize;
use scopeon_inventory::adapters::outbound::console::StderrProgressReporter;
use scopeon_inventory::adapters::outbound::filesystem::{FileSystemReader, JsonInventoryStore};
use scopeon_inventory::application::dto::{IngestRequest, ReportRequest};
use scopeon_inventory::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType,
};
use scopeon_inventory::application::use_cases::{IngestScanUseCase, InventoryReportUseCase};
use scopeon_inventory::config::{self, ConfigFile, DEFAULT_STORE_DIR};
use scopeon_inventory::shared::error::ExitCode;
use scopeon_inventory::shared::Result;
use std::path::PathBuf;
use std::process;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };
    process::exit(exit_code.as_i32());
}

fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    let config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(path)?,
        None => config::discover_config(&std::env::current_dir()?)?.unwrap_or_default(),
    };

    init_logging(&args, &config);
    info!("scopeon v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Ingest(ingest) => run_ingest(ingest, &config),
        Command::Report(report) => run_report(report, &config),
        Command::Hosts(hosts) => run_hosts(hosts, &config),
    }
}

/// RUST_LOG wins; otherwise the flags, then the config file, then `warn`.
fn init_logging(args: &Args, config: &ConfigFile) {
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if args.debug {
            "debug"
        } else if args.verbose {
            "info"
        } else {
            config.log_level.as_deref().unwrap_or("warn")
        };
        tracing_subscriber::EnvFilter::new(level.to_lowercase())
    });

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn resolve_store_dir(cli_value: Option<PathBuf>, config: &ConfigFile) -> PathBuf {
    cli_value
        .or_else(|| config.store_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_DIR))
}

fn run_ingest(args: IngestArgs, config: &ConfigFile) -> Result<ExitCode> {
    let store_dir = resolve_store_dir(args.store, config);
    debug!(store = %store_dir.display(), "using inventory store");

    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };
    let use_case = IngestScanUseCase::new(
        JsonInventoryStore::new(store_dir),
        FileSystemReader::new(),
        progress_reporter,
    );

    let response = use_case.execute(IngestRequest::new(args.scan_report, args.partial))?;

    if response.has_conflicts() {
        eprintln!(
            "{}",
            format!(
                "⚠️  {} package(s) on {} conflicted with their recorded history and were left unchanged.",
                response.summary.conflicts.len(),
                response.hostname
            )
            .yellow()
        );
        return Ok(ExitCode::ConflictsDetected);
    }
    Ok(ExitCode::Success)
}

fn run_report(args: ReportArgs, config: &ConfigFile) -> Result<ExitCode> {
    let store_dir = resolve_store_dir(args.store, config);
    let format = args
        .format
        .or_else(|| config.output_format())
        .unwrap_or_default();
    let include_inactive = args.all || config.include_inactive.unwrap_or(false);

    let use_case = InventoryReportUseCase::new(JsonInventoryStore::new(store_dir));
    let model = use_case.execute(ReportRequest::new(
        args.hostname,
        include_inactive,
        args.as_of,
    ))?;

    eprintln!("{}", FormatterFactory::progress_message(format));
    let output = FormatterFactory::create(format).format(&model)?;

    PresenterFactory::create(PresenterType::from(args.output)).present(&output)?;
    Ok(ExitCode::Success)
}

fn run_hosts(args: HostsArgs, config: &ConfigFile) -> Result<ExitCode> {
    let store_dir = resolve_store_dir(args.store, config);
    let use_case = InventoryReportUseCase::new(JsonInventoryStore::new(store_dir.clone()));

    let hostnames = use_case.list_hosts()?;
    if hostnames.is_empty() {
        eprintln!("No hosts recorded in {}", store_dir.display());
    }
    for hostname in hostnames {
        println!("{}", hostname);
    }
    Ok(ExitCode::Success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_store_dir_precedence() {
        let config = ConfigFile {
            store_dir: Some(PathBuf::from("/from/config")),
            ..ConfigFile::default()
        };

        assert_eq!(
            resolve_store_dir(Some(PathBuf::from("/from/cli")), &config),
            PathBuf::from("/from/cli")
        );
        assert_eq!(
            resolve_store_dir(None, &config),
            PathBuf::from("/from/config")
        );
        assert_eq!(
            resolve_store_dir(None, &ConfigFile::default()),
            PathBuf::from(DEFAULT_STORE_DIR)
        );
    }
}
