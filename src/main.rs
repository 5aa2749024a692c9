//! CLI entry point for the WAQI air-quality reporter.
//!
//! Fetches current readings for a fixed list of cities, prints summary and
//! pollutant tables, and saves an AQI comparison chart.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use waqi_aqi::{
    chart::{DEFAULT_CHART_PATH, render_png},
    config::{ReportConfig, TOKEN_VAR, missing_token_message, token_from},
    infra::waqi::{DEFAULT_BASE_URL, WaqiClient},
    output::{log_json, print_report},
    parser::{parse_city, parse_payload},
    pipeline::{Report, collect},
    records::CITIES,
};

/// Exit status when the access token is not configured.
const EXIT_MISSING_TOKEN: u8 = 2;

#[derive(Parser)]
#[command(name = "waqi_aqi")]
#[command(about = "Compare current air quality across cities using the WAQI API", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    report: ReportArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch all cities, print tables and save the chart (default)
    Report(ReportArgs),
    /// Parse a saved WAQI feed response and print its tables
    Inspect {
        /// Path to a JSON file holding a full `{status, data}` response
        #[arg(value_name = "FILE")]
        source: PathBuf,

        /// City label to show in the tables
        #[arg(short, long, default_value = "file")]
        label: String,
    },
}

#[derive(Args)]
struct ReportArgs {
    /// PNG file to write the chart to (overwritten if present)
    #[arg(long, default_value = DEFAULT_CHART_PATH)]
    chart: PathBuf,

    /// Hard cutoff for each HTTP request, in seconds
    #[arg(long, default_value_t = 25)]
    timeout_secs: u64,

    /// Pause after each city's request, in milliseconds
    #[arg(long, default_value_t = 250)]
    pace_ms: u64,

    /// WAQI API base URL
    #[arg(long, env = "WAQI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

impl ReportArgs {
    fn into_config(self, token: String) -> ReportConfig {
        ReportConfig {
            token,
            base_url: self.base_url,
            timeout: Duration::from_secs(self.timeout_secs),
            pacing: Duration::from_millis(self.pace_ms),
            chart_path: self.chart,
        }
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok(); // Load .env file

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Report(cli.report));

    let _log_guard;
    let result = match command {
        Commands::Report(args) => {
            // Checked before logging starts so a misconfigured run leaves nothing behind.
            let Some(token) = token_from(std::env::var(TOKEN_VAR).ok()) else {
                eprintln!("{}", missing_token_message());
                return ExitCode::from(EXIT_MISSING_TOKEN);
            };
            _log_guard = init_logging();
            run_report(&args.into_config(token))
        }
        Commands::Inspect { source, label } => {
            _log_guard = init_logging();
            inspect(&source, &label)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = ?e, "Run failed");
            eprintln!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logging setup: colored stderr + JSON rolling log file.
fn init_logging() -> WorkerGuard {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/waqi_aqi.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("waqi_aqi.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(
            EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        );

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(
            EnvFilter::try_from_env("RUST_LOG_JSON").unwrap_or_else(|_| EnvFilter::new("debug")),
        );

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    guard
}

/// Fetches every city, prints the tables, and writes the chart.
#[tracing::instrument(skip(config), fields(base_url = %config.base_url, chart = %config.chart_path.display()))]
fn run_report(config: &ReportConfig) -> Result<()> {
    let client = WaqiClient::new(&config.base_url, config.token.clone(), config.timeout)
        .context("failed to build HTTP client")?;

    let report = collect(&client, &CITIES, config.pacing);
    if report.failed_count() == report.summaries.len() {
        warn!("No city could be fetched");
    }

    print_report(&report);
    log_json(&report)?;

    render_png(&report.summaries, &config.chart_path)?;
    println!("\nSaved chart: {}", config.chart_path.display());

    Ok(())
}

/// Parses a saved feed response from disk and prints its tables.
#[tracing::instrument(skip(source), fields(source = %source.display()))]
fn inspect(source: &Path, label: &str) -> Result<()> {
    let body = std::fs::read_to_string(source)
        .with_context(|| format!("cannot read {}", source.display()))?;
    let data = parse_payload(&body)
        .with_context(|| format!("{} is not a usable WAQI response", source.display()))?;

    let (summary, pollutants) = parse_city(label, &data);
    let report = Report {
        summaries: vec![summary],
        pollutants: vec![pollutants],
    };

    print_report(&report);
    log_json(&report)?;
    Ok(())
}
