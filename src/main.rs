use anyhow::{bail, Context, Result};
use breach_search::api::BreachVipClient;
use breach_search::config::{find_config_file, load_config, Config};
use breach_search::models::SearchRequest;
use breach_search::runner::SearchRunner;
use breach_search::ui::{self, Status};
use breach_search::utils::HttpClient;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Breach Search - query breach.vip and extract emails and passwords from the results
#[derive(Parser, Debug)]
#[command(name = "breach-search")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query breach.vip and extract emails and passwords from the results", long_about = None)]
struct Cli {
    /// Search term
    #[arg(long, short)]
    term: String,

    /// Comma-separated fields to search (email, password, domain, username, ip, name, uuid, steamid, phone, discordid)
    #[arg(long, short, default_value = "domain")]
    fields: String,

    /// Comma-separated categories
    #[arg(long, short)]
    categories: Option<String>,

    /// Enable wildcard matching; left unset unless given
    #[arg(
        long,
        short,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    wildcard: Option<bool>,

    /// Case sensitive search; left unset unless given
    #[arg(
        long = "case",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    case_sensitive: Option<bool>,

    /// API endpoint URL (overrides config)
    #[arg(long)]
    url: Option<String>,

    /// Output file path for the raw response (overrides config)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Configuration file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Request timeout in seconds (overrides config)
    #[arg(long)]
    timeout: Option<u64>,

    /// Summary format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,
}

/// Output format for the run summary
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Human-readable lines
    Plain,
    /// JSON object (machine-readable)
    Json,
}

fn init_tracing(cli: &Cli) {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("breach_search={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Merge the config file, environment and command-line overrides.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let config_path = cli.config.clone().or_else(find_config_file);
    if let Some(path) = &config_path {
        tracing::info!("Using config file: {}", path.display());
    }

    let mut config = load_config(config_path.as_deref()).context("failed to load configuration")?;

    if let Some(url) = &cli.url {
        config.api.url = url.clone();
    }
    if let Some(out) = &cli.out {
        config.output.path = out.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.api.timeout_secs = timeout;
    }
    Ok(config)
}

fn build_request(cli: &Cli) -> Result<SearchRequest> {
    let term = cli.term.trim();
    if term.is_empty() {
        bail!("--term must not be empty");
    }

    let request = SearchRequest::build(
        term,
        &cli.fields,
        cli.categories.as_deref().unwrap_or(""),
        cli.wildcard,
        cli.case_sensitive,
    )?;
    Ok(request)
}

async fn run(cli: Cli) -> Result<()> {
    let request = build_request(&cli)?;
    let config = resolve_config(&cli)?;

    let http = HttpClient::with_settings(
        &config.api.user_agent,
        Duration::from_secs(config.api.timeout_secs),
    )
    .context("failed to create HTTP client")?;
    let api = BreachVipClient::new(config.api.url.clone(), http)?;
    let runner = SearchRunner::from_config(Arc::new(api), &config)?;

    if !cli.quiet && cli.format == OutputFormat::Plain {
        ui::print_status(
            Status::Search,
            &format!("Searching for {} on {}", request.term(), config.api.url),
        );
    }

    let summary = runner.run(&request).await?;

    match cli.format {
        OutputFormat::Plain if !cli.quiet => ui::print_summary(&summary),
        OutputFormat::Plain => {}
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::print_error(&format!("Error: {:#}", err));
            ExitCode::FAILURE
        }
    }
}
