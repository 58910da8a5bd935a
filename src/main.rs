//! exemplo entry point.
//!
//! Parses the command line, loads configuration, initializes tracing, builds the
//! Axum router and runs the HTTP server until SIGINT/SIGTERM.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use exemplo::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER};
use exemplo::http::start_server;
use exemplo::{create_router, StartupError};

/// exemplo: static JSON example and health endpoints
#[derive(Parser, Debug)]
#[command(name = "exemplo", version, about)]
struct Args {
    /// Path to configuration file (defaults to config/default.toml when present)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "exemplo=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let args = Args::parse();

    // Configuration first: the log format lives in it
    let config = AppConfig::load_or_default(args.config.as_deref())?;

    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, config.logging.log_format()?)?;

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        tls = ?config.http.tls.mode,
        "Loaded configuration"
    );

    let app = create_router();
    start_server(app, &config).await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(filter: &str, format: LogFormat) -> Result<(), StartupError> {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init()?,
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .try_init()?,
    }

    Ok(())
}
