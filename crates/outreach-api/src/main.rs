//! Outreach REST API entry point.
//!
//! Binary name: `outreach`
//!
//! Parses CLI arguments, loads configuration from the environment,
//! initializes the database and services, then starts the HTTP server.

mod http;
mod state;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use outreach_infra::config::AppConfig;
use state::AppState;

#[derive(Parser)]
#[command(name = "outreach", about = "AI email assistant backend", version)]
struct Cli {
    /// Port to listen on (overrides the PORT environment variable).
    #[arg(long)]
    port: Option<u16>,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,outreach=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let config = AppConfig::from_env()?;
    let port = cli.port.unwrap_or(config.port);

    let state = AppState::init(&config).await?;
    let router = http::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "outreach API listening");
    axum::serve(listener, router).await?;

    Ok(())
}
