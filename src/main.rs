//! Redaction service binary.
//!
//! Serves the redaction and text-position-extraction endpoints over HTTP.
//! Configuration comes from the environment (optionally a `.env` file)
//! with command-line overrides.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use blackout::server::{app, AppState, BucketConfig};

/// PDF redaction HTTP service
#[derive(Parser)]
#[command(name = "blackout")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8000)]
    port: u16,

    /// Bucket remote source PDFs are fetched from
    #[arg(long, env = "SOURCE_BUCKET", default_value = "documents")]
    source_bucket: String,

    /// Bucket redacted PDFs are uploaded to
    #[arg(long, env = "OUTPUT_BUCKET", default_value = "redacted")]
    output_bucket: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("blackout=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    let state = Arc::new(AppState::new(BucketConfig {
        source: cli.source_bucket,
        output: cli.output_bucket,
    }));
    info!(engine = state.service.engine_name(), "engine ready");

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    info!("Starting redaction service on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
