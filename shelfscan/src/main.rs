use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shelfscan::api::{create_router, AppState};
use shelfscan::config::Config;
use shelfscan::ocr::{OcrProvider, TextRecognizer};

#[derive(Parser)]
#[command(name = "shelfscan")]
#[command(about = "Read a book's title and author from a photo of its cover")]
struct Args {
    /// Bind address, overrides SHELFSCAN_HOST
    #[arg(long)]
    host: Option<String>,

    /// Listen port, overrides SHELFSCAN_PORT
    #[arg(long)]
    port: Option<u16>,

    /// Skip Google Books reconciliation
    #[arg(long)]
    no_catalog: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shelfscan=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.no_catalog {
        config.catalog.enabled = false;
    }

    tracing::info!("Initializing OCR provider ({})...", config.ocr.languages);
    let ocr = OcrProvider::new(&config.ocr);
    if !ocr.is_available() {
        tracing::warn!("OCR unavailable - scan requests will be rejected with 503");
    }

    if config.catalog.enabled {
        if config.catalog.api_key.is_none() {
            tracing::info!("GOOGLE_BOOKS_API_KEY not set - using anonymous catalog quota");
        }
    } else {
        tracing::info!("Catalog lookups disabled");
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, Arc::new(ocr))?;
    let app = create_router(state);

    tracing::info!("Shelfscan starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/api/v1/health", addr);
    tracing::info!("  API docs:     http://{}/api/v1/docs", addr);
    tracing::info!("  OpenAPI spec: http://{}/api/v1/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining in-flight scans...");
}
