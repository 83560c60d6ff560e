//! Species distribution map service.
//!
//! Serves a coordinate entry form, draws the submitted records as an SVG
//! map and keeps the last map available for download.

use anyhow::Result;
use axum::{extract::Extension, routing::get};
use clap::Parser;
use std::{net::SocketAddr, sync::Arc};
use tower_http::compression::CompressionLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use map_api::{create_router, handlers, state::AppState};

#[derive(Parser, Debug)]
#[command(name = "map-api")]
#[command(about = "Species distribution map server")]
struct Args {
    /// Listen address
    #[arg(short, long, env = "MAP_LISTEN", default_value = "0.0.0.0:9090")]
    listen: String,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Number of tokio worker threads (default: number of CPU cores)
    #[arg(long, env = "TOKIO_WORKER_THREADS")]
    worker_threads: Option<usize>,

    /// Check every coordinate line, not just the first
    #[arg(long, env = "MAP_STRICT_COORDINATES")]
    strict_coordinates: bool,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(args))?;
    Ok(())
}

async fn async_main(args: Args) -> Result<()> {
    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let prometheus_handle =
        metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;

    info!(
        strict_coordinates = args.strict_coordinates,
        worker_threads = ?args.worker_threads,
        "Starting map server"
    );

    let state = Arc::new(AppState::new(args.strict_coordinates));

    let app = create_router(state)
        .route("/metrics", get(handlers::metrics_handler))
        .layer(Extension(prometheus_handle))
        .layer(CompressionLayer::new());

    let addr: SocketAddr = args.listen.parse()?;
    info!(address = %addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
