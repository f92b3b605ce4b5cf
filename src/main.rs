//! Trip Planner Backend
//!
//! A mock travel-planning backend built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │              TRIP PLANNER BACKEND             │
//!                    │                                               │
//!   Client Request   │  ┌─────────┐    ┌──────────┐    ┌─────────┐ │
//!   ─────────────────┼─▶│  http   │───▶│ handlers │───▶│ planner │ │
//!                    │  │ server  │    │          │    │  state  │ │
//!                    │  └─────────┘    └──────────┘    └─────────┘ │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐ │
//!                    │  │          Cross-Cutting Concerns          │ │
//!                    │  │  ┌────────┐ ┌───────────┐ ┌───────────┐ │ │
//!                    │  │  │ config │ │ lifecycle │ │  tracing  │ │ │
//!                    │  │  └────────┘ └───────────┘ └───────────┘ │ │
//!                    │  └─────────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! All state is in-memory and lost on restart.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trip_planner::config::{load_config, AppConfig};
use trip_planner::http::HttpServer;
use trip_planner::lifecycle::{signals, Shutdown};

#[derive(Parser)]
#[command(name = "trip-planner", about = "Mock travel-planning backend", version)]
struct Args {
    /// Path to a TOML configuration file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trip_planner=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("trip-planner v{} starting", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        allowed_origins = ?config.cors.allowed_origins,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Translate SIGTERM/Ctrl+C into the shutdown trigger
    let shutdown = Arc::new(Shutdown::new());
    tokio::spawn(signals::shutdown_on_signal(shutdown.clone()));

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
