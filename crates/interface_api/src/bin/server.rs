//! Storefront Pricing Engine - API Server Binary
//!
//! This binary starts the HTTP API server that prices checkout quotes.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration and built-in reference data
//! cargo run --bin pricing-api
//!
//! # Run with environment variables
//! API_PORT=9000 API_REFERENCE_DATA_PATH=./pricing.json cargo run --bin pricing-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_REFERENCE_DATA_PATH` - JSON file with plans, add-ons, promo codes,
//!   tax rules and countries (default: built-in tables)
//! * `API_DUE_DAYS` - Days until an invoice is due (default: 0)
//! * `API_TIMEZONE` - IANA timezone invoices are dated in (default: Asia/Kolkata)

use std::net::SocketAddr;
use std::sync::Arc;

use domain_pricing::ReferenceData;
use interface_api::{config::ApiConfig, create_router};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration and reference data, and starts
/// the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - The reference data file cannot be read or fails validation
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env()?;
    config.validate()?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        timezone = %config.timezone.name(),
        "Starting pricing API server"
    );

    let reference = Arc::new(load_reference_data(&config)?);

    let app = create_router(reference, config.clone());

    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Loads reference data from the configured file, or the built-in tables.
fn load_reference_data(config: &ApiConfig) -> Result<ReferenceData, Box<dyn std::error::Error>> {
    match config.reference_data_path.as_deref() {
        Some(path) => Ok(ReferenceData::from_path(path)?),
        None => {
            tracing::info!("Using built-in reference data");
            let reference = ReferenceData::standard();
            reference.validate()?;
            Ok(reference)
        }
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// In-flight requests complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
