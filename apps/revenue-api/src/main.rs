//! Revenue API Binary
//!
//! Starts the Rentfolio revenue aggregation service.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin revenue-api
//! ```
//!
//! # Environment Variables
//!
//! ## Optional
//! - `HTTP_PORT`: HTTP server port (default: 8080)
//! - `CACHE_TTL_SECS`: Revenue cache freshness window in seconds (default: 300)
//! - `RUST_LOG`: Log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use revenue_api::application::use_cases::{FlushCacheUseCase, GetMonthlyRevenueUseCase};
use revenue_api::infrastructure::cache::InMemoryCacheStore;
use revenue_api::infrastructure::http::{AppState, create_router};
use revenue_api::infrastructure::persistence::InMemoryReservationStore;
use tokio::net::TcpListener;
use tokio::signal;

/// Default HTTP server port.
const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default cache freshness window.
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// Parsed configuration from environment variables.
struct ServiceConfig {
    http_port: u16,
    cache_ttl: Duration,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_dotenv();
    init_tracing();

    tracing::info!("Starting Rentfolio Revenue API");

    let config = parse_config();
    log_config(&config);

    let reservation_store = Arc::new(InMemoryReservationStore::new());
    let cache = Arc::new(InMemoryCacheStore::new());

    let state = AppState {
        get_monthly_revenue: Arc::new(GetMonthlyRevenueUseCase::new(
            Arc::clone(&reservation_store),
            Arc::clone(&cache),
            config.cache_ttl,
        )),
        flush_cache: Arc::new(FlushCacheUseCase::new(cache)),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let app = create_router(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.http_port).parse()?;

    tracing::info!(%addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /api/v1/monthly-revenue");
    tracing::info!("  POST /api/v1/flush-cache");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Revenue API stopped");
    Ok(())
}

/// Load .env file from current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Initialize the tracing subscriber with environment filter.
///
/// Uses static directive strings that are compile-time constants guaranteed to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "revenue_api=info"
                    .parse()
                    .expect("static directive 'revenue_api=info' is valid"),
            ),
        )
        .init();
}

/// Parse configuration from environment variables.
fn parse_config() -> ServiceConfig {
    let http_port: u16 = std::env::var("HTTP_PORT")
        .unwrap_or_else(|_| DEFAULT_HTTP_PORT.to_string())
        .parse()
        .unwrap_or(DEFAULT_HTTP_PORT);

    let cache_ttl = std::env::var("CACHE_TTL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .map_or(DEFAULT_CACHE_TTL, Duration::from_secs);

    ServiceConfig {
        http_port,
        cache_ttl,
    }
}

/// Log the parsed configuration.
fn log_config(config: &ServiceConfig) {
    tracing::info!(
        http_port = config.http_port,
        cache_ttl_secs = config.cache_ttl.as_secs(),
        "Configuration loaded"
    );
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed. Failure to install
/// handlers means the process cannot respond to termination signals, so
/// failing fast during startup beats an unresponsive process.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
