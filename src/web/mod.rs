//! Web dashboard and JSON API.
//!
//! Routes:
//! - `GET /` - search form, plus results when `event` is given
//! - `GET /api/opportunities` - scan report as JSON
//! - `GET /health` - liveness probe

mod error;
mod handlers;
mod page;
mod params;

pub use error::ApiError;
pub use params::{ScanParams, ScanRequest};

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::Result;
use crate::scanner::ArbitrageScanner;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub scanner: ArbitrageScanner,
}

/// Build the application router.
pub fn router(scanner: ArbitrageScanner) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/api/opportunities", get(handlers::opportunities))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { scanner })
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: &str, scanner: ArbitrageScanner) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, router(scanner))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
