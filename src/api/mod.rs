//! REST API for the form-based quote frontend.
//!
//! Provides three endpoints:
//! - `POST /quote` — compute a savings quote from a JSON submission
//! - `GET /tariff` — the fixed regulatory tariff parameters
//! - `GET /health` — liveness probe
//!
//! The service is stateless: every quote is recomputed fresh from the
//! submitted inputs, so no shared state or locking is needed.

mod handlers;
mod types;

pub use types::{ErrorResponse, QuoteRequest, QuoteResponse, TariffResponse};

use std::net::SocketAddr;

use axum::Router;
use axum::routing::{get, post};

/// Builds the axum router with all API routes.
pub fn router() -> Router {
    Router::new()
        .route("/quote", post(handlers::post_quote))
        .route("/tariff", get(handlers::get_tariff))
        .route("/health", get(handlers::get_health))
}

/// Binds to the given address and serves the API.
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(addr: SocketAddr) {
    let app = router();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
