//! Garfield Vibes HTTP host
//!
//! Serves the built page and a small JSON API over the same content the
//! page uses, built with Axum.
//!
//! # Endpoints
//!
//! ## Memes
//! - `GET /api/v1/memes` - The gallery, in display order
//! - `GET /api/v1/memes/:id` - A single meme
//!
//! ## Comics
//! - `GET /api/v1/comics/random` - Random comic from the archive
//! - `GET /api/v1/comics/:date` - Comic for a specific day
//!
//! ## Wisdom
//! - `GET /api/v1/wisdom` - All quotes
//! - `GET /api/v1/wisdom/random` - A random quote
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! Any other path is served from the page bundle directory, falling back to
//! its `index.html`.
//!
//! # Example
//!
//! ```rust,ignore
//! use garfield_vibes::api::{serve, AppState};
//! use garfield_vibes::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let state = AppState::new(config.comics, config.server.clone());
//!     serve(state, &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{AppState, Clock};

use axum::{http::HeaderValue, http::Method, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Meme routes
        .route("/memes", get(routes::memes::list_memes))
        .route("/memes/:id", get(routes::memes::get_meme))
        // Comic routes
        .route("/comics/random", get(routes::comics::random_comic))
        .route("/comics/:date", get(routes::comics::comic_by_date))
        // Wisdom routes
        .route("/wisdom", get(routes::wisdom::list_wisdom))
        .route("/wisdom/random", get(routes::wisdom::random_quote));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let static_dir = &state.config.static_dir;
    let page = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let cors = cors_layer(&state.config.cors_origins);

    // Create shared state
    let shared_state = Arc::new(state);

    let router = Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback_service(page)
        .layer(TraceLayer::new_for_http());

    match cors {
        Some(cors) => router.layer(cors).with_state(shared_state),
        None => router.with_state(shared_state),
    }
}

/// CORS for the configured origins; `None` keeps the API same-origin only
fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    if origins.is_empty() {
        return None;
    }
    if origins.iter().any(|o| o == "*") {
        return Some(CorsLayer::permissive());
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods([Method::GET]),
    )
}

/// Start the server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    if !config.static_dir.join("index.html").is_file() {
        tracing::warn!(
            "No page bundle at {:?}; only the JSON API will be useful (run `trunk build` in vibes-ui/)",
            config.static_dir
        );
    }

    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Garfield Vibes listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Garfield Vibes shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
