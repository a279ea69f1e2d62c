//! Fabrication costing service.
//!
//! Exposes the simple and advanced estimate endpoints over HTTP.

pub mod config;
pub mod error;
pub mod pricing;
pub mod routes;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Estimate bodies are a few hundred bytes
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Build the application router with all routes and middleware
pub fn app(config: &Config) -> Router {
    let cors = if config.cors_allow_any {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/health", get(routes::health))
        .merge(pricing::router())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Initialize tracing/logging from `RUST_LOG`
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ccr_costing=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
