//! Species distribution map service library.
//!
//! Exposes the pipeline pieces and the router for the binary and for tests.

pub mod classify;
pub mod dispatch;
pub mod handlers;
pub mod metrics;
pub mod pages;
pub mod pipeline;
pub mod state;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the application router.
///
/// `/metrics` is added by the binary once the Prometheus recorder exists.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::data_entry_handler))
        .route(
            "/map",
            post(handlers::map_display_handler)
                .fallback(handlers::map_redirect_handler),
        )
        .route("/mapfile", get(handlers::map_file_handler))
        .route("/style.css", get(handlers::style_handler))
        // Health and status
        .route("/health", get(handlers::health_handler))
        .route("/api/status", get(handlers::status_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}
