//! HTTP surface: router assembly, state, handlers, and error mapping.

pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

pub use state::{AppState, BucketConfig};

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Uploads are whole PDFs; allow well past the axum default.
const MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

/// Builds the application router.
pub fn app(state: Arc<AppState>) -> Router {
    // Browser callers upload from arbitrary origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/extract-text-with-positions",
            post(handlers::extract_text_with_positions),
        )
        .route("/redact-pdf", post(handlers::redact_pdf))
        .route("/redact", post(handlers::redact_remote))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
