pub mod analyze;
pub mod health;
pub mod index;

pub use analyze::*;
pub use health::*;
pub use index::*;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the application router around an injected state.
pub fn router(state: AppState) -> Router {
    // Headroom over the configured file limit for multipart framing and the
    // job description text; the handler enforces the real limit.
    let body_limit = (state.config.max_file_size_mb + 1) * 1024 * 1024;

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/api/v1/analyze", post(analyze_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state)
}
