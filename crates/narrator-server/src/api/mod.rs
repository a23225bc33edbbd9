//! HTTP API surface

pub mod speech;

use axum::{
    http::HeaderName,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

/// Response header carrying the model identifier actually used
pub const X_MODEL_USED: &str = "x-model-used";

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    // Browser frontends call this API cross-origin and read X-Model-Used,
    // so the header must be exposed through CORS.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([HeaderName::from_static(X_MODEL_USED)]);

    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/api/generate-audio", post(speech::generate_audio))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root route for a simple status check
async fn home() -> &'static str {
    "Narrator TTS service is online."
}

/// Service health check endpoint
async fn health() -> &'static str {
    "healthy"
}
