use axum::Router;
use axum::routing::{any, post};
use tower_http::trace::TraceLayer;

use crate::features::calculator::{handle_add, handle_calculate};
use crate::features::health::handle_healthcheck;
use crate::server::{AppState, build_cors_layer};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", any(handle_healthcheck))
        .route("/calculate", post(handle_calculate))
        // Kept for callers that predate `/calculate`.
        .route("/add", post(handle_add))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer())
        .with_state(state)
}
