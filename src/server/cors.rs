use tower_http::cors::{Any, CorsLayer};

/// Permits cross-origin requests from any origin on every route.
pub fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
