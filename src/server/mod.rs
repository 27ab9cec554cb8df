pub mod cors;
pub mod router;
pub mod state;

pub use cors::build_cors_layer;
pub use router::build_router;
pub use state::AppState;
