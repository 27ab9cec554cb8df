use crate::config::dto::AppConfig;

/// Loads `.env` so `RUST_LOG` can be set there, then returns the fixed
/// `0.0.0.0:5000` binding. Service variables injected by the platform (such as
/// `CALCULATOR_PORT=tcp://...`) are never consulted.
pub fn load_config() -> AppConfig {
    dotenvy::dotenv().ok();

    AppConfig::default()
}
