pub mod dto;
pub mod loader;

pub use dto::{AppConfig, DEFAULT_PORT};
pub use loader::load_config;
