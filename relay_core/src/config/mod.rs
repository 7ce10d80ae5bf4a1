pub mod settings;

pub use settings::{AppConfig, CorsConfig, HubSpotConfig, LoggingConfig, ServerConfig};
