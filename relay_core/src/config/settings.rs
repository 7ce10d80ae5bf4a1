use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub hubspot: HubSpotConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout_seconds: u64,
}

/// Where and how submissions are forwarded. Portal and form identifiers are
/// not part of this; they come from the environment on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubSpotConfig {
    pub api_base: String,
    pub default_page_uri: String,
    /// Sent as `context.pageName`; an empty value omits it.
    pub page_name: Option<String>,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allow_any_origin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            shutdown_timeout_seconds: 10,
        }
    }
}

impl Default for HubSpotConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.hsforms.com".to_string(),
            default_page_uri: "https://lumens-agency.vercel.app/contact".to_string(),
            page_name: Some("Contact Page (External Form)".to_string()),
            timeout_seconds: 30,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5173".to_string(),
                "http://127.0.0.1:5173".to_string(),
                "https://lumens-agency.vercel.app".to_string(),
            ],
            allow_any_origin: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?);

        if std::path::Path::new("config.toml").exists() {
            builder = builder.add_source(File::with_name("config"));
        }

        builder = builder.add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if self.hubspot.api_base.is_empty() {
            return Err(ConfigError::Message(
                "HubSpot API base URL cannot be empty".to_string(),
            ));
        }

        if !self.hubspot.api_base.starts_with("https://")
            && !self.hubspot.api_base.starts_with("http://")
        {
            return Err(ConfigError::Message(
                "HubSpot API base URL must start with http:// or https://".to_string(),
            ));
        }

        if self.hubspot.timeout_seconds == 0 {
            return Err(ConfigError::Message(
                "HubSpot timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Settings that are valid but worth flagging once logging is up.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !self.hubspot.api_base.starts_with("https://") {
            warnings.push("HubSpot API base is not HTTPS - only use this for local testing!".to_string());
        }

        if self.cors.allow_any_origin {
            warnings.push("CORS allows any origin".to_string());
        }

        warnings
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
