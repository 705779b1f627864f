//! # Application Configuration
//!
//! Loads the server configuration from environment variables with
//! programmatic defaults. `.env` files are honored via `dotenvy` in the
//! entry point, so local development needs no shell exports.

use config::{Config as ConfigBuilder, Environment};
use serde::Deserialize;

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// An error from the underlying `config` crate.
    General(String),
    /// A required setting is absent.
    Missing(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::Missing(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port to listen on. Loaded from `PORT`.
    pub port: u16,
    /// The chat-completions endpoint URL. Loaded from `AI_API_URL`.
    pub ai_api_url: Option<String>,
    /// An optional bearer key for the endpoint. Loaded from `AI_API_KEY`.
    pub ai_api_key: Option<String>,
    /// The model identifier, fixed for the process. Loaded from `AI_MODEL`.
    pub ai_model: String,
}

/// Loads the configuration from the environment.
///
/// `AI_API_URL` is required; everything else has a default.
pub fn get_config() -> Result<AppConfig, ConfigError> {
    let settings = ConfigBuilder::builder()
        .set_default("port", 8080)?
        .set_default("ai_model", "deepseek.r1-v1:0")?
        .add_source(Environment::default())
        .build()?;

    let app_config: AppConfig = settings.try_deserialize()?;
    if app_config.ai_api_url.is_none() {
        return Err(ConfigError::Missing(
            "AI_API_URL is required. Set it to your chat-completions endpoint.".to_string(),
        ));
    }
    Ok(app_config)
}
