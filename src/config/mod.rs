//! Application configuration module
//!
//! Configuration is read from environment variables with the `VIBE_LADDER`
//! prefix using the `config` and `dotenvy` crates. Nested values use double
//! underscores as separators. Every value has a default, so an empty
//! environment yields a working local setup.
//!
//! # Example
//!
//! ```no_run
//! use vibe_ladder::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod content;
mod error;
mod server;
mod site;

pub use content::ContentConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{LogFormat, ServerConfig};
pub use site::SiteConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Content document location
    #[serde(default)]
    pub content: ContentConfig,

    /// Static output, state directory and session timings
    #[serde(default)]
    pub site: SiteConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `VIBE_LADDER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `VIBE_LADDER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `VIBE_LADDER__CONTENT__BASE_URL=...` -> `content.base_url = ...`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("VIBE_LADDER")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.content.validate()?;
        self.site.validate()?;
        Ok(())
    }
}
