//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `RIP_GAMERTAGS` prefix and nested values use double underscores as separators.
//!
//! Every value has a default so the server can start with a partial setup.
//! Missing credentials are reported by [`AppConfig::validate()`] at startup and
//! again, per request, by the adapters that need them.
//!
//! # Example
//!
//! ```no_run
//! use rip_gamertags::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! if let Err(e) = config.validate() {
//!     eprintln!("incomplete configuration: {e}");
//! }
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod error;
mod paypal;
mod server;
mod supabase;

pub use error::{ConfigError, ValidationError};
pub use paypal::{PayPalConfig, PAYPAL_SANDBOX_API_BASE};
pub use server::{Environment, ServerConfig};
pub use supabase::SupabaseConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Payment processor configuration (PayPal)
    #[serde(default)]
    pub paypal: PayPalConfig,

    /// Datastore configuration (Supabase)
    #[serde(default)]
    pub supabase: SupabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `RIP_GAMERTAGS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `RIP_GAMERTAGS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `RIP_GAMERTAGS__PAYPAL__CLIENT_ID=...` -> `paypal.client_id = ...`
    /// - `RIP_GAMERTAGS__SUPABASE__SERVICE_ROLE_KEY=...` -> `supabase.service_role_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("RIP_GAMERTAGS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Presence checks only; credentials are not exercised against the
    /// upstream services.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.paypal.validate()?;
        self.supabase.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
