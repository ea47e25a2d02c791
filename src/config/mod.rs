//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `DAILY_CULTIVATOR` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use daily_cultivator::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod features;
mod pricing;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use pricing::PricingConfig;

use serde::Deserialize;

use crate::domain::membership::Registrar;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Subscription pricing and donation amounts
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present (for development), then reads
    /// environment variables with the `DAILY_CULTIVATOR` prefix:
    ///
    /// - `DAILY_CULTIVATOR__PRICING__DONATION_PER_MASTER_CENTS=100`
    /// - `DAILY_CULTIVATOR__FEATURES__SEED_LAUNCH_STATS=false`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DAILY_CULTIVATOR")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.pricing.validate()?;
        Ok(())
    }

    /// Builds the registrar from the configured donation amount.
    pub fn registrar(&self) -> Registrar {
        Registrar::new(self.pricing.donation_per_master_cents)
    }
}
