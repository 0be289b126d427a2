//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PRICING` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use pricing_engine::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let catalog = config.build_catalog().expect("Invalid catalog");
//! println!("{} plans", catalog.plans().len());
//! ```

mod catalog;
mod display;
mod error;
mod features;
mod logging;
mod stripe;

pub use catalog::CatalogConfig;
pub use display::DisplayConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use logging::{LogFormat, LoggingConfig};
pub use stripe::StripeConfig;

use serde::Deserialize;

use crate::domain::catalog::PricingCatalog;
use crate::domain::pricing::PricingEngine;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration with the built-in catalog.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Label language
    #[serde(default)]
    pub display: DisplayConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,

    /// Catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Stripe animation tuning
    #[serde(default)]
    pub stripe: StripeConfig,

    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PRICING` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PRICING__FEATURES__PROMOTIONAL_PRICING=true` -> `features.promotional_pricing = true`
    /// - `PRICING__CATALOG__PATH=catalog/black-friday.yaml` -> `catalog.path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PRICING")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.catalog.validate()?;
        self.stripe.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Builds the catalog with the promotion switch applied
    pub fn build_catalog(&self) -> Result<PricingCatalog, ConfigError> {
        Ok(self.catalog.load(self.features.promotional_pricing)?)
    }

    /// Engine configured from the feature flags
    pub fn engine(&self) -> PricingEngine {
        PricingEngine::new(self.features.engine_options())
    }
}
