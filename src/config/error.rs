//! Configuration error types

use thiserror::Error;

use crate::domain::catalog::CatalogError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Catalog could not be built: {0}")]
    Catalog(#[from] CatalogError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Stripe base speed must be positive, got {0}")]
    InvalidBaseSpeed(f64),

    #[error("Stripe easing factor must be in (0, 1], got {0}")]
    InvalidEasingFactor(f64),

    #[error("Stripe frame interval must be at least 1 ms")]
    InvalidFrameInterval,

    #[error("Catalog file not found: {0}")]
    CatalogFileMissing(String),
}
