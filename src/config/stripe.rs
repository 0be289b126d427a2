//! Stripe animation configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::stripe::StripeSettings;

/// Stripe animation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StripeConfig {
    /// Pixels per frame at full speed
    #[serde(default = "default_base_speed")]
    pub base_speed: f64,

    /// Share of the speed gap closed each frame
    #[serde(default = "default_easing_factor")]
    pub easing_factor: f64,

    /// Frame clock period in milliseconds
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
}

fn default_base_speed() -> f64 {
    0.5
}

fn default_easing_factor() -> f64 {
    0.05
}

fn default_frame_interval_ms() -> u64 {
    16
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self {
            base_speed: default_base_speed(),
            easing_factor: default_easing_factor(),
            frame_interval_ms: default_frame_interval_ms(),
        }
    }
}

impl StripeConfig {
    pub fn settings(&self) -> StripeSettings {
        StripeSettings {
            base_speed: self.base_speed,
            easing_factor: self.easing_factor,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Validate stripe configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_speed.is_finite() || self.base_speed <= 0.0 {
            return Err(ValidationError::InvalidBaseSpeed(self.base_speed));
        }
        if !(self.easing_factor > 0.0 && self.easing_factor <= 1.0) {
            return Err(ValidationError::InvalidEasingFactor(self.easing_factor));
        }
        if self.frame_interval_ms == 0 {
            return Err(ValidationError::InvalidFrameInterval);
        }
        Ok(())
    }
}
