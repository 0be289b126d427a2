//! Shared animation clock for all lanes.

use serde::{Deserialize, Serialize};

use super::{Direction, StripeLane};
use crate::domain::foundation::ValidationError;

/// Speed and easing shared by every lane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripeSettings {
    /// Pixels per frame while running.
    pub base_speed: f64,
    /// Fraction of the remaining speed difference closed each frame.
    pub easing_factor: f64,
}

impl Default for StripeSettings {
    fn default() -> Self {
        Self {
            base_speed: 0.5,
            easing_factor: 0.05,
        }
    }
}

/// A set of lanes driven by one frame clock.
#[derive(Debug, Clone, PartialEq)]
pub struct StripeAnimation {
    settings: StripeSettings,
    target_speed: f64,
    wrapper_width: f64,
    lanes: Vec<StripeLane>,
}

impl StripeAnimation {
    pub fn new(settings: StripeSettings, wrapper_width: f64) -> Self {
        Self {
            settings,
            target_speed: settings.base_speed,
            wrapper_width,
            lanes: Vec::new(),
        }
    }

    /// Adds a lane anchored to this animation's wrapper.
    pub fn add_lane(
        &mut self,
        direction: Direction,
        content_length: f64,
    ) -> Result<&StripeLane, ValidationError> {
        let lane = StripeLane::new(
            direction,
            content_length,
            self.wrapper_width,
            self.settings.base_speed,
        )?;
        self.lanes.push(lane);
        Ok(&self.lanes[self.lanes.len() - 1])
    }

    /// Eases every lane toward a stop (pointer entered the wrapper).
    pub fn pause(&mut self) {
        self.target_speed = 0.0;
    }

    /// Eases every lane back to `base_speed`.
    pub fn resume(&mut self) {
        self.target_speed = self.settings.base_speed;
    }

    pub fn is_paused(&self) -> bool {
        self.target_speed == 0.0
    }

    /// Advances all lanes by one frame.
    pub fn tick(&mut self) {
        for lane in &mut self.lanes {
            lane.step(self.target_speed, self.settings.easing_factor);
        }
    }

    pub fn lanes(&self) -> &[StripeLane] {
        &self.lanes
    }

    pub fn settings(&self) -> StripeSettings {
        self.settings
    }
}
