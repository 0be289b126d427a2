//! Slider Driver Port - Interface for moving a slider the core does not own.
//!
//! Clicking a plan placeholder has to move the third-party slider handle as
//! well as change the selection. The core expresses that as a
//! [`SliderTarget`] command; the adapter decides how to make the widget
//! obey.

use serde::{Deserialize, Serialize};

use super::AdapterError;

/// Where a slider handle should end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderTarget {
    pub position: i64,
    pub min: i64,
    pub max: i64,
}

impl SliderTarget {
    pub fn new(position: i64, min: i64, max: i64) -> Self {
        Self { position, min, max }
    }

    /// Offset along the track in `[0, 1]`; 0 for a degenerate track.
    pub fn track_fraction(&self) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        let clamped = self.position.clamp(self.min, self.max);
        (clamped - self.min) as f64 / (self.max - self.min) as f64
    }
}

/// Port for driving an external slider widget.
pub trait SliderDriver: Send {
    /// Moves the slider handle to `target`.
    ///
    /// # Errors
    /// Returns `AdapterError` if the widget cannot be reached.
    fn move_to(&mut self, target: SliderTarget) -> Result<(), AdapterError>;
}
