//! A single scrolling lane.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Scroll direction of a lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// +1 for right, -1 for left.
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

impl FromStr for Direction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(ValidationError::invalid_format(
                "direction",
                format!("expected 'left' or 'right', got '{}'", other),
            )),
        }
    }
}

/// Direction and content length of a lane, written `left:1000`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneSpec {
    pub direction: Direction,
    pub content_length: f64,
}

impl FromStr for LaneSpec {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (direction, length) = s.split_once(':').ok_or_else(|| {
            ValidationError::invalid_format(
                "lane",
                format!("expected 'direction:length', got '{}'", s),
            )
        })?;
        let content_length = length.trim().parse::<f64>().map_err(|_| {
            ValidationError::invalid_format("lane", format!("'{}' is not a length", length))
        })?;
        Ok(Self {
            direction: direction.parse()?,
            content_length,
        })
    }
}

/// Position and velocity of one lane, in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripeLane {
    direction: Direction,
    content_length: f64,
    anchor: f64,
    position: f64,
    velocity: f64,
}

impl StripeLane {
    /// Creates a lane at its anchor, already moving at `base_speed`.
    ///
    /// Left lanes are anchored at 0. Right lanes are anchored at
    /// `wrapper_width - content_length` so their right edge lines up with
    /// the wrapper.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `content_length` is not a positive
    /// finite number.
    pub fn new(
        direction: Direction,
        content_length: f64,
        wrapper_width: f64,
        base_speed: f64,
    ) -> Result<Self, ValidationError> {
        if !content_length.is_finite() || content_length <= 0.0 {
            return Err(ValidationError::invalid_format(
                "content_length",
                format!("must be positive, got {}", content_length),
            ));
        }
        let anchor = match direction {
            Direction::Left => 0.0,
            Direction::Right => wrapper_width - content_length,
        };
        Ok(Self {
            direction,
            content_length,
            anchor,
            position: anchor,
            velocity: direction.sign() * base_speed,
        })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn content_length(&self) -> f64 {
        self.content_length
    }

    pub fn anchor(&self) -> f64 {
        self.anchor
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Advances one frame toward `target_speed` (unsigned).
    pub fn step(&mut self, target_speed: f64, easing_factor: f64) {
        let target = self.direction.sign() * target_speed;
        self.velocity += (target - self.velocity) * easing_factor;
        self.position += self.velocity;

        let wrapped = match self.direction {
            Direction::Left => self.position <= self.anchor - self.content_length,
            Direction::Right => self.position >= self.anchor + self.content_length,
        };
        if wrapped {
            self.position = self.anchor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_direction() {
        assert_eq!("Left".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!(" right ".parse::<Direction>().unwrap(), Direction::Right);
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn parses_lane_specs() {
        let lane: LaneSpec = "right:800".parse().unwrap();
        assert_eq!(lane.direction, Direction::Right);
        assert_eq!(lane.content_length, 800.0);
        assert!("left".parse::<LaneSpec>().is_err());
        assert!("left:wide".parse::<LaneSpec>().is_err());
        assert!("down:10".parse::<LaneSpec>().is_err());
    }

    #[test]
    fn left_lane_starts_at_zero() {
        let lane = StripeLane::new(Direction::Left, 1000.0, 1200.0, 0.5).unwrap();
        assert_eq!(lane.position(), 0.0);
        assert_eq!(lane.velocity(), -0.5);
    }

    #[test]
    fn right_lane_anchors_to_wrapper_edge() {
        let lane = StripeLane::new(Direction::Right, 800.0, 1200.0, 0.5).unwrap();
        assert_eq!(lane.anchor(), 400.0);
        assert_eq!(lane.velocity(), 0.5);
    }

    #[test]
    fn rejects_empty_content() {
        assert!(StripeLane::new(Direction::Left, 0.0, 1200.0, 0.5).is_err());
        assert!(StripeLane::new(Direction::Left, f64::NAN, 1200.0, 0.5).is_err());
    }

    #[test]
    fn left_lane_hard_resets_at_full_length() {
        let mut lane = StripeLane::new(Direction::Left, 1000.0, 1200.0, 0.5).unwrap();
        for _ in 0..1999 {
            lane.step(0.5, 0.05);
        }
        assert_eq!(lane.position(), -999.5);
        // Reaching -1000 snaps straight back to the anchor.
        lane.step(0.5, 0.05);
        assert_eq!(lane.position(), 0.0);
        lane.step(0.5, 0.05);
        assert_eq!(lane.position(), -0.5);
    }

    #[test]
    fn right_lane_resets_past_anchor_plus_length() {
        let mut lane = StripeLane::new(Direction::Right, 10.0, 100.0, 1.0).unwrap();
        for _ in 0..9 {
            lane.step(1.0, 0.05);
        }
        assert_eq!(lane.position(), 99.0);
        lane.step(1.0, 0.05);
        assert_eq!(lane.position(), 90.0);
    }

    #[test]
    fn velocity_eases_toward_target() {
        let mut lane = StripeLane::new(Direction::Left, 1000.0, 1200.0, 0.5).unwrap();
        lane.step(0.0, 0.05);
        // -0.5 + (0 - -0.5) × 0.05 = -0.475
        assert!((lane.velocity() + 0.475).abs() < 1e-12);
    }
}
