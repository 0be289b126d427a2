//! Plan placeholder resolution.
//!
//! The pricing card shows one clickable placeholder per slider stop.
//! Clicking one must move the slider there, so the click is resolved to a
//! slider position first.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{MAX_SLIDER_POSITION, MIN_SLIDER_POSITION};

/// What is known about a clicked placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlaceholderHint {
    /// Position stated on the element itself, if any.
    pub explicit_position: Option<i64>,
    /// Position taken from an `is-N` class marker.
    pub class_position: Option<i64>,
    /// Zero-based index among sibling placeholders.
    pub index: usize,
}

impl PlaceholderHint {
    pub fn at_index(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    /// Builds a hint from a whitespace-separated class list.
    pub fn from_classes(classes: &str, index: usize) -> Self {
        let class_position = classes
            .split_whitespace()
            .filter_map(|class| class.strip_prefix("is-"))
            .find_map(|n| n.parse::<i64>().ok());
        Self {
            explicit_position: None,
            class_position,
            index,
        }
    }

    pub fn with_explicit_position(mut self, position: i64) -> Self {
        self.explicit_position = Some(position);
        self
    }

    /// Resolves to a slider position in `[MIN_SLIDER_POSITION, max]`.
    ///
    /// An in-range explicit position wins, then an in-range class marker,
    /// then the sibling index (1-based, clamped).
    pub fn resolve(&self, max: i64) -> i64 {
        let max = max.max(MIN_SLIDER_POSITION);
        let in_range = |p: &i64| (MIN_SLIDER_POSITION..=max).contains(p);

        self.explicit_position
            .filter(in_range)
            .or_else(|| self.class_position.filter(in_range))
            .unwrap_or_else(|| {
                let from_index = i64::try_from(self.index).unwrap_or(i64::MAX).saturating_add(1);
                from_index.clamp(MIN_SLIDER_POSITION, max)
            })
    }

    /// Resolves against the plan slider.
    pub fn resolve_plan_position(&self) -> i64 {
        self.resolve(MAX_SLIDER_POSITION)
    }
}
