//! Plan definitions.
//!
//! A plan is a named Pro tier with a per-user monthly price and the feature
//! allotments granted to each seat.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Lowest slider position.
pub const MIN_SLIDER_POSITION: i64 = 1;

/// Highest slider position. Position 4 aliases to Pro 3.
pub const MAX_SLIDER_POSITION: i64 = 4;

/// Pro plan identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanId {
    Pro1,
    Pro2,
    Pro3,
}

impl PlanId {
    /// All plans in slider order.
    pub const ALL: [PlanId; 3] = [PlanId::Pro1, PlanId::Pro2, PlanId::Pro3];

    /// Maps a raw slider position to a plan.
    ///
    /// Positions are clamped to `1..=4` first; position 4 is the trailing
    /// slider stop and resolves to Pro 3.
    pub fn from_slider_position(position: i64) -> Self {
        match position.clamp(MIN_SLIDER_POSITION, MAX_SLIDER_POSITION) {
            1 => PlanId::Pro1,
            2 => PlanId::Pro2,
            _ => PlanId::Pro3,
        }
    }

    /// Returns the slider position this plan sits on.
    pub fn slider_position(&self) -> i64 {
        self.index() as i64 + 1
    }

    /// Zero-based table index.
    pub fn index(&self) -> usize {
        match self {
            PlanId::Pro1 => 0,
            PlanId::Pro2 => 1,
            PlanId::Pro3 => 2,
        }
    }

    /// Returns the machine code used in configuration and logs.
    pub fn code(&self) -> &'static str {
        match self {
            PlanId::Pro1 => "pro1",
            PlanId::Pro2 => "pro2",
            PlanId::Pro3 => "pro3",
        }
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for PlanId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "pro1" => Ok(PlanId::Pro1),
            "pro2" => Ok(PlanId::Pro2),
            "pro3" => Ok(PlanId::Pro3),
            _ => Err(ValidationError::invalid_format(
                "plan",
                format!("unknown plan '{}'", s),
            )),
        }
    }
}

/// A Pro plan and its per-seat allotments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: PlanId,
    /// Display name, e.g. "Pro 1".
    pub name: String,
    /// Monthly list price per user, in EUR.
    pub monthly_price_per_user_eur: Decimal,
    /// AI credits per user per month.
    pub ai_credits: u32,
    /// Mailboxes per user.
    pub mailboxes: u32,
    /// LinkedIn accounts (not scaled by users).
    pub linkedin_accounts: u32,
    /// Email enrichments per user per month.
    pub email_enrichments: u32,
    /// Contact recommendations per user per month.
    pub contact_recommendations: u32,
    /// Custom contacts cap (not scaled by users).
    pub custom_contacts: u32,
    /// Qualitative band of analyzable contacts, carried as a label.
    pub analyzable_contacts: String,
}

impl Plan {
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("plan.name"));
        }
        if self.monthly_price_per_user_eur.is_sign_negative() {
            return Err(ValidationError::invalid_format(
                "plan.monthly_price_per_user_eur",
                format!("price for {} must not be negative", self.id),
            ));
        }
        Ok(())
    }
}
