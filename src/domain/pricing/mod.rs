//! Pricing selections and price derivation.
//!
//! # Module Structure
//!
//! - `user_count` - UserCount (1-10) and per-period memory
//! - `state` - PricingState and its setters
//! - `engine` - PricingEngine, the pure derivation
//! - `result` - PricingResult and feature quantities
//! - `display` - localized labels
//! - `errors` - PricingError

mod display;
mod engine;
mod errors;
mod result;
mod state;
mod user_count;

pub use display::{
    billed_label, credits_label, discount_badge, per_month_label, user_label, Locale,
    PricingView,
};
pub use engine::{EngineOptions, PricingEngine};
pub use errors::PricingError;
pub use result::{PlanFeatures, PricingResult};
pub use state::PricingState;
pub use user_count::{UserCount, UsersPerPeriod};
