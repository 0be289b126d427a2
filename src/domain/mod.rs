//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (errors, session ids, whole-unit rounding)
//! - `catalog` - Plans, currencies, billing periods and promotional overrides
//! - `pricing` - Selection state and the pure pricing engine
//! - `phone_credits` - Discrete phone-credit packs
//! - `stripe` - Auto-scrolling logo stripe animation

pub mod catalog;
pub mod foundation;
pub mod phone_credits;
pub mod pricing;
pub mod stripe;
