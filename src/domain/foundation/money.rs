//! Whole-unit rounding for displayed amounts.
//!
//! Every rounding point in the pricing pipeline rounds half-up to the nearest
//! whole currency unit. Intermediate values are never carried at fractional
//! precision across steps.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to the nearest whole unit, midpoints away from zero.
pub fn round_to_unit(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds and converts to a whole amount.
///
/// Negative values saturate at zero; displayed amounts are never negative.
pub fn whole_units(value: Decimal) -> u32 {
    if value.is_sign_negative() {
        return 0;
    }
    round_to_unit(value).to_u32().unwrap_or(u32::MAX)
}
