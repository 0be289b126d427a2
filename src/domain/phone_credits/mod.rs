//! Phone credit packs.
//!
//! Four discrete packs sold alongside the seat plans. A free-range slider
//! value snaps to the nearest pack; the stepped 1-4 slider maps positions
//! directly.
//!
//! | Pack | Credits | EUR | Handle | Fill |
//! |------|---------|-----|--------|------|
//! | 1 | 100 | 47 | 0% | 0% |
//! | 2 | 200 | 90 | 33.33% | 34% |
//! | 3 | 350 | 150 | 66.66% | 68% |
//! | 4 | 600 | 252 | 100% | 100% |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::Currency;
use crate::domain::foundation::{round_to_unit, whole_units};

/// One purchasable pack of phone credits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneCreditTier {
    pub credits: u32,
    pub price_eur: Decimal,
    /// 1-based position on the stepped slider.
    pub position: u8,
    /// Handle offset along the track, in percent.
    pub handle_percent: Decimal,
    /// Filled track width, in percent.
    pub fill_percent: Decimal,
}

/// All packs in slider order.
pub const TIERS: [PhoneCreditTier; 4] = [
    PhoneCreditTier {
        credits: 100,
        price_eur: dec!(47),
        position: 1,
        handle_percent: dec!(0),
        fill_percent: dec!(0),
    },
    PhoneCreditTier {
        credits: 200,
        price_eur: dec!(90),
        position: 2,
        handle_percent: dec!(33.33),
        fill_percent: dec!(34),
    },
    PhoneCreditTier {
        credits: 350,
        price_eur: dec!(150),
        position: 3,
        handle_percent: dec!(66.66),
        fill_percent: dec!(68),
    },
    PhoneCreditTier {
        credits: 600,
        price_eur: dec!(252),
        position: 4,
        handle_percent: dec!(100),
        fill_percent: dec!(100),
    },
];

/// Converted price and slider geometry for one pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneCreditQuote {
    pub credits: u32,
    pub price: u32,
    pub formatted_price: String,
    pub position: u8,
    pub handle_percent: Decimal,
    pub fill_percent: Decimal,
}

impl PhoneCreditTier {
    /// Snaps a raw slider value to a pack.
    ///
    /// Boundaries: below 150 gives 100, below 275 gives 200, below 475
    /// gives 350, anything else 600.
    pub fn snap(raw: i64) -> &'static PhoneCreditTier {
        let index = match raw {
            r if r < 150 => 0,
            r if r < 275 => 1,
            r if r < 475 => 2,
            _ => 3,
        };
        &TIERS[index]
    }

    /// Pack for a stepped slider position, clamped to 1-4.
    pub fn for_position(position: i64) -> &'static PhoneCreditTier {
        let index = position.clamp(1, TIERS.len() as i64) - 1;
        &TIERS[index as usize]
    }

    /// Prices the pack in `currency`.
    pub fn quote(&self, currency: &Currency) -> PhoneCreditQuote {
        let price = whole_units(round_to_unit(self.price_eur * currency.exchange_rate_from_eur));
        PhoneCreditQuote {
            credits: self.credits,
            price,
            formatted_price: currency.format_amount(price),
            position: self.position,
            handle_percent: self.handle_percent,
            fill_percent: self.fill_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{CurrencyCode, PricingCatalog};

    #[test]
    fn snap_275_selects_350_credit_pack() {
        let tier = PhoneCreditTier::snap(275);
        assert_eq!(tier.credits, 350);
        assert_eq!(tier.price_eur, dec!(150));
    }

    #[test]
    fn snap_boundaries() {
        assert_eq!(PhoneCreditTier::snap(-20).credits, 100);
        assert_eq!(PhoneCreditTier::snap(149).credits, 100);
        assert_eq!(PhoneCreditTier::snap(150).credits, 200);
        assert_eq!(PhoneCreditTier::snap(274).credits, 200);
        assert_eq!(PhoneCreditTier::snap(474).credits, 350);
        assert_eq!(PhoneCreditTier::snap(475).credits, 600);
        assert_eq!(PhoneCreditTier::snap(10_000).credits, 600);
    }

    #[test]
    fn positions_map_and_clamp() {
        assert_eq!(PhoneCreditTier::for_position(1).credits, 100);
        assert_eq!(PhoneCreditTier::for_position(3).credits, 350);
        assert_eq!(PhoneCreditTier::for_position(0).credits, 100);
        assert_eq!(PhoneCreditTier::for_position(9).credits, 600);
    }

    #[test]
    fn quote_converts_price() {
        let catalog = PricingCatalog::standard(false);
        let quote = PhoneCreditTier::snap(275).quote(catalog.currency(CurrencyCode::USD));
        // 150 × 1.08 = 162
        assert_eq!(quote.price, 162);
        assert_eq!(quote.formatted_price, "$162");
        assert_eq!(quote.handle_percent, dec!(66.66));
        assert_eq!(quote.fill_percent, dec!(68));

        let eur = PhoneCreditTier::for_position(4).quote(catalog.currency(CurrencyCode::EUR));
        assert_eq!(eur.formatted_price, "252€");
    }

    #[test]
    fn tier_positions_are_sequential() {
        for (i, tier) in TIERS.iter().enumerate() {
            assert_eq!(usize::from(tier.position), i + 1);
        }
    }
}
