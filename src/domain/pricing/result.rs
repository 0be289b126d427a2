//! Derived pricing result.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{format_amount, BillingPeriod, CurrencyCode, PlanId, SymbolPosition};

/// Everything the presentation layer needs for one selection.
///
/// Recomputed on every state change and never stored. All amounts are
/// whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    pub plan_id: PlanId,
    pub plan_name: String,
    pub billing_period: BillingPeriod,
    pub currency: CurrencyCode,
    pub currency_symbol: String,
    pub symbol_position: SymbolPosition,

    /// Monthly price after discount and conversion.
    pub displayed_price: u32,
    /// Pre-discount price, present only when a discount applies.
    pub original_price: Option<u32>,
    pub has_discount: bool,
    pub discount_percent: u32,
    /// True when a promotional override set the price.
    pub promotional: bool,
    /// Displayed price times the months in the billing period.
    pub period_total: u32,

    pub users: u32,
    pub features: PlanFeatures,
}

/// Feature quantities for the selected plan and user count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanFeatures {
    pub ai_credits: u32,
    pub mailboxes: u32,
    pub email_enrichments: u32,
    pub contact_recommendations: u32,
    pub linkedin_accounts: u32,
    pub custom_contacts: u32,
    pub analyzable_contacts: String,
}

impl PricingResult {
    /// Displayed price with the currency symbol, e.g. `$119`.
    pub fn formatted_price(&self) -> String {
        self.format(self.displayed_price)
    }

    /// Strikethrough price, if any.
    pub fn formatted_original_price(&self) -> Option<String> {
        self.original_price.map(|amount| self.format(amount))
    }

    pub fn formatted_period_total(&self) -> String {
        self.format(self.period_total)
    }

    fn format(&self, amount: u32) -> String {
        format_amount(amount, &self.currency_symbol, self.symbol_position)
    }
}
