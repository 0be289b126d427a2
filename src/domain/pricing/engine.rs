//! Pricing engine.
//!
//! Pure function from the current selection and the catalog to a
//! [`PricingResult`]. Rounding happens to whole currency units at each
//! step, half away from zero:
//!
//! ```text
//! base       = price_per_user_eur × users
//! discounted = round(base × period_multiplier)
//! displayed  = round(discounted × exchange_rate)
//! original   = round(base × exchange_rate)
//! ```
//!
//! An active promotional override on annual billing replaces the last
//! three lines with `displayed = round(override × users)`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PlanFeatures, PricingResult, PricingState};
use crate::domain::catalog::{BillingPeriod, Plan, PricingCatalog};
use crate::domain::foundation::{round_to_unit, whole_units};

/// Static switches that shape the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Scale the mailbox allotment with the user count; otherwise always 1.
    pub dynamic_mailbox_count: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            dynamic_mailbox_count: true,
        }
    }
}

/// Computes pricing results.
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingEngine {
    options: EngineOptions,
}

/// Intermediate price figures before they are assembled into a result.
struct PriceBreakdown {
    displayed: Decimal,
    original: Decimal,
    has_discount: bool,
    discount_percent: u32,
    promotional: bool,
}

impl PricingEngine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Derives the full result for `state`.
    ///
    /// Total and deterministic: the same state and catalog always produce
    /// an identical result.
    pub fn calculate(&self, state: &PricingState, catalog: &PricingCatalog) -> PricingResult {
        let plan = catalog.plan(state.plan());
        let currency = catalog.currency(state.currency());
        let period = state.billing_period();
        let users = state.active_users().value();

        let base = plan.monthly_price_per_user_eur * Decimal::from(users);
        let rate = currency.exchange_rate_from_eur;

        let promotion = if period == BillingPeriod::Annual {
            catalog.promotional_override(plan.id, currency.code)
        } else {
            None
        };

        let breakdown = match promotion {
            Some(price) => {
                let displayed = round_to_unit(price * Decimal::from(users));
                let original = round_to_unit(base * rate);
                PriceBreakdown {
                    displayed,
                    original,
                    has_discount: true,
                    discount_percent: promotional_discount_percent(displayed, original),
                    promotional: true,
                }
            }
            None => {
                let multiplier = catalog.period_multiplier(period);
                let discounted = round_to_unit(base * multiplier);
                PriceBreakdown {
                    displayed: round_to_unit(discounted * rate),
                    original: round_to_unit(base * rate),
                    has_discount: multiplier != Decimal::ONE,
                    discount_percent: whole_units(round_to_unit(
                        (Decimal::ONE - multiplier) * Decimal::ONE_HUNDRED,
                    )),
                    promotional: false,
                }
            }
        };

        let displayed_price = whole_units(breakdown.displayed);
        let result = PricingResult {
            plan_id: plan.id,
            plan_name: plan.name.clone(),
            billing_period: period,
            currency: currency.code,
            currency_symbol: currency.symbol.clone(),
            symbol_position: currency.symbol_position,
            displayed_price,
            original_price: breakdown
                .has_discount
                .then(|| whole_units(breakdown.original)),
            has_discount: breakdown.has_discount,
            discount_percent: breakdown.discount_percent,
            promotional: breakdown.promotional,
            period_total: displayed_price.saturating_mul(period.months()),
            users,
            features: self.features(plan, users),
        };

        tracing::trace!(
            plan = %result.plan_id,
            period = %result.billing_period,
            currency = %result.currency,
            users,
            displayed = result.displayed_price,
            "Price calculated"
        );

        result
    }

    fn features(&self, plan: &Plan, users: u32) -> PlanFeatures {
        PlanFeatures {
            ai_credits: plan.ai_credits.saturating_mul(users),
            mailboxes: if self.options.dynamic_mailbox_count {
                plan.mailboxes.saturating_mul(users)
            } else {
                1
            },
            email_enrichments: plan.email_enrichments.saturating_mul(users),
            contact_recommendations: plan.contact_recommendations.saturating_mul(users),
            linkedin_accounts: plan.linkedin_accounts,
            custom_contacts: plan.custom_contacts,
            analyzable_contacts: plan.analyzable_contacts.clone(),
        }
    }
}

fn promotional_discount_percent(displayed: Decimal, original: Decimal) -> u32 {
    if original <= Decimal::ZERO {
        return 0;
    }
    whole_units(round_to_unit(
        (Decimal::ONE - displayed / original) * Decimal::ONE_HUNDRED,
    ))
}
