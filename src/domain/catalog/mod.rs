//! Pricing catalog.
//!
//! Read-only lookup tables for plans, currencies, billing-period discounts
//! and promotional overrides.
//!
//! # Module Structure
//!
//! - `plan` - PlanId and per-seat allotments
//! - `currency` - CurrencyCode, exchange rates, symbol placement
//! - `billing_period` - BillingPeriod and billing length
//! - `document` - YAML catalog documents
//!
//! # Standard Tables
//!
//! | Plan | EUR / user / month | AI credits | Mailboxes | Enrichments | Recommendations |
//! |------|--------------------|------------|-----------|-------------|-----------------|
//! | Pro 1 | 69 | 200 | 2 | 200 | 800 |
//! | Pro 2 | 99 | 350 | 3 | 350 | 1400 |
//! | Pro 3 | 149 | 600 | 4 | 600 | 2400 |
//!
//! | Currency | Rate from EUR | Symbol |
//! |----------|---------------|--------|
//! | EUR | 1 | `110€` |
//! | USD | 1.08 | `$119` |
//! | GBP | 0.85 | `£94` |

mod billing_period;
mod currency;
mod document;
mod plan;

pub use billing_period::BillingPeriod;
pub use currency::{format_amount, Currency, CurrencyCode, SymbolPosition};
pub use document::{CatalogDocument, PeriodDiscounts, PromotionalOverride};
pub use plan::{Plan, PlanId, MAX_SLIDER_POSITION, MIN_SLIDER_POSITION};

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised while building a catalog.
///
/// All of these are configuration errors and are fatal at start-up.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog has no entry for plan {0}")]
    MissingPlan(PlanId),

    #[error("Catalog defines plan {0} more than once")]
    DuplicatePlan(PlanId),

    #[error("Catalog has no entry for currency {0}")]
    MissingCurrency(CurrencyCode),

    #[error("Catalog defines currency {0} more than once")]
    DuplicateCurrency(CurrencyCode),

    #[error("Discount multiplier for {period} must be in (0, 1], got {value}")]
    InvalidMultiplier {
        period: BillingPeriod,
        value: Decimal,
    },

    #[error("Promotional price for {plan}/{currency} must not be negative")]
    InvalidOverride {
        plan: PlanId,
        currency: CurrencyCode,
    },

    #[error("Invalid catalog entry: {0}")]
    InvalidEntry(#[from] ValidationError),

    #[error("Plan not found: {0}")]
    PlanNotFound(String),

    #[error("Failed to read catalog file {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse catalog document: {0}")]
    Parse(String),
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        let code = match err {
            CatalogError::PlanNotFound(_) => ErrorCode::PlanNotFound,
            _ => ErrorCode::CatalogInvalid,
        };
        DomainError::new(code, err.to_string())
    }
}

static STANDARD_DOCUMENT: Lazy<CatalogDocument> = Lazy::new(|| CatalogDocument {
    plans: vec![
        standard_plan(PlanId::Pro1, "Pro 1", dec!(69), 200, 2, 800, "200"),
        standard_plan(PlanId::Pro2, "Pro 2", dec!(99), 350, 3, 1400, "300"),
        standard_plan(PlanId::Pro3, "Pro 3", dec!(149), 600, 4, 2400, "500"),
    ],
    currencies: vec![
        Currency {
            code: CurrencyCode::EUR,
            symbol: "€".to_string(),
            label: "€ EUR".to_string(),
            exchange_rate_from_eur: dec!(1),
            symbol_position: SymbolPosition::After,
        },
        Currency {
            code: CurrencyCode::USD,
            symbol: "$".to_string(),
            label: "$ USD".to_string(),
            exchange_rate_from_eur: dec!(1.08),
            symbol_position: SymbolPosition::Before,
        },
        Currency {
            code: CurrencyCode::GBP,
            symbol: "£".to_string(),
            label: "Pound (£)".to_string(),
            exchange_rate_from_eur: dec!(0.85),
            symbol_position: SymbolPosition::Before,
        },
    ],
    discounts: PeriodDiscounts {
        quarterly: dec!(0.9),
        annual: dec!(0.8),
    },
    promotional_overrides: Vec::new(),
});

// Credits and enrichments share the same per-seat figure in every tier.
fn standard_plan(
    id: PlanId,
    name: &str,
    price: Decimal,
    credits: u32,
    mailboxes: u32,
    recommendations: u32,
    analyzable: &str,
) -> Plan {
    Plan {
        id,
        name: name.to_string(),
        monthly_price_per_user_eur: price,
        ai_credits: credits,
        mailboxes,
        linkedin_accounts: 1,
        email_enrichments: credits,
        contact_recommendations: recommendations,
        custom_contacts: 200,
        analyzable_contacts: analyzable.to_string(),
    }
}

/// Immutable pricing tables.
///
/// Built once at start-up and shared (usually behind an `Arc`) by every
/// session. Lookups by typed id never fail; completeness is checked at
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingCatalog {
    plans: [Plan; 3],
    currencies: [Currency; 3],
    discounts: PeriodDiscounts,
    overrides: HashMap<(PlanId, CurrencyCode), Decimal>,
    promotion_enabled: bool,
}

impl PricingCatalog {
    /// Builds the catalog from the built-in tables.
    pub fn standard(promotion_enabled: bool) -> Self {
        let doc = &*STANDARD_DOCUMENT;
        Self {
            plans: [doc.plans[0].clone(), doc.plans[1].clone(), doc.plans[2].clone()],
            currencies: [
                doc.currencies[0].clone(),
                doc.currencies[1].clone(),
                doc.currencies[2].clone(),
            ],
            discounts: doc.discounts,
            overrides: HashMap::new(),
            promotion_enabled,
        }
    }

    /// Returns the built-in tables as a document, e.g. to seed a catalog file.
    pub fn standard_document() -> CatalogDocument {
        STANDARD_DOCUMENT.clone()
    }

    /// Builds and validates a catalog from a document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if any plan or currency is missing or
    /// duplicated, a multiplier is outside `(0, 1]`, or an entry holds a
    /// negative price or non-positive exchange rate.
    pub fn from_document(
        doc: CatalogDocument,
        promotion_enabled: bool,
    ) -> Result<Self, CatalogError> {
        let mut plan_slots: [Option<Plan>; 3] = [None, None, None];
        for plan in doc.plans {
            plan.validate()?;
            let slot = &mut plan_slots[plan.id.index()];
            if slot.is_some() {
                return Err(CatalogError::DuplicatePlan(plan.id));
            }
            *slot = Some(plan);
        }
        let [p1, p2, p3] = plan_slots;
        let plans = [
            p1.ok_or(CatalogError::MissingPlan(PlanId::Pro1))?,
            p2.ok_or(CatalogError::MissingPlan(PlanId::Pro2))?,
            p3.ok_or(CatalogError::MissingPlan(PlanId::Pro3))?,
        ];

        let mut currency_slots: [Option<Currency>; 3] = [None, None, None];
        for currency in doc.currencies {
            currency.validate()?;
            let slot = &mut currency_slots[currency.code.index()];
            if slot.is_some() {
                return Err(CatalogError::DuplicateCurrency(currency.code));
            }
            *slot = Some(currency);
        }
        let [eur, usd, gbp] = currency_slots;
        let currencies = [
            eur.ok_or(CatalogError::MissingCurrency(CurrencyCode::EUR))?,
            usd.ok_or(CatalogError::MissingCurrency(CurrencyCode::USD))?,
            gbp.ok_or(CatalogError::MissingCurrency(CurrencyCode::GBP))?,
        ];

        for (period, value) in [
            (BillingPeriod::Quarterly, doc.discounts.quarterly),
            (BillingPeriod::Annual, doc.discounts.annual),
        ] {
            if value <= Decimal::ZERO || value > Decimal::ONE {
                return Err(CatalogError::InvalidMultiplier { period, value });
            }
        }

        let mut overrides = HashMap::new();
        for entry in doc.promotional_overrides {
            if entry.monthly_price_per_user.is_sign_negative() {
                return Err(CatalogError::InvalidOverride {
                    plan: entry.plan,
                    currency: entry.currency,
                });
            }
            overrides.insert((entry.plan, entry.currency), entry.monthly_price_per_user);
        }

        Ok(Self {
            plans,
            currencies,
            discounts: doc.discounts,
            overrides,
            promotion_enabled,
        })
    }

    /// Returns the plan for a typed id.
    pub fn plan(&self, id: PlanId) -> &Plan {
        &self.plans[id.index()]
    }

    /// Looks up a plan by its external code (e.g. "pro2").
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::PlanNotFound` for codes outside the
    /// enumerated plan set.
    pub fn plan_by_code(&self, code: &str) -> Result<&Plan, CatalogError> {
        code.parse::<PlanId>()
            .map(|id| self.plan(id))
            .map_err(|_| CatalogError::PlanNotFound(code.to_string()))
    }

    /// All plans in slider order.
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// Returns the currency for a code.
    pub fn currency(&self, code: CurrencyCode) -> &Currency {
        &self.currencies[code.index()]
    }

    /// Resolves a currency selector option, exact label first.
    pub fn currency_by_label(&self, label: &str) -> Option<CurrencyCode> {
        self.currencies
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.code)
            .or_else(|| CurrencyCode::from_selector_label(label))
    }

    /// Multiplier applied to the monthly price for a billing period.
    pub fn period_multiplier(&self, period: BillingPeriod) -> Decimal {
        match period {
            BillingPeriod::Monthly => Decimal::ONE,
            BillingPeriod::Quarterly => self.discounts.quarterly,
            BillingPeriod::Annual => self.discounts.annual,
        }
    }

    /// Fixed per-user monthly price replacing the annual discount, if the
    /// promotion is switched on and defines one for this plan and currency.
    pub fn promotional_override(&self, plan: PlanId, currency: CurrencyCode) -> Option<Decimal> {
        if !self.promotion_enabled {
            return None;
        }
        self.overrides.get(&(plan, currency)).copied()
    }

    /// Whether the promotion switch is on.
    pub fn promotion_enabled(&self) -> bool {
        self.promotion_enabled
    }

    /// Number of overrides defined, whether or not the promotion is on.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

impl Default for PricingCatalog {
    fn default() -> Self {
        Self::standard(false)
    }
}
