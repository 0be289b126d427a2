//! YAML catalog documents.
//!
//! A deployment may replace the built-in tables with a catalog file. The
//! document is plain data; [`PricingCatalog::from_document`] validates it.
//!
//! [`PricingCatalog::from_document`]: super::PricingCatalog::from_document

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{CatalogError, Currency, CurrencyCode, Plan, PlanId};

/// Discount multipliers applied to the monthly price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodDiscounts {
    pub quarterly: Decimal,
    pub annual: Decimal,
}

/// Fixed annual-billing price for one plan in one currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionalOverride {
    pub plan: PlanId,
    pub currency: CurrencyCode,
    /// Per-user monthly price, already in `currency`.
    pub monthly_price_per_user: Decimal,
}

/// Serialized form of a pricing catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub plans: Vec<Plan>,
    pub currencies: Vec<Currency>,
    pub discounts: PeriodDiscounts,
    #[serde(default)]
    pub promotional_overrides: Vec<PromotionalOverride>,
}

impl CatalogDocument {
    /// Parses a catalog document from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse(e.to_string()))
    }

    /// Reads and parses a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Serializes the document back to YAML.
    pub fn to_yaml(&self) -> Result<String, CatalogError> {
        serde_yaml::to_string(self).map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const MINIMAL: &str = r#"
plans:
  - id: pro1
    name: Pro 1
    monthly_price_per_user_eur: 69
    ai_credits: 200
    mailboxes: 2
    linkedin_accounts: 1
    email_enrichments: 200
    contact_recommendations: 800
    custom_contacts: 200
    analyzable_contacts: "200"
currencies:
  - code: USD
    symbol: "$"
    label: "$ USD"
    exchange_rate_from_eur: "1.08"
    symbol_position: before
discounts:
  quarterly: "0.9"
  annual: "0.8"
promotional_overrides:
  - plan: pro1
    currency: USD
    monthly_price_per_user: 45
"#;

    #[test]
    fn parses_yaml_document() {
        let doc = CatalogDocument::from_yaml_str(MINIMAL).unwrap();
        assert_eq!(doc.plans.len(), 1);
        assert_eq!(doc.plans[0].monthly_price_per_user_eur, dec!(69));
        assert_eq!(doc.currencies[0].exchange_rate_from_eur, dec!(1.08));
        assert_eq!(doc.discounts.annual, dec!(0.8));
        assert_eq!(doc.promotional_overrides[0].monthly_price_per_user, dec!(45));
    }

    #[test]
    fn overrides_default_to_empty() {
        let yaml = MINIMAL.split("promotional_overrides:").next().unwrap();
        let doc = CatalogDocument::from_yaml_str(yaml).unwrap();
        assert!(doc.promotional_overrides.is_empty());
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = CatalogDocument::from_yaml_str("plans: [").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = CatalogDocument::from_path("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
