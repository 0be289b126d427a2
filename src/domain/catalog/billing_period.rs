//! Billing period definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// How often the customer is billed.
///
/// Longer commitments earn a discount on the monthly price; see
/// [`PricingCatalog::period_multiplier`](super::PricingCatalog::period_multiplier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Quarterly,
    Annual,
}

impl BillingPeriod {
    /// All billing periods in tab order.
    pub const ALL: [BillingPeriod; 3] = [
        BillingPeriod::Monthly,
        BillingPeriod::Quarterly,
        BillingPeriod::Annual,
    ];

    /// Number of months billed at once.
    pub fn months(&self) -> u32 {
        match self {
            BillingPeriod::Monthly => 1,
            BillingPeriod::Quarterly => 3,
            BillingPeriod::Annual => 12,
        }
    }

    /// Zero-based index, used for per-period storage.
    pub fn index(&self) -> usize {
        match self {
            BillingPeriod::Monthly => 0,
            BillingPeriod::Quarterly => 1,
            BillingPeriod::Annual => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "monthly",
            BillingPeriod::Quarterly => "quarterly",
            BillingPeriod::Annual => "annual",
        }
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BillingPeriod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(BillingPeriod::Monthly),
            "quarterly" => Ok(BillingPeriod::Quarterly),
            "annual" | "annually" | "yearly" => Ok(BillingPeriod::Annual),
            _ => Err(ValidationError::invalid_format(
                "billing_period",
                format!("unknown period '{}'", s),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_monthly() {
        assert_eq!(BillingPeriod::default(), BillingPeriod::Monthly);
    }

    #[test]
    fn months_per_period() {
        assert_eq!(BillingPeriod::Monthly.months(), 1);
        assert_eq!(BillingPeriod::Quarterly.months(), 3);
        assert_eq!(BillingPeriod::Annual.months(), 12);
    }

    #[test]
    fn parses_tab_attribute_values() {
        assert_eq!("monthly".parse::<BillingPeriod>().unwrap(), BillingPeriod::Monthly);
        assert_eq!("Quarterly".parse::<BillingPeriod>().unwrap(), BillingPeriod::Quarterly);
        assert_eq!("annual".parse::<BillingPeriod>().unwrap(), BillingPeriod::Annual);
        assert!("weekly".parse::<BillingPeriod>().is_err());
    }

    #[test]
    fn period_serializes_lowercase() {
        let json = serde_json::to_string(&BillingPeriod::Quarterly).unwrap();
        assert_eq!(json, "\"quarterly\"");
    }

    #[test]
    fn indices_are_distinct() {
        let mut seen: Vec<usize> = BillingPeriod::ALL.iter().map(|p| p.index()).collect();
        seen.dedup();
        assert_eq!(seen, vec![0, 1, 2]);
    }
}
