//! Raw UI signals.
//!
//! Whatever the page reports, before any validation. The session turns
//! these into state changes or drops them.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::BillingPeriod;

/// A change reported by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "signal", rename_all = "snake_case")]
pub enum PricingSignal {
    /// Plan slider handle moved to a raw position.
    SliderMoved { position: i64 },
    /// A plan chosen by code, e.g. "pro2".
    PlanChosen { code: String },
    /// User dropdown item picked; `period` defaults to the active tab.
    UsersSelected {
        value: i64,
        #[serde(default)]
        period: Option<BillingPeriod>,
    },
    /// Billing period tab activated.
    PeriodSelected { period: String },
    /// Currency selector changed; carries the option label or code.
    CurrencySelected { label: String },
    /// Re-render the current selection unchanged.
    Refresh,
}

impl PricingSignal {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            PricingSignal::SliderMoved { .. } => "slider_moved",
            PricingSignal::PlanChosen { .. } => "plan_chosen",
            PricingSignal::UsersSelected { .. } => "users_selected",
            PricingSignal::PeriodSelected { .. } => "period_selected",
            PricingSignal::CurrencySelected { .. } => "currency_selected",
            PricingSignal::Refresh => "refresh",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_tagged_json() {
        let signal: PricingSignal =
            serde_json::from_str(r#"{"signal":"users_selected","value":3}"#).unwrap();
        assert_eq!(
            signal,
            PricingSignal::UsersSelected {
                value: 3,
                period: None
            }
        );
        assert_eq!(signal.kind(), "users_selected");
    }

    #[test]
    fn deserializes_period_override() {
        let signal: PricingSignal = serde_json::from_str(
            r#"{"signal":"users_selected","value":2,"period":"annual"}"#,
        )
        .unwrap();
        assert!(matches!(
            signal,
            PricingSignal::UsersSelected {
                period: Some(BillingPeriod::Annual),
                ..
            }
        ));
    }
}
