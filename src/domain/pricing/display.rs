//! Text projections of a pricing result.
//!
//! Labels exist in French and English. The locale comes from
//! configuration; nothing here inspects the page.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::PricingResult;
use crate::domain::catalog::BillingPeriod;
use crate::domain::foundation::ValidationError;

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            "fr" | "fr-fr" => Ok(Locale::Fr),
            other => Err(ValidationError::invalid_format(
                "locale",
                format!("unsupported locale '{}'", other),
            )),
        }
    }
}

/// "Up to 3 users" / "Jusqu'à 3 utilisateurs".
pub fn user_label(users: u32, locale: Locale) -> String {
    match (locale, users > 1) {
        (Locale::En, false) => format!("Up to {} user", users),
        (Locale::En, true) => format!("Up to {} users", users),
        (Locale::Fr, false) => format!("Jusqu'à {} utilisateur", users),
        (Locale::Fr, true) => format!("Jusqu'à {} utilisateurs", users),
    }
}

/// "/ month for 2 users" / "/ mois pour 2 utilisateurs".
pub fn per_month_label(users: u32, locale: Locale) -> String {
    match (locale, users > 1) {
        (Locale::En, false) => format!("/ month for {} user", users),
        (Locale::En, true) => format!("/ month for {} users", users),
        (Locale::Fr, false) => format!("/ mois pour {} utilisateur", users),
        (Locale::Fr, true) => format!("/ mois pour {} utilisateurs", users),
    }
}

/// "1428€ billed annually (excl. VAT)", or the quarterly equivalent.
///
/// Monthly billing has no billed-period line.
pub fn billed_label(amount: &str, period: BillingPeriod, locale: Locale) -> Option<String> {
    let label = match (period, locale) {
        (BillingPeriod::Monthly, _) => return None,
        (BillingPeriod::Quarterly, Locale::En) => {
            format!("{} billed quarterly (excl. VAT)", amount)
        }
        (BillingPeriod::Quarterly, Locale::Fr) => {
            format!("{} facturé trimestriellement (HT)", amount)
        }
        (BillingPeriod::Annual, Locale::En) => format!("{} billed annually (excl. VAT)", amount),
        (BillingPeriod::Annual, Locale::Fr) => format!("{} facturé annuellement (HT)", amount),
    };
    Some(label)
}

/// "400 AI credits per month" / "400 crédits IA par mois".
pub fn credits_label(credits: u32, locale: Locale) -> String {
    match locale {
        Locale::En => format!("{} AI credits per month", credits),
        Locale::Fr => format!("{} crédits IA par mois", credits),
    }
}

/// "-20%" badge text, absent without a discount.
pub fn discount_badge(result: &PricingResult) -> Option<String> {
    (result.has_discount && result.discount_percent > 0)
        .then(|| format!("-{}%", result.discount_percent))
}

/// Rendered text for every slot the pricing card fills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingView {
    pub plan_name: String,
    pub price: String,
    pub original_price: Option<String>,
    pub discount_badge: Option<String>,
    pub per_month: String,
    pub billed: Option<String>,
    pub users: String,
    pub credits: String,
}

impl PricingView {
    pub fn from_result(result: &PricingResult, locale: Locale) -> Self {
        Self {
            plan_name: result.plan_name.clone(),
            price: result.formatted_price(),
            original_price: result.formatted_original_price(),
            discount_badge: discount_badge(result),
            per_month: per_month_label(result.users, locale),
            billed: billed_label(
                &result.formatted_period_total(),
                result.billing_period,
                locale,
            ),
            users: user_label(result.users, locale),
            credits: credits_label(result.features.ai_credits, locale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{CurrencyCode, PlanId, PricingCatalog};
    use crate::domain::pricing::{PricingEngine, PricingState, UserCount};

    fn annual_usd_two_users() -> PricingResult {
        let mut state = PricingState::new();
        state.set_billing_period(BillingPeriod::Annual);
        state.set_users(UserCount::clamped(2), BillingPeriod::Annual);
        state.set_currency(CurrencyCode::USD);
        state.set_plan(PlanId::Pro1);
        PricingEngine::default().calculate(&state, &PricingCatalog::standard(false))
    }

    #[test]
    fn parses_locales() {
        assert_eq!("FR".parse::<Locale>().unwrap(), Locale::Fr);
        assert_eq!("en-GB".parse::<Locale>().unwrap(), Locale::En);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn user_label_pluralises() {
        assert_eq!(user_label(1, Locale::En), "Up to 1 user");
        assert_eq!(user_label(3, Locale::En), "Up to 3 users");
        assert_eq!(user_label(1, Locale::Fr), "Jusqu'à 1 utilisateur");
        assert_eq!(user_label(3, Locale::Fr), "Jusqu'à 3 utilisateurs");
    }

    #[test]
    fn per_month_label_in_both_locales() {
        assert_eq!(per_month_label(2, Locale::En), "/ month for 2 users");
        assert_eq!(per_month_label(2, Locale::Fr), "/ mois pour 2 utilisateurs");
    }

    #[test]
    fn monthly_has_no_billed_line() {
        assert_eq!(billed_label("69€", BillingPeriod::Monthly, Locale::En), None);
    }

    #[test]
    fn credits_label_in_both_locales() {
        assert_eq!(credits_label(400, Locale::En), "400 AI credits per month");
        assert_eq!(credits_label(400, Locale::Fr), "400 crédits IA par mois");
    }

    #[test]
    fn view_for_annual_usd() {
        let view = PricingView::from_result(&annual_usd_two_users(), Locale::En);
        assert_eq!(view.plan_name, "Pro 1");
        assert_eq!(view.price, "$119");
        assert_eq!(view.original_price.as_deref(), Some("$149"));
        assert_eq!(view.discount_badge.as_deref(), Some("-20%"));
        assert_eq!(view.billed.as_deref(), Some("$1428 billed annually (excl. VAT)"));
        assert_eq!(view.users, "Up to 2 users");
        assert_eq!(view.credits, "400 AI credits per month");
    }

    #[test]
    fn french_view_for_annual_usd() {
        let view = PricingView::from_result(&annual_usd_two_users(), Locale::Fr);
        assert_eq!(view.billed.as_deref(), Some("$1428 facturé annuellement (HT)"));
        assert_eq!(view.per_month, "/ mois pour 2 utilisateurs");
    }

    #[test]
    fn no_badge_without_discount() {
        let result =
            PricingEngine::default().calculate(&PricingState::new(), &PricingCatalog::default());
        assert_eq!(discount_badge(&result), None);
    }
}
