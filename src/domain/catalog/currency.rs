//! Currencies, exchange rates and symbol placement.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Supported currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    EUR,
    USD,
    GBP,
}

impl Default for CurrencyCode {
    fn default() -> Self {
        CurrencyCode::EUR
    }
}

impl CurrencyCode {
    /// All supported currencies.
    pub const ALL: [CurrencyCode; 3] = [CurrencyCode::EUR, CurrencyCode::USD, CurrencyCode::GBP];

    /// Zero-based table index.
    pub fn index(&self) -> usize {
        match self {
            CurrencyCode::EUR => 0,
            CurrencyCode::USD => 1,
            CurrencyCode::GBP => 2,
        }
    }

    /// ISO 4217 code.
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::EUR => "EUR",
            CurrencyCode::USD => "USD",
            CurrencyCode::GBP => "GBP",
        }
    }

    /// Parses the free-form value of a currency selector option.
    ///
    /// Selector labels vary between page revisions ("€ EUR", "Dollar ($)",
    /// "Pound (£)"), so this matches on any recognisable marker.
    pub fn from_selector_label(label: &str) -> Option<Self> {
        if label.contains("EUR") || label.contains('€') {
            Some(CurrencyCode::EUR)
        } else if label.contains("USD") || label.contains("Dollar") || label.contains('$') {
            Some(CurrencyCode::USD)
        } else if label.contains("GBP") || label.contains("Pound") || label.contains('£') {
            Some(CurrencyCode::GBP)
        } else {
            None
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EUR" => Ok(CurrencyCode::EUR),
            "USD" => Ok(CurrencyCode::USD),
            "GBP" => Ok(CurrencyCode::GBP),
            _ => Err(ValidationError::invalid_format(
                "currency",
                format!("unknown code '{}'", s),
            )),
        }
    }
}

/// Where the currency symbol sits relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Before,
    After,
}

/// Places `symbol` before or after a whole amount.
pub fn format_amount(amount: u32, symbol: &str, position: SymbolPosition) -> String {
    match position {
        SymbolPosition::Before => format!("{}{}", symbol, amount),
        SymbolPosition::After => format!("{}{}", amount, symbol),
    }
}

/// A currency with its conversion rate from EUR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub code: CurrencyCode,
    pub symbol: String,
    /// Label shown in the currency selector.
    pub label: String,
    pub exchange_rate_from_eur: Decimal,
    pub symbol_position: SymbolPosition,
}

impl Currency {
    /// Formats a whole amount with the symbol on the configured side.
    pub fn format_amount(&self, amount: u32) -> String {
        format_amount(amount, &self.symbol, self.symbol_position)
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.symbol.is_empty() {
            return Err(ValidationError::empty_field("currency.symbol"));
        }
        if self.exchange_rate_from_eur <= Decimal::ZERO {
            return Err(ValidationError::invalid_format(
                "currency.exchange_rate_from_eur",
                format!("rate for {} must be positive", self.code),
            ));
        }
        Ok(())
    }
}
