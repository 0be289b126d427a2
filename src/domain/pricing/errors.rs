//! Pricing-specific error types.
//!
//! Errors raised at the selection boundary. The engine itself never fails;
//! bad input is stopped here before a state change happens.
//!
//! | Error | Code |
//! |-------|------|
//! | InvalidSelection | OUT_OF_RANGE / VALIDATION_FAILED |
//! | UnknownCode | UNKNOWN_CODE |
//! | PlanNotFound | PLAN_NOT_FOUND |
//! | Adapter | ADAPTER_FAILED |

use crate::domain::catalog::CatalogError;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Pricing-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// A selection value failed validation (e.g. user count outside 1-10).
    InvalidSelection(ValidationError),

    /// A period or currency code that matches nothing in the catalog.
    UnknownCode { field: String, value: String },

    /// A plan code outside the enumerated plan set.
    PlanNotFound(String),

    /// A renderer or slider driver failed after the state was updated.
    Adapter(String),
}

impl PricingError {
    pub fn unknown_code(field: impl Into<String>, value: impl Into<String>) -> Self {
        PricingError::UnknownCode {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn plan_not_found(code: impl Into<String>) -> Self {
        PricingError::PlanNotFound(code.into())
    }

    pub fn adapter(message: impl Into<String>) -> Self {
        PricingError::Adapter(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PricingError::InvalidSelection(ValidationError::OutOfRange { .. }) => {
                ErrorCode::OutOfRange
            }
            PricingError::InvalidSelection(_) => ErrorCode::ValidationFailed,
            PricingError::UnknownCode { .. } => ErrorCode::UnknownCode,
            PricingError::PlanNotFound(_) => ErrorCode::PlanNotFound,
            PricingError::Adapter(_) => ErrorCode::AdapterFailed,
        }
    }

    /// Returns a readable error message.
    pub fn message(&self) -> String {
        match self {
            PricingError::InvalidSelection(err) => err.to_string(),
            PricingError::UnknownCode { field, value } => {
                format!("Unknown {} '{}'", field, value)
            }
            PricingError::PlanNotFound(code) => format!("Plan not found: {}", code),
            PricingError::Adapter(msg) => format!("Adapter failed: {}", msg),
        }
    }

    /// True when the selection was rejected and the state left untouched.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, PricingError::Adapter(_))
    }
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PricingError {}

impl From<ValidationError> for PricingError {
    fn from(err: ValidationError) -> Self {
        PricingError::InvalidSelection(err)
    }
}

impl From<CatalogError> for PricingError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::PlanNotFound(code) => PricingError::PlanNotFound(code),
            other => PricingError::Adapter(other.to_string()),
        }
    }
}

impl From<PricingError> for DomainError {
    fn from(err: PricingError) -> Self {
        let domain = DomainError::new(err.code(), err.message());
        match err {
            PricingError::UnknownCode { field, value } => {
                domain.with_detail("field", field).with_detail("value", value)
            }
            _ => domain,
        }
    }
}
