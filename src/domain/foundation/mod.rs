//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, rounding helpers and error types that form the
//! vocabulary of the pricing domain.

mod errors;
mod ids;
mod money;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SessionId;
pub use money::{round_to_unit, whole_units};
