//! User count value object (1-10 seats).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::catalog::BillingPeriod;
use crate::domain::foundation::ValidationError;

/// Number of seats on a plan, between 1 and 10 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct UserCount(u8);

impl UserCount {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(10);

    /// Creates a UserCount, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if value < i64::from(Self::MIN.0) || value > i64::from(Self::MAX.0) {
            return Err(ValidationError::out_of_range(
                "users",
                i64::from(Self::MIN.0),
                i64::from(Self::MAX.0),
                value,
            ));
        }
        Ok(Self(value as u8))
    }

    /// Creates a UserCount, clamping to the valid range.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0)) as u8)
    }

    pub fn value(&self) -> u32 {
        u32::from(self.0)
    }

    pub fn is_plural(&self) -> bool {
        self.0 > 1
    }
}

impl Default for UserCount {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<i64> for UserCount {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<UserCount> for u8 {
    fn from(count: UserCount) -> Self {
        count.0
    }
}

impl fmt::Display for UserCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User count remembered separately for each billing period.
///
/// Switching tabs does not reset the count chosen on another tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UsersPerPeriod {
    pub monthly: UserCount,
    pub quarterly: UserCount,
    pub annual: UserCount,
}

impl UsersPerPeriod {
    pub fn get(&self, period: BillingPeriod) -> UserCount {
        match period {
            BillingPeriod::Monthly => self.monthly,
            BillingPeriod::Quarterly => self.quarterly,
            BillingPeriod::Annual => self.annual,
        }
    }

    pub fn set(&mut self, period: BillingPeriod, count: UserCount) {
        match period {
            BillingPeriod::Monthly => self.monthly = count,
            BillingPeriod::Quarterly => self.quarterly = count,
            BillingPeriod::Annual => self.annual = count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_accepts_bounds() {
        assert_eq!(UserCount::try_new(1).unwrap().value(), 1);
        assert_eq!(UserCount::try_new(10).unwrap().value(), 10);
    }

    #[test]
    fn try_new_rejects_zero_and_eleven() {
        for bad in [0, 11, -3] {
            match UserCount::try_new(bad) {
                Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                    assert_eq!(field, "users");
                    assert_eq!(min, 1);
                    assert_eq!(max, 10);
                    assert_eq!(actual, bad);
                }
                other => panic!("Expected OutOfRange error, got {:?}", other),
            }
        }
    }

    #[test]
    fn clamped_stays_in_range() {
        assert_eq!(UserCount::clamped(0), UserCount::MIN);
        assert_eq!(UserCount::clamped(42), UserCount::MAX);
        assert_eq!(UserCount::clamped(4).value(), 4);
    }

    #[test]
    fn plural_only_above_one() {
        assert!(!UserCount::MIN.is_plural());
        assert!(UserCount::clamped(2).is_plural());
    }

    #[test]
    fn serializes_as_number() {
        let count = UserCount::clamped(3);
        assert_eq!(serde_json::to_string(&count).unwrap(), "3");
    }

    #[test]
    fn deserialization_validates_range() {
        assert!(serde_json::from_str::<UserCount>("7").is_ok());
        assert!(serde_json::from_str::<UserCount>("12").is_err());
    }

    #[test]
    fn periods_are_remembered_independently() {
        let mut users = UsersPerPeriod::default();
        users.set(BillingPeriod::Annual, UserCount::clamped(5));
        assert_eq!(users.get(BillingPeriod::Annual).value(), 5);
        assert_eq!(users.get(BillingPeriod::Monthly).value(), 1);
        assert_eq!(users.get(BillingPeriod::Quarterly).value(), 1);
    }
}
