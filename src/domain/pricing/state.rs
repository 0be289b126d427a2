//! Current pricing selections.

use serde::{Deserialize, Serialize};

use super::{UserCount, UsersPerPeriod};
use crate::domain::catalog::{BillingPeriod, CurrencyCode, PlanId};
use crate::domain::foundation::ValidationError;

/// What the visitor has selected on the pricing page.
///
/// One instance lives for the whole page session. Every setter leaves the
/// state valid: slider positions are clamped, and rejected user counts leave
/// the previous value in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingState {
    plan: PlanId,
    users: UsersPerPeriod,
    billing_period: BillingPeriod,
    currency: CurrencyCode,
}

impl Default for PricingState {
    fn default() -> Self {
        Self {
            plan: PlanId::Pro1,
            users: UsersPerPeriod::default(),
            billing_period: BillingPeriod::Monthly,
            currency: CurrencyCode::EUR,
        }
    }
}

impl PricingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plan(&self) -> PlanId {
        self.plan
    }

    pub fn billing_period(&self) -> BillingPeriod {
        self.billing_period
    }

    pub fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// User count for a specific billing period.
    pub fn users_for(&self, period: BillingPeriod) -> UserCount {
        self.users.get(period)
    }

    /// User count for the active billing period.
    pub fn active_users(&self) -> UserCount {
        self.users.get(self.billing_period)
    }

    pub fn users(&self) -> &UsersPerPeriod {
        &self.users
    }

    pub fn set_plan(&mut self, plan: PlanId) {
        self.plan = plan;
    }

    /// Applies a raw slider position, clamped to a valid plan.
    pub fn set_plan_position(&mut self, position: i64) -> PlanId {
        self.plan = PlanId::from_slider_position(position);
        self.plan
    }

    /// Sets the user count remembered for `period`.
    pub fn set_users(&mut self, count: UserCount, period: BillingPeriod) {
        self.users.set(period, count);
    }

    /// Validates and sets a raw user count.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` if `count` is not in `1..=10`;
    /// the state is left untouched.
    pub fn set_users_raw(
        &mut self,
        count: i64,
        period: BillingPeriod,
    ) -> Result<UserCount, ValidationError> {
        let count = UserCount::try_new(count)?;
        self.set_users(count, period);
        Ok(count)
    }

    pub fn set_billing_period(&mut self, period: BillingPeriod) {
        self.billing_period = period;
    }

    pub fn set_currency(&mut self, currency: CurrencyCode) {
        self.currency = currency;
    }
}
