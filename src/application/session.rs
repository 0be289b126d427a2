//! PricingSession - one visitor's pricing page.
//!
//! Owns the selection state, recomputes on every accepted change and hands
//! the result to the renderer. Rejected input never reaches the state.

use std::sync::Arc;

use crate::domain::catalog::{
    BillingPeriod, CurrencyCode, PlanId, PricingCatalog, MAX_SLIDER_POSITION, MIN_SLIDER_POSITION,
};
use crate::domain::foundation::SessionId;
use crate::domain::phone_credits::{PhoneCreditQuote, PhoneCreditTier};
use crate::domain::pricing::{PricingEngine, PricingError, PricingResult, PricingState};
use crate::ports::{PriceRenderer, SliderDriver, SliderTarget};

use super::{PlaceholderHint, PricingSignal};

/// A single pricing page session.
pub struct PricingSession {
    id: SessionId,
    catalog: Arc<PricingCatalog>,
    engine: PricingEngine,
    state: PricingState,
    phone_tier: &'static PhoneCreditTier,
    renderer: Box<dyn PriceRenderer>,
}

impl PricingSession {
    pub fn new(
        catalog: Arc<PricingCatalog>,
        engine: PricingEngine,
        renderer: Box<dyn PriceRenderer>,
    ) -> Self {
        Self::with_state(catalog, engine, renderer, PricingState::default())
    }

    /// Resumes from a known selection.
    pub fn with_state(
        catalog: Arc<PricingCatalog>,
        engine: PricingEngine,
        renderer: Box<dyn PriceRenderer>,
        state: PricingState,
    ) -> Self {
        Self {
            id: SessionId::new(),
            catalog,
            engine,
            state,
            phone_tier: PhoneCreditTier::snap(0),
            renderer,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn state(&self) -> &PricingState {
        &self.state
    }

    pub fn catalog(&self) -> &PricingCatalog {
        &self.catalog
    }

    /// Result for the current state, without rendering.
    pub fn current(&self) -> PricingResult {
        self.engine.calculate(&self.state, &self.catalog)
    }

    /// Renders the current state again.
    pub fn refresh(&mut self) -> Result<PricingResult, PricingError> {
        self.publish()
    }

    // === Setters ===

    /// Applies a plan slider position, clamped to a valid plan.
    pub fn set_plan_position(&mut self, position: i64) -> Result<PricingResult, PricingError> {
        self.state.set_plan_position(position);
        self.publish()
    }

    pub fn set_plan(&mut self, plan: PlanId) -> Result<PricingResult, PricingError> {
        self.state.set_plan(plan);
        self.publish()
    }

    /// Selects a plan by external code.
    ///
    /// # Errors
    ///
    /// `PricingError::PlanNotFound` for codes outside the plan set.
    pub fn set_plan_code(&mut self, code: &str) -> Result<PricingResult, PricingError> {
        let plan = self.catalog.plan_by_code(code)?.id;
        self.set_plan(plan)
    }

    /// Sets the user count for `period`, or the active period when `None`.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidSelection` if `count` is outside `1..=10`.
    pub fn set_users(
        &mut self,
        count: i64,
        period: Option<BillingPeriod>,
    ) -> Result<PricingResult, PricingError> {
        let period = period.unwrap_or_else(|| self.state.billing_period());
        self.state.set_users_raw(count, period)?;
        self.publish()
    }

    pub fn set_billing_period(
        &mut self,
        period: BillingPeriod,
    ) -> Result<PricingResult, PricingError> {
        self.state.set_billing_period(period);
        self.publish()
    }

    /// Parses and applies a period tab value.
    pub fn set_billing_period_code(&mut self, raw: &str) -> Result<PricingResult, PricingError> {
        let period = raw
            .parse::<BillingPeriod>()
            .map_err(|_| PricingError::unknown_code("period", raw))?;
        self.set_billing_period(period)
    }

    pub fn set_currency(&mut self, currency: CurrencyCode) -> Result<PricingResult, PricingError> {
        self.state.set_currency(currency);
        self.publish()
    }

    /// Applies a currency selector option: exact code, exact label, then
    /// loose label markers.
    pub fn set_currency_label(&mut self, label: &str) -> Result<PricingResult, PricingError> {
        let currency = label
            .parse::<CurrencyCode>()
            .ok()
            .or_else(|| self.catalog.currency_by_label(label))
            .ok_or_else(|| PricingError::unknown_code("currency", label))?;
        self.set_currency(currency)
    }

    // === Adapter entry points ===

    /// Applies a raw UI signal.
    ///
    /// Returns `None` when the signal was rejected: the prior state is kept
    /// and nothing is rendered. A render failure after an accepted change
    /// is logged and the new result is still returned.
    pub fn handle(&mut self, signal: PricingSignal) -> Option<PricingResult> {
        let kind = signal.kind();
        let outcome = match signal {
            PricingSignal::SliderMoved { position } => self.set_plan_position(position),
            PricingSignal::PlanChosen { code } => self.set_plan_code(&code),
            PricingSignal::UsersSelected { value, period } => self.set_users(value, period),
            PricingSignal::PeriodSelected { period } => self.set_billing_period_code(&period),
            PricingSignal::CurrencySelected { label } => self.set_currency_label(&label),
            PricingSignal::Refresh => self.refresh(),
        };

        match outcome {
            Ok(result) => Some(result),
            Err(err) if err.is_rejection() => {
                tracing::warn!(
                    session_id = %self.id,
                    signal = kind,
                    code = %err.code(),
                    error = %err,
                    "Signal rejected, keeping previous selection"
                );
                None
            }
            Err(err) => {
                tracing::warn!(session_id = %self.id, signal = kind, error = %err, "Render failed");
                Some(self.current())
            }
        }
    }

    /// Handles a click on a plan placeholder.
    ///
    /// Moves the slider through `driver`, then applies the plan. If the
    /// driver fails the selection is left unchanged.
    pub fn select_plan_placeholder(
        &mut self,
        hint: PlaceholderHint,
        driver: &mut dyn SliderDriver,
    ) -> Result<PricingResult, PricingError> {
        let position = hint.resolve_plan_position();
        driver
            .move_to(SliderTarget::new(position, MIN_SLIDER_POSITION, MAX_SLIDER_POSITION))
            .map_err(|e| PricingError::adapter(e.to_string()))?;
        tracing::debug!(session_id = %self.id, position, "Placeholder selected");
        self.set_plan_position(position)
    }

    // === Phone credits ===

    /// Snaps a raw phone-credit slider value and quotes the pack in the
    /// selected currency.
    pub fn select_phone_credits(&mut self, raw: i64) -> PhoneCreditQuote {
        self.phone_tier = PhoneCreditTier::snap(raw);
        self.phone_quote()
    }

    /// Selects a phone-credit pack by stepped slider position.
    pub fn select_phone_position(&mut self, position: i64) -> PhoneCreditQuote {
        self.phone_tier = PhoneCreditTier::for_position(position);
        self.phone_quote()
    }

    /// Quote for the selected pack in the selected currency.
    pub fn phone_quote(&self) -> PhoneCreditQuote {
        self.phone_tier
            .quote(self.catalog.currency(self.state.currency()))
    }

    fn publish(&mut self) -> Result<PricingResult, PricingError> {
        let result = self.current();
        tracing::debug!(
            session_id = %self.id,
            plan = %result.plan_id,
            users = result.users,
            period = %result.billing_period,
            currency = %result.currency,
            displayed = result.displayed_price,
            "Pricing recomputed"
        );
        self.renderer
            .render(&result)
            .map_err(|e| PricingError::adapter(e.to_string()))?;
        Ok(result)
    }
}

impl std::fmt::Debug for PricingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PricingSession")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("phone_credits", &self.phone_tier.credits)
            .finish_non_exhaustive()
    }
}
