//! In-memory adapters.
//!
//! Record everything they receive so tests can assert on it. Handles are
//! cheap clones sharing one buffer: hand one to the session, keep one to
//! inspect.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::pricing::PricingResult;
use crate::ports::{AdapterError, PriceRenderer, SliderDriver, SliderTarget};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Renderer that keeps every result it is given.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    results: Arc<Mutex<Vec<PricingResult>>>,
    fail_with: Option<String>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A renderer whose every call fails, after recording the result.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            results: Arc::default(),
            fail_with: Some(message.into()),
        }
    }

    /// All results rendered so far.
    pub fn results(&self) -> Vec<PricingResult> {
        lock(&self.results).clone()
    }

    pub fn last(&self) -> Option<PricingResult> {
        lock(&self.results).last().cloned()
    }

    pub fn len(&self) -> usize {
        lock(&self.results).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.results).is_empty()
    }

    pub fn clear(&self) {
        lock(&self.results).clear();
    }
}

impl PriceRenderer for RecordingRenderer {
    fn render(&mut self, result: &PricingResult) -> Result<(), AdapterError> {
        lock(&self.results).push(result.clone());
        match &self.fail_with {
            Some(message) => Err(AdapterError::Io(message.clone())),
            None => Ok(()),
        }
    }
}

/// Slider driver that keeps every target it is sent.
#[derive(Debug, Clone, Default)]
pub struct RecordingSliderDriver {
    targets: Arc<Mutex<Vec<SliderTarget>>>,
}

impl RecordingSliderDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn targets(&self) -> Vec<SliderTarget> {
        lock(&self.targets).clone()
    }

    pub fn last(&self) -> Option<SliderTarget> {
        lock(&self.targets).last().copied()
    }
}

impl SliderDriver for RecordingSliderDriver {
    fn move_to(&mut self, target: SliderTarget) -> Result<(), AdapterError> {
        lock(&self.targets).push(target);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::PricingCatalog;
    use crate::domain::pricing::{PricingEngine, PricingState};

    fn result() -> PricingResult {
        PricingEngine::default().calculate(&PricingState::new(), &PricingCatalog::default())
    }

    #[test]
    fn clones_share_the_buffer() {
        let observer = RecordingRenderer::new();
        let mut renderer = observer.clone();
        renderer.render(&result()).unwrap();
        assert_eq!(observer.len(), 1);
        assert_eq!(observer.last().unwrap().displayed_price, 69);
    }

    #[test]
    fn failing_renderer_still_records() {
        let observer = RecordingRenderer::failing("disconnected");
        let mut renderer = observer.clone();
        let err = renderer.render(&result()).unwrap_err();
        assert_eq!(err, AdapterError::Io("disconnected".to_string()));
        assert_eq!(observer.len(), 1);
    }

    #[test]
    fn clear_empties_the_buffer() {
        let observer = RecordingRenderer::new();
        observer.clone().render(&result()).unwrap();
        observer.clear();
        assert!(observer.is_empty());
    }

    #[test]
    fn driver_records_targets() {
        let observer = RecordingSliderDriver::new();
        let mut driver = observer.clone();
        driver.move_to(SliderTarget::new(3, 1, 4)).unwrap();
        assert_eq!(observer.targets(), vec![SliderTarget::new(3, 1, 4)]);
        assert_eq!(observer.last().map(|t| t.position), Some(3));
    }
}
