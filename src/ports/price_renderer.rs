//! Price Renderer Port - Interface for presenting pricing results.
//!
//! The core never touches presentation markup. After every accepted state
//! change the session hands the fresh [`PricingResult`] to a renderer, which
//! projects it onto whatever surface it owns (page text, terminal, a test
//! recorder).

use crate::domain::pricing::PricingResult;

/// Errors raised by presentation adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdapterError {
    #[error("Failed to serialize output: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Adapter rejected command: {0}")]
    Rejected(String),
}

impl From<std::io::Error> for AdapterError {
    fn from(err: std::io::Error) -> Self {
        AdapterError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AdapterError {
    fn from(err: serde_json::Error) -> Self {
        AdapterError::Serialization(err.to_string())
    }
}

/// Port for rendering pricing results.
pub trait PriceRenderer: Send {
    /// Presents a freshly computed result.
    ///
    /// # Errors
    /// Returns `AdapterError` if the output surface cannot be written. The
    /// selection that produced the result stays applied.
    fn render(&mut self, result: &PricingResult) -> Result<(), AdapterError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_errors_convert() {
        let err: AdapterError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, AdapterError::Io(ref m) if m.contains("closed")));
    }

    #[test]
    fn adapter_error_display() {
        let err = AdapterError::Rejected("slider detached".to_string());
        assert_eq!(err.to_string(), "Adapter rejected command: slider detached");
    }
}
