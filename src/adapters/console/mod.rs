//! Terminal adapters.
//!
//! Used by the `pricing-engine` binary: results go out as JSON lines, and
//! slider commands are traced instead of driving a real widget.

use std::io::Write;

use crate::domain::pricing::{Locale, PricingResult, PricingView};
use crate::ports::{AdapterError, PriceRenderer, SliderDriver, SliderTarget};

/// Output shape of [`JsonLinesRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// The raw `PricingResult`.
    Result,
    /// Localized card text.
    View(Locale),
}

/// Writes one JSON document per rendered result.
pub struct JsonLinesRenderer<W: Write + Send> {
    writer: W,
    mode: RenderMode,
}

impl<W: Write + Send> JsonLinesRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            mode: RenderMode::Result,
        }
    }

    pub fn with_mode(writer: W, mode: RenderMode) -> Self {
        Self { writer, mode }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> PriceRenderer for JsonLinesRenderer<W> {
    fn render(&mut self, result: &PricingResult) -> Result<(), AdapterError> {
        match self.mode {
            RenderMode::Result => serde_json::to_writer(&mut self.writer, result)?,
            RenderMode::View(locale) => {
                serde_json::to_writer(&mut self.writer, &PricingView::from_result(result, locale))?
            }
        }
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Slider driver that only records the command in the trace log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSliderDriver;

impl SliderDriver for TracingSliderDriver {
    fn move_to(&mut self, target: SliderTarget) -> Result<(), AdapterError> {
        tracing::info!(
            position = target.position,
            fraction = target.track_fraction(),
            "Slider moved"
        );
        Ok(())
    }
}
