//! Adapters - Implementations of port interfaces.
//!
//! - `console` - JSON-lines renderer and a tracing slider driver for the binary
//! - `memory` - Recording renderer and slider driver for tests

pub mod console;
pub mod memory;

pub use console::{JsonLinesRenderer, RenderMode, TracingSliderDriver};
pub use memory::{RecordingRenderer, RecordingSliderDriver};
