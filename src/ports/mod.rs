//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the pricing core and the page it runs on. Adapters implement these ports.
//!
//! - `PriceRenderer` - Presents each recomputed `PricingResult`
//! - `SliderDriver` - Moves a slider widget the core does not control

mod price_renderer;
mod slider_driver;

pub use price_renderer::{AdapterError, PriceRenderer};
pub use slider_driver::{SliderDriver, SliderTarget};
