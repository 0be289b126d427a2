//! Application layer - pricing sessions and the signals that drive them.
//!
//! This layer owns the mutable selection and coordinates the pure engine
//! with the renderer and slider ports.

mod commands;
mod placeholder;
mod session;
mod signals;

pub use commands::SessionCommand;
pub use placeholder::PlaceholderHint;
pub use session::PricingSession;
pub use signals::PricingSignal;
