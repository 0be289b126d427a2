//! Auto-scrolling logo stripe.
//!
//! Independent of pricing. Each lane slides its content horizontally at a
//! speed that eases toward a target: `base_speed` while running, zero while
//! paused (hover). A lane that has travelled one full content length jumps
//! back to its anchor in the same frame.
//!
//! - `lane` - StripeLane and Direction
//! - `animation` - StripeAnimation, the shared speed target

mod animation;
mod lane;

pub use animation::{StripeAnimation, StripeSettings};
pub use lane::{Direction, LaneSpec, StripeLane};
