//! Core utilities shared by every layer: vector math, time, logging.

pub mod clock;
pub mod logging;
pub mod vec2;

pub use clock::{Clock, ManualClock, SystemClock};
pub use vec2::Vec2;
