//! Envelope shaping: linear ramps, start/end fades and peak normalization.

mod fade;
mod normalize;
mod ramp;

pub(crate) use fade::apply_edges;
pub use fade::{Fade, fade};
pub use normalize::normalize;
pub use ramp::{Ramp, Trapezoid};
