//! Oscillators and the pure-tone primitive.

mod additive;
mod sine;

pub use additive::Additive;
pub use sine::{SineOscillator, tone};
