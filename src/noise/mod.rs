//! Noise generators for audio synthesis.

mod gaussian;

pub use gaussian::{GaussianNoise, noise};
