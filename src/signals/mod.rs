//! Signal processing types and traits.
//!
//! This module provides the core signal abstractions used throughout the
//! crate:
//! - `Signal` trait for all sample sources
//! - `AudioSignal` trait for sample-rate-aware signals
//! - `Buffer` for finished, fixed-length signals

mod audio;
mod buffer;
mod core;

pub use audio::{AudioSignal, samples_for_ms};
pub use buffer::Buffer;
pub use core::Signal;
