//! chess-sfx - Offline synthesis of the chess game's sound effects and music
//!
//! Every asset is built from a few primitives (sine tones, Gaussian noise,
//! silence), shaped with linear fades and peak normalization, and encoded to
//! MP3 through an external encoder. The [`Generator`] runs the whole catalog.

pub mod catalog;
pub mod combinators;
pub mod config;
pub mod encoding;
pub mod envelopes;
pub mod error;
pub mod generator;
pub mod noise;
pub mod oscillators;
pub mod signals;

/// Sample rate of every generated asset, in Hz.
pub const SAMPLE_RATE: u32 = 44100;

// Re-export commonly used types at the crate root
pub use catalog::{Asset, Clip};
pub use combinators::SignalExt;
pub use config::{EncoderConfig, GeneratorConfig};
pub use encoding::{EncodedAsset, FfmpegEncoder, Transcoder};
pub use error::SfxError;
pub use generator::Generator;
pub use noise::{GaussianNoise, noise};
pub use oscillators::{SineOscillator, tone};
pub use signals::{AudioSignal, Buffer, Signal, samples_for_ms};
