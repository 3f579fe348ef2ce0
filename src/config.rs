//! Generator configuration.
//!
//! There are no command-line flags; the binary runs with
//! `GeneratorConfig::default()`. Library callers and tests override fields
//! through the builder methods.

use std::path::PathBuf;

use crate::SAMPLE_RATE;

/// How the external encoder is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Encoder executable, looked up on `PATH`
    pub program: String,
    /// Output bitrate in kbit/s
    pub bitrate_kbps: u32,
    /// Output sample rate in Hz
    pub sample_rate: u32,
    /// Extension of the encoded files, without the dot
    pub extension: String,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        EncoderConfig {
            program: "ffmpeg".to_string(),
            bitrate_kbps: 128,
            sample_rate: SAMPLE_RATE,
            extension: "mp3".to_string(),
        }
    }
}

/// Where assets go and how they are made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory receiving the encoded files; created if missing.
    /// Defaults to `audio` under the working directory.
    pub output_dir: PathBuf,
    pub encoder: EncoderConfig,
    /// Seed for the noise layers. `None` seeds from OS entropy, so every
    /// run produces slightly different percussive textures.
    pub noise_seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            output_dir: PathBuf::from("audio"),
            encoder: EncoderConfig::default(),
            noise_seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_noise_seed(mut self, seed: u64) -> Self {
        self.noise_seed = Some(seed);
        self
    }
}
