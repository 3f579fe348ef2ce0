//! The driver: renders every asset in order and writes it to disk.

use std::fs;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::SfxError;
use crate::catalog::Asset;
use crate::config::GeneratorConfig;
use crate::encoding::{EncodedAsset, FfmpegEncoder, Transcoder, encode_asset};

/// Generates the whole catalog into one output directory.
///
/// Assets are processed strictly one after another; the first failure stops
/// the run and is returned.
pub struct Generator<T: Transcoder> {
    config: GeneratorConfig,
    transcoder: T,
}

impl Generator<FfmpegEncoder> {
    /// A generator that encodes with the external program named in the config.
    pub fn with_ffmpeg(config: GeneratorConfig) -> Self {
        let transcoder = FfmpegEncoder::new(config.encoder.clone());
        Generator { config, transcoder }
    }
}

impl<T: Transcoder> Generator<T> {
    pub fn new(config: GeneratorConfig, transcoder: T) -> Self {
        Generator { config, transcoder }
    }

    /// Creates the output directory and writes every asset.
    pub fn run(&self) -> Result<Vec<EncodedAsset>, SfxError> {
        let dir = &self.config.output_dir;
        fs::create_dir_all(dir).map_err(|e| SfxError::io(dir, e))?;
        info!("Writing audio to {}", dir.display());

        let mut rng = match self.config.noise_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut written = Vec::with_capacity(Asset::ALL.len());

        info!("Generating sound effects...");
        for asset in Asset::EFFECTS {
            written.push(self.generate(asset, &mut rng)?);
        }

        info!("Generating background music...");
        for asset in Asset::MUSIC {
            written.push(self.generate(asset, &mut rng)?);
        }

        let total: u64 = written.iter().map(|a| a.bytes).sum();
        info!(
            "Done! {} files ({} bytes) in: {}",
            written.len(),
            total,
            dir.display()
        );
        Ok(written)
    }

    /// Renders and encodes a single asset into the output directory, which
    /// must already exist.
    pub fn generate(&self, asset: Asset, rng: &mut StdRng) -> Result<EncodedAsset, SfxError> {
        debug!("{}: {}", asset, asset.description());
        let clip = asset.render(rng)?;
        debug!(
            "{}: {} samples ({:.0} ms), peak {:.3}",
            asset,
            clip.len(),
            clip.duration_ms(),
            clip.peak()
        );

        let encoded = encode_asset(
            &clip,
            asset.name(),
            &self.config.output_dir,
            &self.transcoder,
        )?;
        info!("  ✓ {} ({} bytes)", encoded.file_name(), encoded.bytes);
        Ok(encoded)
    }
}
