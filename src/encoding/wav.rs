//! Intermediate WAV writer.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use super::pcm::quantize;
use crate::{Buffer, SfxError};

/// Writes `buffer` as a mono 16-bit PCM WAV at its own sample rate.
pub fn write_wav<const SAMPLE_RATE: u32>(
    buffer: &Buffer<SAMPLE_RATE>,
    path: &Path,
) -> Result<(), SfxError> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for sample in quantize(buffer.as_slice()) {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    Ok(())
}
