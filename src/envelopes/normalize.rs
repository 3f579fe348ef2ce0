//! Peak normalization.

use crate::{Buffer, SfxError};

/// Scales `buffer` so its largest absolute sample equals `target_peak`.
///
/// Silent buffers are returned unchanged. The target must lie in `(0, 1]`,
/// which keeps every normalized buffer inside the 16-bit PCM range.
///
/// # Examples
///
/// ```
/// use chess_sfx::{Buffer, envelopes::normalize};
///
/// let quiet = Buffer::<44100>::from_samples(vec![0.1, -0.2, 0.05]);
/// let loud = normalize(quiet, 0.5).unwrap();
/// assert!((loud.peak() - 0.5).abs() < 1e-12);
/// ```
pub fn normalize<const SAMPLE_RATE: u32>(
    mut buffer: Buffer<SAMPLE_RATE>,
    target_peak: f64,
) -> Result<Buffer<SAMPLE_RATE>, SfxError> {
    if !target_peak.is_finite() || target_peak <= 0.0 || target_peak > 1.0 {
        return Err(SfxError::InvalidAmplitude { value: target_peak });
    }
    let peak = buffer.peak();
    if peak > 0.0 {
        buffer.scale(target_peak / peak);
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_up() {
        let buffer = Buffer::<44100>::from_samples(vec![0.5, -0.25, 0.25]);
        let out = normalize(buffer, 1.0).unwrap();
        assert_eq!(out.as_slice(), &[1.0, -0.5, 0.5]);
    }

    #[test]
    fn test_normalize_negative_peak() {
        let buffer = Buffer::<44100>::from_samples(vec![0.1, -2.0]);
        let out = normalize(buffer, 0.8).unwrap();
        assert!((out.as_slice()[1] + 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_silent() {
        let buffer = Buffer::<44100>::zeros(16);
        let out = normalize(buffer, 0.5).unwrap();
        assert!(out.as_slice().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_normalize_rejects_bad_target() {
        for target in [0.0, -0.5, 1.5, f64::NAN] {
            let buffer = Buffer::<44100>::from_samples(vec![0.5]);
            assert!(matches!(
                normalize(buffer, target),
                Err(SfxError::InvalidAmplitude { .. })
            ));
        }
    }
}
