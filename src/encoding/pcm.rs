//! Conversion from floating-point samples to 16-bit PCM.

/// Converts samples to signed 16-bit PCM.
///
/// Each sample is clamped to `[-1.0, 1.0]` and mapped to
/// `round(sample * 32767)`, so full scale is symmetric and nothing wraps.
///
/// # Examples
///
/// ```
/// use chess_sfx::encoding::quantize;
///
/// assert_eq!(quantize(&[0.0, 1.0, -1.0, 2.0]), vec![0, 32767, -32767, 32767]);
/// ```
pub fn quantize(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s.clamp(-1.0, 1.0) * i16::MAX as f64).round() as i16)
        .collect()
}
