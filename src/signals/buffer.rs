//! Finalized, fixed-length sample buffers.

use std::ops::Range;

use crate::signals::audio::samples_for_ms;
use crate::{SfxError, Signal};

/// An owned, fixed-length sequence of samples at `SAMPLE_RATE` Hz.
///
/// Buffers are what composers build and what the encoder consumes. They are
/// combined by concatenation (sequential playback) and mixing (simultaneous
/// playback); both keep the exact sample counts of their inputs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Buffer<const SAMPLE_RATE: u32> {
    samples: Vec<f64>,
}

impl<const SAMPLE_RATE: u32> Buffer<SAMPLE_RATE> {
    /// Wraps existing samples.
    pub fn from_samples(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    /// A buffer of `len` zero samples.
    pub fn zeros(len: usize) -> Self {
        Self {
            samples: vec![0.0; len],
        }
    }

    /// A zero-filled gap lasting `duration_ms`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_sfx::Buffer;
    ///
    /// let gap = Buffer::<44100>::silence(30.0).unwrap();
    /// assert_eq!(gap.len(), 1323);
    /// assert_eq!(gap.peak(), 0.0);
    /// ```
    pub fn silence(duration_ms: f64) -> Result<Self, SfxError> {
        Ok(Self::zeros(samples_for_ms(SAMPLE_RATE, duration_ms)?))
    }

    /// Plays `parts` one after the other.
    pub fn concat(parts: &[&Self]) -> Self {
        let total: usize = parts.iter().map(|p| p.len()).sum();
        let mut samples = Vec::with_capacity(total);
        for part in parts {
            samples.extend_from_slice(&part.samples);
        }
        Self { samples }
    }

    /// Plays `layers` simultaneously by summing them sample by sample.
    ///
    /// All layers must have the same length.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_sfx::Buffer;
    ///
    /// let a = Buffer::<44100>::from_samples(vec![0.25, 0.5]);
    /// let b = Buffer::<44100>::from_samples(vec![0.25, -0.5]);
    /// let mixed = Buffer::mix(&[&a, &b]).unwrap();
    /// assert_eq!(mixed.as_slice(), &[0.5, 0.0]);
    ///
    /// let short = Buffer::<44100>::from_samples(vec![1.0]);
    /// assert!(Buffer::mix(&[&a, &short]).is_err());
    /// ```
    pub fn mix(layers: &[&Self]) -> Result<Self, SfxError> {
        let Some(first) = layers.first() else {
            return Ok(Self::default());
        };
        let mut samples = first.samples.clone();
        for layer in &layers[1..] {
            if layer.len() != samples.len() {
                return Err(SfxError::LengthMismatch {
                    expected: samples.len(),
                    actual: layer.len(),
                });
            }
            for (out, &s) in samples.iter_mut().zip(&layer.samples) {
                *out += s;
            }
        }
        Ok(Self { samples })
    }

    /// Adds `source` onto the samples in `range`, leaving the rest untouched.
    ///
    /// Used by the music composers to layer segments and global textures into
    /// one pre-allocated loop buffer at computed offsets.
    ///
    /// # Panics
    ///
    /// Panics if `range` is not within `0..self.len()`.
    pub fn accumulate<S: Signal + ?Sized>(&mut self, range: Range<usize>, source: &mut S) {
        source.accumulate(&mut self.samples[range]);
    }

    /// Multiplies every sample by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for sample in self.samples.iter_mut() {
            *sample *= factor;
        }
    }

    /// Largest absolute sample value, 0.0 for an empty buffer.
    pub fn peak(&self) -> f64 {
        self.samples.iter().fold(0.0_f64, |acc, s| acc.max(s.abs()))
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.samples.len() as f64 * 1000.0 / SAMPLE_RATE as f64
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SineOscillator;

    #[test]
    fn test_concat_preserves_lengths() {
        let a = Buffer::<44100>::zeros(3);
        let b = Buffer::<44100>::from_samples(vec![1.0, 2.0]);
        let joined = Buffer::concat(&[&a, &b, &a]);
        assert_eq!(joined.len(), 8);
        assert_eq!(joined.as_slice()[3..5], [1.0, 2.0]);
    }

    #[test]
    fn test_mix_empty_list() {
        let mixed = Buffer::<44100>::mix(&[]).unwrap();
        assert!(mixed.is_empty());
    }

    #[test]
    fn test_mix_length_mismatch() {
        let a = Buffer::<44100>::zeros(4);
        let b = Buffer::<44100>::zeros(5);
        match Buffer::mix(&[&a, &b]) {
            Err(SfxError::LengthMismatch { expected, actual }) => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 5);
            }
            other => panic!("expected LengthMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_accumulate_only_touches_range() {
        let mut buffer = Buffer::<44100>::from_samples(vec![1.0; 6]);
        let mut osc = SineOscillator::<44100>::new(0.0).with_phase(std::f64::consts::FRAC_PI_2);
        buffer.accumulate(2..4, &mut osc);
        let s = buffer.as_slice();
        assert_eq!(s[0], 1.0);
        assert_eq!(s[1], 1.0);
        assert!((s[2] - 2.0).abs() < 1e-12);
        assert!((s[3] - 2.0).abs() < 1e-12);
        assert_eq!(s[4], 1.0);
    }

    #[test]
    #[should_panic]
    fn test_accumulate_out_of_range_panics() {
        let mut buffer = Buffer::<44100>::zeros(4);
        let mut osc = SineOscillator::<44100>::new(440.0);
        buffer.accumulate(2..6, &mut osc);
    }

    #[test]
    fn test_peak_and_scale() {
        let mut buffer = Buffer::<44100>::from_samples(vec![0.1, -0.4, 0.2]);
        assert_eq!(buffer.peak(), 0.4);
        buffer.scale(2.0);
        assert_eq!(buffer.peak(), 0.8);
    }

    #[test]
    fn test_duration() {
        let buffer = Buffer::<44100>::zeros(44100);
        assert!((buffer.duration_ms() - 1000.0).abs() < 1e-9);
    }
}
