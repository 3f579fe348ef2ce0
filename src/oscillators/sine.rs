//! Sine wave oscillator implementation.

use std::f64::consts::TAU;

use crate::combinators::SignalExt;
use crate::{AudioSignal, Buffer, SfxError, Signal, samples_for_ms};

/// A sine wave oscillator for audio synthesis.
///
/// Sample `i` is `sin(2π·frequency·i / SAMPLE_RATE + phase)`. The value is
/// computed from the absolute sample index rather than an accumulated phase,
/// so a 30 second pad ends exactly where the formula says it should.
///
/// # Type Parameters
///
/// * `SAMPLE_RATE` - Sample rate in Hz (e.g., 44100 for CD quality)
#[derive(Debug, Clone)]
pub struct SineOscillator<const SAMPLE_RATE: u32> {
    frequency: f64,
    /// Phase offset in radians
    phase: f64,
    /// Index of the next sample
    index: u64,
}

impl<const SAMPLE_RATE: u32> SineOscillator<SAMPLE_RATE> {
    /// Creates a new sine oscillator starting at phase 0.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency of the sine wave in Hz
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_sfx::{Signal, SineOscillator};
    ///
    /// // Create a 440 Hz (A4 note) oscillator at 44.1 kHz sample rate
    /// let mut osc = SineOscillator::<44100>::new(440.0);
    /// assert_eq!(osc.next_sample(), 0.0);
    /// ```
    pub fn new(frequency: f64) -> Self {
        Self {
            frequency,
            phase: 0.0,
            index: 0,
        }
    }

    /// Shifts the waveform by `phase` radians.
    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }
}

impl<const SAMPLE_RATE: u32> Signal for SineOscillator<SAMPLE_RATE> {
    fn next_sample(&mut self) -> f64 {
        let t = self.index as f64 / SAMPLE_RATE as f64;
        self.index += 1;
        (TAU * self.frequency * t + self.phase).sin()
    }
}

impl<const SAMPLE_RATE: u32> AudioSignal<SAMPLE_RATE> for SineOscillator<SAMPLE_RATE> {}

/// A pure tone: `duration_ms` of a sine at `frequency` Hz scaled by `volume`.
///
/// Durations of zero or less give an empty buffer. Frequencies must be
/// positive and finite, volumes finite.
///
/// # Examples
///
/// ```
/// use chess_sfx::{Buffer, tone};
///
/// let c5: Buffer<44100> = tone(523.0, 100.0, 0.6).unwrap();
/// assert_eq!(c5.len(), 4410);
/// assert!(c5.peak() <= 0.6);
/// ```
pub fn tone<const SAMPLE_RATE: u32>(
    frequency: f64,
    duration_ms: f64,
    volume: f64,
) -> Result<Buffer<SAMPLE_RATE>, SfxError> {
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(SfxError::InvalidFrequency { frequency });
    }
    if !volume.is_finite() {
        return Err(SfxError::InvalidAmplitude { value: volume });
    }
    let len = samples_for_ms(SAMPLE_RATE, duration_ms)?;
    Ok(SineOscillator::<SAMPLE_RATE>::new(frequency)
        .gain(volume)
        .render(len))
}
