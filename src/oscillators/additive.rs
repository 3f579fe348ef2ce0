//! Additive synthesis from a fixed set of sine partials.

use crate::combinators::{Gain, SignalExt};
use crate::{AudioSignal, Signal, SineOscillator};

/// A sum of sine partials, each with its own frequency and amplitude.
///
/// All partials start at phase 0 on the same sample, so a freshly built
/// `Additive` always renders the same waveform.
///
/// # Examples
///
/// ```
/// use chess_sfx::{AudioSignal, oscillators::Additive};
///
/// // A slightly detuned pair
/// let mut pad = Additive::<44100>::new(&[(220.0, 0.25), (220.44, 0.15)]);
/// let buffer = pad.render(1000);
/// assert!(buffer.peak() <= 0.4);
/// ```
pub struct Additive<const SAMPLE_RATE: u32> {
    partials: Vec<Gain<SineOscillator<SAMPLE_RATE>>>,
}

impl<const SAMPLE_RATE: u32> Additive<SAMPLE_RATE> {
    /// Builds the sum from `(frequency, amplitude)` pairs.
    pub fn new(partials: &[(f64, f64)]) -> Self {
        Self {
            partials: partials
                .iter()
                .map(|&(frequency, amplitude)| SineOscillator::new(frequency).gain(amplitude))
                .collect(),
        }
    }
}

impl<const SAMPLE_RATE: u32> Signal for Additive<SAMPLE_RATE> {
    fn next_sample(&mut self) -> f64 {
        self.partials.iter_mut().map(|p| p.next_sample()).sum()
    }
}

impl<const SAMPLE_RATE: u32> AudioSignal<SAMPLE_RATE> for Additive<SAMPLE_RATE> {}
