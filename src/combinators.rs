//! Signal combinators for composing and transforming signals.
//!
//! The music composers describe their modulated layers with these instead of
//! hand-written sample loops: a tremolo shimmer is a scaled sine multiplied by
//! a slower, offset sine; a beat gate is a phase-shifted sine that has been
//! scaled, offset and clamped.

use crate::{AudioSignal, Signal};

/// Multiplies a signal by a second one sample by sample (amplitude
/// modulation, or applying a gain envelope).
///
/// # Examples
///
/// ```
/// use chess_sfx::{Signal, SineOscillator, combinators::Multiply};
///
/// let carrier = SineOscillator::<44100>::new(440.0);
/// let envelope = SineOscillator::<44100>::new(2.0);
/// let mut am = Multiply::new(carrier, envelope);
/// assert_eq!(am.next_sample(), 0.0);
/// ```
pub struct Multiply<S: Signal, M: Signal> {
    source: S,
    modulator: M,
}

impl<S: Signal, M: Signal> Multiply<S, M> {
    pub fn new(source: S, modulator: M) -> Self {
        Self { source, modulator }
    }
}

impl<S: Signal, M: Signal> Signal for Multiply<S, M> {
    fn next_sample(&mut self) -> f64 {
        self.source.next_sample() * self.modulator.next_sample()
    }
}

impl<const SAMPLE_RATE: u32, S: AudioSignal<SAMPLE_RATE>, M: AudioSignal<SAMPLE_RATE>>
    AudioSignal<SAMPLE_RATE> for Multiply<S, M>
{
}

/// Scales a signal by a constant factor.
///
/// # Examples
///
/// ```
/// use chess_sfx::{Signal, SignalExt, SineOscillator};
///
/// let osc = SineOscillator::<44100>::new(440.0).with_phase(std::f64::consts::FRAC_PI_2);
/// let mut quieter = osc.gain(0.5);
/// assert!((quieter.next_sample() - 0.5).abs() < 1e-12);
/// ```
pub struct Gain<S: Signal> {
    source: S,
    factor: f64,
}

impl<S: Signal> Signal for Gain<S> {
    fn next_sample(&mut self) -> f64 {
        self.source.next_sample() * self.factor
    }
}

impl<const SAMPLE_RATE: u32, S: AudioSignal<SAMPLE_RATE>> AudioSignal<SAMPLE_RATE> for Gain<S> {}

/// Shifts a signal by a constant amount.
pub struct Offset<S: Signal> {
    source: S,
    amount: f64,
}

impl<S: Signal> Signal for Offset<S> {
    fn next_sample(&mut self) -> f64 {
        self.source.next_sample() + self.amount
    }
}

impl<const SAMPLE_RATE: u32, S: AudioSignal<SAMPLE_RATE>> AudioSignal<SAMPLE_RATE> for Offset<S> {}

/// Limits a signal to `[min, max]`.
pub struct Clamp<S: Signal> {
    source: S,
    min: f64,
    max: f64,
}

impl<S: Signal> Signal for Clamp<S> {
    fn next_sample(&mut self) -> f64 {
        self.source.next_sample().clamp(self.min, self.max)
    }
}

impl<const SAMPLE_RATE: u32, S: AudioSignal<SAMPLE_RATE>> AudioSignal<SAMPLE_RATE> for Clamp<S> {}

/// Builder-style methods for chaining combinators onto any signal.
///
/// # Examples
///
/// ```
/// use chess_sfx::{Signal, SignalExt, SineOscillator};
///
/// // 0.5 + 0.5·sin(…), floored at 0.3
/// let mut pulse = SineOscillator::<44100>::new(4.0)
///     .with_phase(-std::f64::consts::FRAC_PI_2)
///     .gain(0.5)
///     .offset(0.5)
///     .clamp(0.3, 1.0);
/// assert!((pulse.next_sample() - 0.3).abs() < 1e-12);
/// ```
pub trait SignalExt: Signal + Sized {
    fn gain(self, factor: f64) -> Gain<Self> {
        Gain {
            source: self,
            factor,
        }
    }

    fn offset(self, amount: f64) -> Offset<Self> {
        Offset {
            source: self,
            amount,
        }
    }

    fn clamp(self, min: f64, max: f64) -> Clamp<Self> {
        Clamp {
            source: self,
            min,
            max,
        }
    }

    fn multiply<M: Signal>(self, modulator: M) -> Multiply<Self, M> {
        Multiply::new(self, modulator)
    }
}

impl<S: Signal> SignalExt for S {}
