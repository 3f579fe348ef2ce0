//! The two 30 second background loops.
//!
//! A loop is one pre-allocated buffer. Chord segments are accumulated into it
//! at `segment_index × segment_len`, each under its own crossfade envelope,
//! and full-length layers (shimmer, bass) are accumulated over the whole
//! thing. A long fade at both ends lets the file repeat without a seam.

use std::f64::consts::FRAC_PI_2;

use log::debug;

use super::{Asset, Clip};
use crate::combinators::SignalExt;
use crate::envelopes::{Trapezoid, apply_edges, normalize};
use crate::oscillators::Additive;
use crate::{Buffer, SAMPLE_RATE, SfxError, Signal, SineOscillator, samples_for_ms};

/// Length of both loops.
pub const LOOP_MS: f64 = 30_000.0;

/// Tempo of the upbeat loop.
pub const UPBEAT_BPM: f64 = 120.0;

/// Three frequencies played together for one segment of a progression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chord {
    pub name: &'static str,
    pub tones: [f64; 3],
}

impl Chord {
    pub const fn new(name: &'static str, tones: [f64; 3]) -> Self {
        Chord { name, tones }
    }
}

/// Am → F → C → G, low and slow.
pub const CALM_PROGRESSION: [Chord; 4] = [
    Chord::new("Am", [220.0, 262.0, 330.0]),
    Chord::new("F", [175.0, 220.0, 262.0]),
    Chord::new("C", [131.0, 165.0, 196.0]),
    Chord::new("G", [196.0, 247.0, 294.0]),
];

/// C → G → Am → F.
pub const UPBEAT_PROGRESSION: [Chord; 4] = [
    Chord::new("C", [262.0, 330.0, 392.0]),
    Chord::new("G", [196.0, 247.0, 294.0]),
    Chord::new("Am", [220.0, 262.0, 330.0]),
    Chord::new("F", [175.0, 220.0, 262.0]),
];

/// Sample range of segment `index` when `total` samples are split `count` ways.
///
/// # Panics
///
/// Panics if `count` is zero.
pub fn segment_bounds(total: usize, count: usize, index: usize) -> std::ops::Range<usize> {
    index * total / count..(index + 1) * total / count
}

/// Accumulates one voice per chord into consecutive, equal segments of
/// `signal`, each shaped by a crossfade of `window_ms` at both ends.
fn lay_progression<S, F>(
    signal: &mut Clip,
    chords: &[Chord],
    window_ms: f64,
    mut voice: F,
) -> Result<(), SfxError>
where
    S: Signal,
    F: FnMut(&Chord) -> S,
{
    let window = samples_for_ms(SAMPLE_RATE, window_ms)?;
    let total = signal.len();
    for (i, chord) in chords.iter().enumerate() {
        let range = segment_bounds(total, chords.len(), i);
        debug!("chord {} over samples {:?}", chord.name, range);
        let mut segment = voice(chord).multiply(Trapezoid::new(range.len(), window));
        signal.accumulate(range, &mut segment);
    }
    Ok(())
}

/// A high sine with a slow tremolo: `sin(f)·depth·(1 + sin(rate))·0.5`.
fn shimmer(frequency: f64, depth: f64, rate_hz: f64) -> impl Signal {
    SineOscillator::<SAMPLE_RATE>::new(frequency)
        .gain(depth * 0.5)
        .multiply(SineOscillator::<SAMPLE_RATE>::new(rate_hz).offset(1.0))
}

/// `0.5 + 0.5·sin(2π·rate·t − π/2)` limited to `[floor, 1]`: zero-phase
/// starts at the bottom of each beat.
fn beat_gate(rate_hz: f64, floor: f64) -> impl Signal {
    SineOscillator::<SAMPLE_RATE>::new(rate_hz)
        .with_phase(-FRAC_PI_2)
        .gain(0.5)
        .offset(0.5)
        .clamp(floor, 1.0)
}

/// Loop fade applied over both ends of a finished loop.
fn loop_fade(signal: &mut Clip, fade_ms: f64) -> Result<(), SfxError> {
    let len = samples_for_ms(SAMPLE_RATE, fade_ms)?;
    apply_edges(signal.as_mut_slice(), len, len);
    Ok(())
}

/// Calm ambient pad: detuned chord partials, 0.8 s crossfades and a faint
/// 880 Hz shimmer.
pub fn calm() -> Result<Clip, SfxError> {
    let mut signal: Clip = Buffer::zeros(samples_for_ms(SAMPLE_RATE, LOOP_MS)?);

    lay_progression(&mut signal, &CALM_PROGRESSION, 800.0, |chord| {
        let [f1, f2, f3] = chord.tones;
        Additive::<SAMPLE_RATE>::new(&[
            (f1, 0.25),
            (f1 * 1.002, 0.15),
            (f2, 0.20),
            (f2 * 0.998, 0.12),
            (f3, 0.15),
            (f3 * 1.003, 0.08),
        ])
    })?;

    let total = signal.len();
    signal.accumulate(0..total, &mut shimmer(880.0, 0.02, 0.1));

    loop_fade(&mut signal, 2_000.0)?;
    normalize(signal, Asset::MusicCalm.target_peak())
}

/// Upbeat loop at 120 BPM: brighter chords pulsing in eighth notes, a gated
/// low C bass and a 1047 Hz shimmer.
pub fn upbeat() -> Result<Clip, SfxError> {
    let beat_s = 60.0 / UPBEAT_BPM;
    let eighth_hz = 1.0 / (beat_s / 2.0);

    let mut signal: Clip = Buffer::zeros(samples_for_ms(SAMPLE_RATE, LOOP_MS)?);

    lay_progression(&mut signal, &UPBEAT_PROGRESSION, 300.0, |chord| {
        let [f1, f2, f3] = chord.tones;
        Additive::<SAMPLE_RATE>::new(&[(f1, 0.2), (f2, 0.2), (f3, 0.15), (f1 * 2.0, 0.08)])
            .multiply(beat_gate(eighth_hz, 0.3))
    })?;

    let total = signal.len();
    let mut bass = SineOscillator::<SAMPLE_RATE>::new(65.0)
        .gain(0.15)
        .multiply(beat_gate(eighth_hz, 0.0));
    signal.accumulate(0..total, &mut bass);
    signal.accumulate(0..total, &mut shimmer(1047.0, 0.03, 0.5));

    loop_fade(&mut signal, 1_500.0)?;
    normalize(signal, Asset::MusicUpbeat.target_peak())
}
