//! Click-free start and end fades.

use crate::envelopes::Ramp;
use crate::{Buffer, SfxError, Signal, samples_for_ms};

/// Linear fade-in and fade-out lengths in milliseconds.
///
/// A fade is skipped when its length is zero or not shorter than the buffer,
/// so very short buffers are left as they are instead of being over-indexed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub fade_in_ms: f64,
    pub fade_out_ms: f64,
}

impl Default for Fade {
    fn default() -> Self {
        Fade {
            fade_in_ms: 5.0,
            fade_out_ms: 50.0,
        }
    }
}

impl Fade {
    pub fn new(fade_in_ms: f64, fade_out_ms: f64) -> Self {
        Fade {
            fade_in_ms,
            fade_out_ms,
        }
    }

    /// Applies the fades in place.
    pub fn apply<const SAMPLE_RATE: u32>(
        &self,
        buffer: &mut Buffer<SAMPLE_RATE>,
    ) -> Result<(), SfxError> {
        let fade_in = samples_for_ms(SAMPLE_RATE, self.fade_in_ms)?;
        let fade_out = samples_for_ms(SAMPLE_RATE, self.fade_out_ms)?;
        apply_edges(buffer.as_mut_slice(), fade_in, fade_out);
        Ok(())
    }
}

/// Fades `buffer` and hands it back.
///
/// # Examples
///
/// ```
/// use chess_sfx::{Buffer, envelopes::fade, tone};
///
/// let t: Buffer<44100> = tone(440.0, 100.0, 1.0).unwrap();
/// let faded = fade(t, 5.0, 50.0).unwrap();
/// assert_eq!(faded.as_slice()[0], 0.0);
/// assert_eq!(*faded.as_slice().last().unwrap(), 0.0);
/// ```
pub fn fade<const SAMPLE_RATE: u32>(
    mut buffer: Buffer<SAMPLE_RATE>,
    fade_in_ms: f64,
    fade_out_ms: f64,
) -> Result<Buffer<SAMPLE_RATE>, SfxError> {
    Fade::new(fade_in_ms, fade_out_ms).apply(&mut buffer)?;
    Ok(buffer)
}

/// Multiplies the first `fade_in` samples by a rising ramp and the last
/// `fade_out` samples by a falling one. Lengths are in samples.
pub(crate) fn apply_edges(samples: &mut [f64], fade_in: usize, fade_out: usize) {
    let len = samples.len();
    if fade_in > 0 && fade_in < len {
        let mut ramp = Ramp::rising(fade_in);
        for sample in &mut samples[..fade_in] {
            *sample *= ramp.next_sample();
        }
    }
    if fade_out > 0 && fade_out < len {
        let mut ramp = Ramp::falling(fade_out);
        for sample in &mut samples[len - fade_out..] {
            *sample *= ramp.next_sample();
        }
    }
}
