//! Sample-rate-aware signals and duration arithmetic.

use crate::{Buffer, SfxError, Signal};

/// Converts a duration in milliseconds to a sample count at `sample_rate`.
///
/// The count is `round(sample_rate * duration_ms / 1000)`. Zero and negative
/// durations give an empty signal; NaN and infinite durations are rejected.
///
/// # Examples
///
/// ```
/// use chess_sfx::samples_for_ms;
///
/// assert_eq!(samples_for_ms(44100, 100.0).unwrap(), 4410);
/// assert_eq!(samples_for_ms(44100, 5.0).unwrap(), 221);
/// assert_eq!(samples_for_ms(44100, -1.0).unwrap(), 0);
/// assert!(samples_for_ms(44100, f64::NAN).is_err());
/// ```
pub fn samples_for_ms(sample_rate: u32, duration_ms: f64) -> Result<usize, SfxError> {
    if !duration_ms.is_finite() {
        return Err(SfxError::InvalidDuration { duration_ms });
    }
    if duration_ms <= 0.0 {
        return Ok(0);
    }
    Ok((sample_rate as f64 * duration_ms / 1000.0).round() as usize)
}

/// Common interface for anything that can be rendered as audio.
///
/// The sample rate is a const generic parameter, so signals and buffers at
/// different rates cannot be mixed by accident.
///
/// # Type Parameters
///
/// * `SAMPLE_RATE` - Sample rate in Hz (44100 for every asset in the catalog)
pub trait AudioSignal<const SAMPLE_RATE: u32>: Signal {
    /// Renders the next `len` samples into a new buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_sfx::{AudioSignal, SineOscillator};
    ///
    /// let mut osc = SineOscillator::<44100>::new(441.0);
    /// let buffer = osc.render(100);
    /// assert_eq!(buffer.len(), 100);
    /// ```
    fn render(&mut self, len: usize) -> Buffer<SAMPLE_RATE>
    where
        Self: Sized,
    {
        let mut samples = vec![0.0; len];
        self.process(&mut samples);
        Buffer::from_samples(samples)
    }
}
