//! Gaussian (normally distributed) white noise.

use std::f64::consts::TAU;

use rand::Rng;

use crate::combinators::SignalExt;
use crate::{AudioSignal, Buffer, SfxError, Signal, samples_for_ms};

/// A white noise generator with standard-normal samples.
///
/// Samples are drawn with the Box–Muller transform, which yields two
/// independent values per pair of uniforms; the second one is kept for the
/// next call. Unlike uniform noise the output is unbounded, so anything built
/// from it is normalized before encoding.
pub struct GaussianNoise<const SAMPLE_RATE: u32, R: Rng> {
    rng: R,
    spare: Option<f64>,
}

impl<const SAMPLE_RATE: u32, R: Rng> GaussianNoise<SAMPLE_RATE, R> {
    /// Creates a generator drawing from `rng`; seed it for reproducible
    /// output.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_sfx::{GaussianNoise, Signal};
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = GaussianNoise::<44100, _>::with_rng(rng);
    /// assert!(noise.next_sample().is_finite());
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Self { rng, spare: None }
    }
}

impl<const SAMPLE_RATE: u32, R: Rng> Signal for GaussianNoise<SAMPLE_RATE, R> {
    fn next_sample(&mut self) -> f64 {
        if let Some(spare) = self.spare.take() {
            return spare;
        }
        // u1 in (0, 1] keeps ln() finite
        let u1: f64 = 1.0 - self.rng.gen_range(0.0..1.0);
        let u2: f64 = self.rng.gen_range(0.0..1.0);
        let radius = (-2.0 * u1.ln()).sqrt();
        let angle = TAU * u2;
        self.spare = Some(radius * angle.sin());
        radius * angle.cos()
    }
}

impl<const SAMPLE_RATE: u32, R: Rng> AudioSignal<SAMPLE_RATE> for GaussianNoise<SAMPLE_RATE, R> {}

/// `duration_ms` of standard-normal noise scaled by `volume`, drawn from `rng`.
///
/// # Examples
///
/// ```
/// use chess_sfx::{Buffer, noise};
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let burst: Buffer<44100> = noise(80.0, 0.6, &mut rng).unwrap();
/// assert_eq!(burst.len(), 3528);
/// ```
pub fn noise<const SAMPLE_RATE: u32, R: Rng>(
    duration_ms: f64,
    volume: f64,
    rng: &mut R,
) -> Result<Buffer<SAMPLE_RATE>, SfxError> {
    if !volume.is_finite() {
        return Err(SfxError::InvalidAmplitude { value: volume });
    }
    let len = samples_for_ms(SAMPLE_RATE, duration_ms)?;
    Ok(GaussianNoise::<SAMPLE_RATE, _>::with_rng(rng)
        .gain(volume)
        .render(len))
}
