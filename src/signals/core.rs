//! Core signal processing trait.
//!
//! A `Signal` is a lazy, sample-by-sample source. Every primitive in this
//! crate (tones, noise, ramps, modulators) is a `Signal`, and composers turn
//! them into finished [`Buffer`](crate::Buffer)s by rendering or accumulating
//! them into sample slices.

/// Common interface for all signal sources and processors.
///
/// The trait provides three operations:
/// - Single sample generation via `next_sample()`
/// - Overwriting a slice via `process()`
/// - Additive writing into a slice via `accumulate()`
pub trait Signal {
    /// Generates the next sample from the signal.
    ///
    /// # Returns
    ///
    /// A sample value, typically between -1.0 and 1.0 for audio signals
    fn next_sample(&mut self) -> f64;

    /// Generates multiple samples into a buffer, replacing its contents.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with samples
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }

    /// Adds the next `buffer.len()` samples onto what the buffer already holds.
    ///
    /// This is how layers are summed into a shared, pre-allocated buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_sfx::{Signal, SineOscillator};
    ///
    /// let mut buffer = vec![0.5; 4];
    /// let mut silent = SineOscillator::<44100>::new(0.0);
    /// silent.accumulate(&mut buffer);
    /// assert_eq!(buffer, vec![0.5; 4]);
    /// ```
    fn accumulate(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample += self.next_sample();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter(f64);

    impl Signal for Counter {
        fn next_sample(&mut self) -> f64 {
            self.0 += 1.0;
            self.0
        }
    }

    #[test]
    fn test_process_overwrites() {
        let mut buffer = vec![10.0; 3];
        Counter(0.0).process(&mut buffer);
        assert_eq!(buffer, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_accumulate_adds() {
        let mut buffer = vec![10.0; 3];
        Counter(0.0).accumulate(&mut buffer);
        assert_eq!(buffer, vec![11.0, 12.0, 13.0]);
    }
}
