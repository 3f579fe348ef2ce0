//! Linear ramps used for fades and segment crossfades.

use crate::Signal;

/// Position `k` of an inclusive linear space of `n` points from 0 to 1.
fn unit_step(k: usize, n: usize) -> f64 {
    if n <= 1 {
        0.0
    } else {
        k as f64 / (n - 1) as f64
    }
}

/// A linear ramp over `len` samples that includes both endpoints.
///
/// A rising ramp goes 0 → 1 and a falling ramp 1 → 0, so the first sample of
/// a fade-in and the last sample of a fade-out are exactly zero. Once the
/// ramp is exhausted it holds its final value.
///
/// # Examples
///
/// ```
/// use chess_sfx::{Signal, envelopes::Ramp};
///
/// let mut ramp = Ramp::rising(5);
/// let values: Vec<f64> = (0..6).map(|_| ramp.next_sample()).collect();
/// assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0, 1.0]);
/// ```
#[derive(Debug, Clone)]
pub struct Ramp {
    len: usize,
    index: usize,
    falling: bool,
}

impl Ramp {
    pub fn rising(len: usize) -> Self {
        Self {
            len,
            index: 0,
            falling: false,
        }
    }

    pub fn falling(len: usize) -> Self {
        Self {
            len,
            index: 0,
            falling: true,
        }
    }
}

impl Signal for Ramp {
    fn next_sample(&mut self) -> f64 {
        let k = self.index.min(self.len.saturating_sub(1));
        self.index += 1;
        let up = if self.index > self.len {
            1.0
        } else {
            unit_step(k, self.len)
        };
        if self.falling { 1.0 - up } else { up }
    }
}

/// The gain envelope of one chord segment: rise over `window` samples, hold
/// at 1, fall over the last `window` samples.
///
/// When `window` does not fit inside the segment the envelope is flat 1.0.
#[derive(Debug, Clone)]
pub struct Trapezoid {
    len: usize,
    window: usize,
    index: usize,
}

impl Trapezoid {
    pub fn new(len: usize, window: usize) -> Self {
        Self {
            len,
            window,
            index: 0,
        }
    }
}

impl Signal for Trapezoid {
    fn next_sample(&mut self) -> f64 {
        let i = self.index;
        self.index += 1;
        if self.window >= self.len || i >= self.len {
            return 1.0;
        }
        let tail_start = self.len - self.window;
        if i >= tail_start {
            1.0 - unit_step(i - tail_start, self.window)
        } else if i < self.window {
            unit_step(i, self.window)
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn take(signal: &mut impl Signal, n: usize) -> Vec<f64> {
        (0..n).map(|_| signal.next_sample()).collect()
    }

    #[test]
    fn test_falling_ramp_ends_at_zero() {
        let values = take(&mut Ramp::falling(5), 5);
        assert_eq!(values, vec![1.0, 0.75, 0.5, 0.25, 0.0]);
    }

    #[test]
    fn test_single_sample_ramp() {
        assert_eq!(take(&mut Ramp::rising(1), 1), vec![0.0]);
        assert_eq!(take(&mut Ramp::falling(1), 1), vec![1.0]);
    }

    #[test]
    fn test_exhausted_falling_ramp_holds_zero() {
        let values = take(&mut Ramp::falling(3), 5);
        assert_eq!(values, vec![1.0, 0.5, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_trapezoid_shape() {
        let values = take(&mut Trapezoid::new(8, 3), 8);
        assert_eq!(values, vec![0.0, 0.5, 1.0, 1.0, 1.0, 1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_trapezoid_window_too_long_is_flat() {
        let values = take(&mut Trapezoid::new(4, 4), 4);
        assert_eq!(values, vec![1.0; 4]);
    }
}
