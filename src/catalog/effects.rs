//! The nine short sound effects.
//!
//! Every recipe is built from the same three pieces: tones, noise bursts and
//! silent gaps, mixed or concatenated, then faded and normalized. Pitches are
//! the usual rounded equal-temperament values (523 Hz for C5 and so on).

use rand::Rng;

use super::{Asset, Clip};
use crate::envelopes::{fade, normalize};
use crate::{Buffer, SAMPLE_RATE, SfxError, noise, tone};

fn sine(frequency: f64, duration_ms: f64, volume: f64) -> Result<Clip, SfxError> {
    tone::<SAMPLE_RATE>(frequency, duration_ms, volume)
}

fn hiss<R: Rng>(duration_ms: f64, volume: f64, rng: &mut R) -> Result<Clip, SfxError> {
    noise::<SAMPLE_RATE, R>(duration_ms, volume, rng)
}

fn gap(duration_ms: f64) -> Result<Clip, SfxError> {
    Buffer::silence(duration_ms)
}

fn finish(signal: Clip, fade_in_ms: f64, fade_out_ms: f64, asset: Asset) -> Result<Clip, SfxError> {
    normalize(fade(signal, fade_in_ms, fade_out_ms)?, asset.target_peak())
}

/// A low knock with a noisy attack.
fn tap<R: Rng>(frequency: f64, rng: &mut R) -> Result<Clip, SfxError> {
    let knock = Buffer::mix(&[&hiss(60.0, 0.5, rng)?, &sine(frequency, 60.0, 0.3)?])?;
    fade(knock, 2.0, 30.0)
}

/// Soft wooden tap: a piece placed on the board.
pub fn piece_move<R: Rng>(rng: &mut R) -> Result<Clip, SfxError> {
    let signal = Buffer::mix(&[&hiss(80.0, 0.6, rng)?, &sine(220.0, 80.0, 0.4)?])?;
    finish(signal, 2.0, 40.0, Asset::Move)
}

/// Sharper impact: a short noise hit over a two-tone body.
pub fn capture<R: Rng>(rng: &mut R) -> Result<Clip, SfxError> {
    let hit = Buffer::concat(&[&hiss(50.0, 0.8, rng)?, &gap(70.0)?]);
    let signal = Buffer::mix(&[&hit, &sine(330.0, 120.0, 0.5)?, &sine(165.0, 120.0, 0.3)?])?;
    finish(signal, 2.0, 60.0, Asset::Capture)
}

/// Alert: ascending C5 → E5.
pub fn check() -> Result<Clip, SfxError> {
    let signal = Buffer::concat(&[
        &sine(523.0, 100.0, 0.6)?,
        &gap(30.0)?,
        &sine(659.0, 120.0, 0.6)?,
    ]);
    finish(signal, 5.0, 60.0, Asset::Check)
}

/// Victorious fanfare: C5, E5, then a held G5.
pub fn checkmate() -> Result<Clip, SfxError> {
    let pause = gap(40.0)?;
    let signal = Buffer::concat(&[
        &sine(523.0, 150.0, 0.6)?,
        &pause,
        &sine(659.0, 150.0, 0.6)?,
        &pause,
        &sine(784.0, 300.0, 0.7)?,
    ]);
    finish(signal, 5.0, 100.0, Asset::Checkmate)
}

/// Two taps for the king and the rook.
///
/// Each tap carries its own fade, so the joined signal is only normalized.
pub fn castle<R: Rng>(rng: &mut R) -> Result<Clip, SfxError> {
    let king = tap(200.0, rng)?;
    let rook = tap(240.0, rng)?;
    let signal = Buffer::concat(&[&king, &gap(100.0)?, &rook]);
    normalize(signal, Asset::Castle.target_peak())
}

/// Low buzz from two slightly detuned tones.
pub fn illegal() -> Result<Clip, SfxError> {
    let signal = Buffer::mix(&[&sine(150.0, 200.0, 0.5)?, &sine(155.0, 200.0, 0.3)?])?;
    finish(signal, 5.0, 80.0, Asset::Illegal)
}

/// Descending A4 → E4.
pub fn undo() -> Result<Clip, SfxError> {
    let signal = Buffer::concat(&[
        &sine(440.0, 80.0, 0.5)?,
        &gap(30.0)?,
        &sine(330.0, 100.0, 0.5)?,
    ]);
    finish(signal, 5.0, 50.0, Asset::Undo)
}

/// Gentle rising C major arpeggio, each note a little louder than the last.
pub fn game_start() -> Result<Clip, SfxError> {
    const NOTES: [f64; 4] = [262.0, 330.0, 392.0, 523.0];

    let pause = gap(50.0)?;
    let mut parts = Vec::with_capacity(NOTES.len() * 2 - 1);
    for (i, &frequency) in NOTES.iter().enumerate() {
        if i > 0 {
            parts.push(pause.clone());
        }
        let note = sine(frequency, 120.0, 0.5 + i as f64 * 0.05)?;
        parts.push(fade(note, 3.0, 30.0)?);
    }
    let refs: Vec<&Clip> = parts.iter().collect();
    finish(Buffer::concat(&refs), 5.0, 80.0, Asset::GameStart)
}

/// Neutral resolution: G4 falling to F4.
pub fn draw() -> Result<Clip, SfxError> {
    let signal = Buffer::concat(&[
        &sine(392.0, 200.0, 0.5)?,
        &gap(50.0)?,
        &sine(349.0, 300.0, 0.5)?,
    ]);
    finish(signal, 5.0, 120.0, Asset::Draw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples_for_ms;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ms(duration_ms: f64) -> usize {
        samples_for_ms(SAMPLE_RATE, duration_ms).unwrap()
    }

    fn assert_peak(clip: &Clip, expected: f64) {
        assert!(
            (clip.peak() - expected).abs() < 1e-9,
            "peak {} != {}",
            clip.peak(),
            expected
        );
    }

    #[test]
    fn test_check_layout() {
        let clip = check().unwrap();
        assert_eq!(clip.len(), ms(100.0) + ms(30.0) + ms(120.0));
        assert_peak(&clip, 0.5);
        // The gap between the two notes is silent
        let gap_start = ms(100.0);
        assert!(
            clip.as_slice()[gap_start..gap_start + ms(30.0)]
                .iter()
                .all(|&s| s == 0.0)
        );
    }

    #[test]
    fn test_checkmate_layout() {
        let clip = checkmate().unwrap();
        assert_eq!(clip.len(), 2 * ms(150.0) + 2 * ms(40.0) + ms(300.0));
        assert_peak(&clip, 0.6);
    }

    #[test]
    fn test_capture_is_body_length() {
        let clip = capture(&mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(clip.len(), ms(120.0));
        assert_peak(&clip, 0.6);
    }

    #[test]
    fn test_castle_gap_and_edges() {
        let clip = castle(&mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(clip.len(), 2 * ms(60.0) + ms(100.0));
        assert_peak(&clip, 0.5);
        let s = clip.as_slice();
        assert_eq!(s[0], 0.0);
        assert_eq!(s[s.len() - 1], 0.0);
        // End of the first tap is faded out before the gap
        assert_eq!(s[ms(60.0) - 1], 0.0);
    }

    #[test]
    fn test_game_start_length() {
        let clip = game_start().unwrap();
        assert_eq!(clip.len(), 4 * ms(120.0) + 3 * ms(50.0));
        assert_peak(&clip, 0.45);
    }

    #[test]
    fn test_illegal_is_a_mix() {
        let clip = illegal().unwrap();
        assert_eq!(clip.len(), ms(200.0));
        assert_peak(&clip, 0.35);
    }

    #[test]
    fn test_seeded_move_is_reproducible() {
        let a = piece_move(&mut StdRng::seed_from_u64(11)).unwrap();
        let b = piece_move(&mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a, b);
    }
}
