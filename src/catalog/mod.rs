//! The fixed catalog of game audio assets.
//!
//! Nine short effects and two music loops, in the order the generator writes
//! them. Each asset knows its file stem and renders itself into a finished,
//! faded and normalized buffer.

pub mod effects;
pub mod music;

use std::fmt;

use rand::Rng;

use crate::{Buffer, SAMPLE_RATE, SfxError};

/// A finished buffer at the catalog sample rate.
pub type Clip = Buffer<SAMPLE_RATE>;

/// One named asset, written to `<name>.<extension>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    Move,
    Capture,
    Check,
    Checkmate,
    Castle,
    Illegal,
    Undo,
    GameStart,
    Draw,
    MusicCalm,
    MusicUpbeat,
}

impl Asset {
    /// Every asset in generation order.
    pub const ALL: [Asset; 11] = [
        Asset::Move,
        Asset::Capture,
        Asset::Check,
        Asset::Checkmate,
        Asset::Castle,
        Asset::Illegal,
        Asset::Undo,
        Asset::GameStart,
        Asset::Draw,
        Asset::MusicCalm,
        Asset::MusicUpbeat,
    ];

    pub const EFFECTS: [Asset; 9] = [
        Asset::Move,
        Asset::Capture,
        Asset::Check,
        Asset::Checkmate,
        Asset::Castle,
        Asset::Illegal,
        Asset::Undo,
        Asset::GameStart,
        Asset::Draw,
    ];

    pub const MUSIC: [Asset; 2] = [Asset::MusicCalm, Asset::MusicUpbeat];

    /// File stem of the asset.
    pub fn name(self) -> &'static str {
        match self {
            Asset::Move => "move",
            Asset::Capture => "capture",
            Asset::Check => "check",
            Asset::Checkmate => "checkmate",
            Asset::Castle => "castle",
            Asset::Illegal => "illegal",
            Asset::Undo => "undo",
            Asset::GameStart => "game-start",
            Asset::Draw => "draw",
            Asset::MusicCalm => "music-calm",
            Asset::MusicUpbeat => "music-upbeat",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Asset::Move => "soft wooden tap, piece placed on board",
            Asset::Capture => "sharper impact, piece captured",
            Asset::Check => "alert, ascending two-note",
            Asset::Checkmate => "victorious fanfare, three ascending notes",
            Asset::Castle => "double tap, two piece movements",
            Asset::Illegal => "low buzz, invalid move",
            Asset::Undo => "descending two-note, reversal",
            Asset::GameStart => "gentle rising arpeggio, game beginning",
            Asset::Draw => "neutral ending, flat resolution",
            Asset::MusicCalm => "calm ambient loop, slow chord progression",
            Asset::MusicUpbeat => "upbeat rhythmic loop, energetic pulse",
        }
    }

    /// Peak amplitude the asset is normalized to.
    pub fn target_peak(self) -> f64 {
        match self {
            Asset::Move | Asset::Check | Asset::Castle => 0.5,
            Asset::Capture | Asset::Checkmate => 0.6,
            Asset::Illegal | Asset::MusicCalm | Asset::MusicUpbeat => 0.35,
            Asset::Undo | Asset::Draw => 0.4,
            Asset::GameStart => 0.45,
        }
    }

    /// Synthesizes the asset. Only move, capture and castle consume `rng`.
    pub fn render<R: Rng>(self, rng: &mut R) -> Result<Clip, SfxError> {
        match self {
            Asset::Move => effects::piece_move(rng),
            Asset::Capture => effects::capture(rng),
            Asset::Check => effects::check(),
            Asset::Checkmate => effects::checkmate(),
            Asset::Castle => effects::castle(rng),
            Asset::Illegal => effects::illegal(),
            Asset::Undo => effects::undo(),
            Asset::GameStart => effects::game_start(),
            Asset::Draw => effects::draw(),
            Asset::MusicCalm => music::calm(),
            Asset::MusicUpbeat => music::upbeat(),
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
