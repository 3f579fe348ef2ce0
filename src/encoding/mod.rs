//! From finished buffers to files on disk.
//!
//! A buffer is quantized to 16-bit PCM, written as a temporary WAV, handed
//! to a [`Transcoder`] and the WAV is removed again.

mod pcm;
mod transcoder;
mod wav;

pub use pcm::quantize;
pub use transcoder::{EncodedAsset, FfmpegEncoder, Transcoder, encode_asset};
pub use wav::write_wav;
