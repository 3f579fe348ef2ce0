//! Transcoding the intermediate WAV into the final compressed file.

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::{debug, warn};

use super::wav::write_wav;
use crate::config::EncoderConfig;
use crate::{Buffer, SfxError};

/// Lines of encoder stderr kept in an `EncoderFailed` error.
const STDERR_TAIL_LINES: usize = 20;

/// Turns an uncompressed WAV into the final delivery format.
pub trait Transcoder {
    /// Extension of the files this transcoder produces, without the dot.
    fn extension(&self) -> &str;

    /// Reads `input` and writes `output`, blocking until done.
    ///
    /// `asset` names the asset being encoded, for error messages.
    fn transcode(&self, asset: &str, input: &Path, output: &Path) -> Result<(), SfxError>;
}

/// Runs `ffmpeg` (or a compatible program) once per asset.
///
/// Equivalent to `ffmpeg -y -i <wav> -b:a 128k -ar 44100 <out>` with the
/// default config. Output is captured rather than shown; a non-zero exit is
/// reported with the tail of the captured stderr.
#[derive(Debug, Clone)]
pub struct FfmpegEncoder {
    config: EncoderConfig,
}

impl FfmpegEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        FfmpegEncoder { config }
    }

    /// Arguments passed to the encoder for one conversion.
    pub fn args(&self, input: &Path, output: &Path) -> Vec<OsString> {
        vec![
            "-y".into(),
            "-i".into(),
            input.into(),
            "-b:a".into(),
            format!("{}k", self.config.bitrate_kbps).into(),
            "-ar".into(),
            self.config.sample_rate.to_string().into(),
            output.into(),
        ]
    }
}

impl Transcoder for FfmpegEncoder {
    fn extension(&self) -> &str {
        &self.config.extension
    }

    fn transcode(&self, asset: &str, input: &Path, output: &Path) -> Result<(), SfxError> {
        let args = self.args(input, output);
        debug!("running {} {:?}", self.config.program, args);

        let result = Command::new(&self.config.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| SfxError::EncoderUnavailable {
                program: self.config.program.clone(),
                source,
            })?;

        if !result.status.success() {
            return Err(SfxError::EncoderFailed {
                asset: asset.to_string(),
                status: result.status,
                stderr: stderr_tail(&result.stderr),
            });
        }
        Ok(())
    }
}

fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}

/// An intermediate file that is removed when dropped.
///
/// The success path calls [`ScratchFile::remove`] so removal errors surface;
/// on every other path `Drop` cleans up and only logs a failure, leaving the
/// original error in charge.
struct ScratchFile {
    path: PathBuf,
    armed: bool,
}

impl ScratchFile {
    fn new(path: PathBuf) -> Self {
        ScratchFile { path, armed: true }
    }

    fn remove(mut self) -> Result<(), SfxError> {
        self.armed = false;
        fs::remove_file(&self.path).map_err(|e| SfxError::io(&self.path, e))?;
        debug!("removed {}", self.path.display());
        Ok(())
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        match fs::remove_file(&self.path) {
            Ok(()) => debug!("cleaned up {}", self.path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!("could not remove {}: {}", self.path.display(), e),
        }
    }
}

/// A file written by [`encode_asset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAsset {
    pub name: String,
    pub path: PathBuf,
    /// Size of the encoded file in bytes
    pub bytes: u64,
}

impl EncodedAsset {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.name.clone())
    }
}

/// Writes `buffer` to `<dir>/<name>.<ext>` through an intermediate WAV.
///
/// The WAV (`<dir>/<name>.wav`) exists only for the duration of the call and
/// is removed whether or not transcoding succeeds. A transcoder that itself
/// produces `wav` files is rejected before anything is written.
pub fn encode_asset<const SAMPLE_RATE: u32, T: Transcoder + ?Sized>(
    buffer: &Buffer<SAMPLE_RATE>,
    name: &str,
    dir: &Path,
    transcoder: &T,
) -> Result<EncodedAsset, SfxError> {
    let wav_path = dir.join(format!("{name}.wav"));
    let out_path = dir.join(format!("{name}.{}", transcoder.extension()));
    if out_path == wav_path {
        return Err(SfxError::OutputCollision { path: out_path });
    }

    let scratch = ScratchFile::new(wav_path.clone());
    write_wav(buffer, &wav_path)?;
    transcoder.transcode(name, &wav_path, &out_path)?;
    scratch.remove()?;

    let bytes = fs::metadata(&out_path)
        .map_err(|e| SfxError::io(&out_path, e))?
        .len();

    Ok(EncodedAsset {
        name: name.to_string(),
        path: out_path,
        bytes,
    })
}
