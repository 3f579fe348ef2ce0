//! Error type shared by the whole crate.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Everything that can go wrong while synthesizing or writing an asset.
///
/// None of these are transient: each one points at a bad constant or a
/// misconfigured environment, so callers abort instead of retrying.
#[derive(Debug, Error)]
pub enum SfxError {
    /// A duration was NaN or infinite.
    #[error("invalid duration: {duration_ms} ms")]
    InvalidDuration { duration_ms: f64 },

    /// A frequency was not a positive, finite number of Hz.
    #[error("invalid frequency: {frequency} Hz")]
    InvalidFrequency { frequency: f64 },

    /// A volume was not finite, or a normalization target fell outside (0, 1].
    #[error("invalid amplitude: {value}")]
    InvalidAmplitude { value: f64 },

    /// Two signals were mixed that do not have the same number of samples.
    #[error("cannot mix signals of different lengths: expected {expected} samples, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write intermediate WAV: {0}")]
    Wav(#[from] hound::Error),

    /// The encoder binary could not be started at all.
    #[error("could not launch encoder `{program}`: {source}")]
    EncoderUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The encoded file would overwrite the intermediate WAV.
    #[error("output {} collides with the intermediate WAV", path.display())]
    OutputCollision { path: PathBuf },

    /// The encoder ran but exited unsuccessfully.
    #[error("encoding `{asset}` failed ({status}): {stderr}")]
    EncoderFailed {
        asset: String,
        status: ExitStatus,
        stderr: String,
    },
}

impl SfxError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SfxError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = SfxError::io(
            "/tmp/out/move.wav",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/out/move.wav"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_invalid_frequency_message() {
        let err = SfxError::InvalidFrequency { frequency: -3.0 };
        assert_eq!(err.to_string(), "invalid frequency: -3 Hz");
    }
}
