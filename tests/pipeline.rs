use std::fs;
use std::path::Path;

use chess_sfx::encoding::encode_asset;
use chess_sfx::{
    Asset, Buffer, EncoderConfig, FfmpegEncoder, Generator, GeneratorConfig, SfxError, Transcoder,
};

/// Stands in for the external encoder: copies the WAV under a new extension.
struct CopyTranscoder;

impl Transcoder for CopyTranscoder {
    fn extension(&self) -> &str {
        "pcm"
    }

    fn transcode(&self, _asset: &str, input: &Path, output: &Path) -> Result<(), SfxError> {
        fs::copy(input, output).map_err(|source| SfxError::Io {
            path: output.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}

/// Always fails, after the WAV has been written.
struct BrokenTranscoder;

impl Transcoder for BrokenTranscoder {
    fn extension(&self) -> &str {
        "mp3"
    }

    fn transcode(&self, _asset: &str, input: &Path, _output: &Path) -> Result<(), SfxError> {
        assert!(input.exists(), "intermediate WAV should exist during transcoding");
        Err(SfxError::Io {
            path: input.to_path_buf(),
            source: std::io::Error::other("encoder crashed"),
        })
    }
}

/// Writes its output with the same extension as the intermediate file.
struct WavTranscoder;

impl Transcoder for WavTranscoder {
    fn extension(&self) -> &str {
        "wav"
    }

    fn transcode(&self, _asset: &str, input: &Path, output: &Path) -> Result<(), SfxError> {
        fs::copy(input, output).map_err(|source| SfxError::Io {
            path: output.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}

fn list(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_generator_creates_directory_and_all_files() {
    let root = tempfile::tempdir().unwrap();
    let out = root.path().join("nested").join("audio");
    assert!(!out.exists());

    let config = GeneratorConfig::default()
        .with_output_dir(&out)
        .with_noise_seed(42);
    let written = Generator::new(config, CopyTranscoder).run().unwrap();

    assert!(out.is_dir());
    assert_eq!(written.len(), Asset::ALL.len());
    for (encoded, asset) in written.iter().zip(Asset::ALL) {
        assert_eq!(encoded.name, asset.name());
        assert_eq!(encoded.path, out.join(format!("{}.pcm", asset.name())));
        assert_eq!(encoded.bytes, fs::metadata(&encoded.path).unwrap().len());
    }

    let mut expected: Vec<String> = Asset::ALL
        .iter()
        .map(|a| format!("{}.pcm", a.name()))
        .collect();
    expected.sort();
    assert_eq!(list(&out), expected, "no intermediate WAVs may remain");
}

#[test]
fn test_encoded_file_is_the_quantized_signal() {
    let dir = tempfile::tempdir().unwrap();
    let clip = Asset::Check.render(&mut rand::thread_rng()).unwrap();
    let encoded = encode_asset(&clip, "check", dir.path(), &CopyTranscoder).unwrap();

    let mut reader = hound::WavReader::open(&encoded.path).unwrap();
    assert_eq!(reader.spec().sample_rate, 44100);
    let pcm: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(pcm, chess_sfx::encoding::quantize(clip.as_slice()));
}

#[test]
fn test_intermediate_removed_when_transcoding_fails() {
    let dir = tempfile::tempdir().unwrap();
    let clip = Buffer::<44100>::from_samples(vec![0.0, 0.25, 0.0]);
    let result = encode_asset(&clip, "undo", dir.path(), &BrokenTranscoder);
    assert!(result.is_err());
    assert!(list(dir.path()).is_empty());
}

#[test]
fn test_wav_output_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let clip = Buffer::<44100>::from_samples(vec![0.0, 0.25, 0.0]);
    match encode_asset(&clip, "move", dir.path(), &WavTranscoder) {
        Err(SfxError::OutputCollision { path }) => {
            assert_eq!(path, dir.path().join("move.wav"));
        }
        other => panic!("expected OutputCollision, got {:?}", other),
    }
    assert!(list(dir.path()).is_empty());
}

#[test]
fn test_missing_encoder_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let encoder = FfmpegEncoder::new(EncoderConfig {
        program: "definitely-not-an-installed-encoder".to_string(),
        ..EncoderConfig::default()
    });
    let clip = Buffer::<44100>::from_samples(vec![0.0; 32]);
    match encode_asset(&clip, "draw", dir.path(), &encoder) {
        Err(SfxError::EncoderUnavailable { program, .. }) => {
            assert_eq!(program, "definitely-not-an-installed-encoder");
        }
        other => panic!("expected EncoderUnavailable, got {:?}", other),
    }
    assert!(list(dir.path()).is_empty());
}

#[cfg(unix)]
#[test]
fn test_failing_encoder_exit_status_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let encoder = FfmpegEncoder::new(EncoderConfig {
        program: "false".to_string(),
        ..EncoderConfig::default()
    });
    let clip = Buffer::<44100>::from_samples(vec![0.0; 32]);
    match encode_asset(&clip, "move", dir.path(), &encoder) {
        Err(SfxError::EncoderFailed { asset, status, .. }) => {
            assert_eq!(asset, "move");
            assert!(!status.success());
        }
        other => panic!("expected EncoderFailed, got {:?}", other),
    }
    assert!(list(dir.path()).is_empty());
}

#[test]
fn test_generator_stops_at_first_failure() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::default().with_output_dir(dir.path());
    let result = Generator::new(config, BrokenTranscoder).run();
    assert!(result.is_err());
    assert!(list(dir.path()).is_empty());
}

#[test]
fn test_unwritable_output_dir_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, b"file").unwrap();
    let config = GeneratorConfig::default().with_output_dir(blocker.join("audio"));
    match Generator::new(config, CopyTranscoder).run() {
        Err(SfxError::Io { .. }) => {}
        other => panic!("expected Io error, got {:?}", other.map(|v| v.len())),
    }
}
