use anyhow::Context;
use chess_sfx::{Generator, GeneratorConfig};

fn main() -> anyhow::Result<()> {
    // Log to stderr, `info` unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GeneratorConfig::default();
    let output_dir = config.output_dir.clone();

    Generator::with_ffmpeg(config)
        .run()
        .with_context(|| format!("failed to generate audio into {}", output_dir.display()))?;

    Ok(())
}
