//! repotone - turn a Git repository's history into art
//!
//! Run with: cargo run -- <repo> [-a out.wav]

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{bail, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use repotone::analyze::RepoAnalyzer;
use repotone::io::wav;
use repotone::sonify::{Sonifier, SonifyConfig};
use repotone::visual::{ArtRenderer, ArtStyle, CanvasConfig};

/// Generate visual and audio art from Git repositories.
#[derive(Debug, Parser)]
#[command(name = "repotone", version, about)]
struct Cli {
    /// Path to a Git repository
    #[arg(default_value = ".")]
    repo_path: PathBuf,

    /// Output image file path
    #[arg(short, long, default_value = "repo-art.png")]
    output: PathBuf,

    /// Output audio file path (e.g. repo-art.wav)
    #[arg(short, long)]
    audio: Option<PathBuf>,

    /// Visual style
    #[arg(short, long, value_enum, default_value = "particle")]
    style: ArtStyle,

    /// Image width in pixels
    #[arg(short, long, default_value_t = 1920)]
    width: u32,

    /// Image height in pixels
    #[arg(short = 'H', long, default_value_t = 1080)]
    height: u32,

    /// Audio sample rate in Hz
    #[arg(long, default_value_t = 44_100)]
    sample_rate: u32,

    /// Seconds of audio per commit
    #[arg(long, default_value_t = 0.1)]
    note_duration: f32,

    /// Frequency of an unmodulated note in Hz
    #[arg(long, default_value_t = 220.0)]
    base_frequency: f32,

    /// Also write the extracted features as JSON
    #[arg(long, value_name = "FILE")]
    dump: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let analyzer = RepoAnalyzer::open(&cli.repo_path)?;
    info!(repo = %analyzer.repo_path().display(), "analyzing repository");
    let features = analyzer.extract_features();
    info!(
        commits = features.commits.len(),
        contributors = features.contributors.len(),
        "extracted history"
    );

    if features.commits.is_empty() {
        bail!("no commits found in repository");
    }

    if let Some(dump) = &cli.dump {
        fs::write(dump, serde_json::to_string_pretty(&features)?)?;
        info!(path = %dump.display(), "wrote feature dump");
    }

    let renderer = ArtRenderer::new(CanvasConfig {
        width: cli.width,
        height: cli.height,
        style: cli.style,
    });
    renderer.render(&features, &cli.output)?;
    info!(path = %cli.output.display(), style = ?cli.style, "wrote artwork");

    if let Some(audio_path) = &cli.audio {
        let sonifier = Sonifier::new(SonifyConfig {
            sample_rate: cli.sample_rate,
            note_duration: cli.note_duration,
            base_frequency: cli.base_frequency,
        })?;
        let samples = sonifier.render(&features.commits);
        wav::write_wav(audio_path, &samples, cli.sample_rate)?;
        info!(
            path = %audio_path.display(),
            seconds = samples.len() as f32 / cli.sample_rate as f32,
            "wrote sonification"
        );
    }

    Ok(())
}
