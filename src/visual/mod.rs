//! Abstract-art rendering over repository features.
//!
//! The visual path is independent of the sonifier: it consumes the same
//! extracted features and draws a PNG instead of synthesizing audio.
//! Every style is deterministic: rendering the same history twice
//! produces the same image.

/// Layered waves traced from monthly commit density.
pub mod flow;
/// Monthly activity columns with a vertical fade.
pub mod heatmap;
/// Each commit as a glowing particle on a time/activity canvas.
pub mod particle;

use std::fmt;
use std::fs;
use std::path::Path;

use clap::ValueEnum;
use plotters::prelude::*;
use tracing::debug;

use crate::analyze::RepoFeatures;

/// Which rendering strategy to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ArtStyle {
    #[default]
    Particle,
    Flow,
    Heatmap,
}

/// Canvas dimensions and style for one rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub style: ArtStyle,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            style: ArtStyle::Particle,
        }
    }
}

/// A drawing or encoding failure while producing the artwork.
#[derive(Debug, Clone)]
pub struct RenderError {
    message: String,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RenderError {}

/// Draws repository features onto a PNG canvas.
pub struct ArtRenderer {
    config: CanvasConfig,
}

impl ArtRenderer {
    pub fn new(config: CanvasConfig) -> Self {
        Self { config }
    }

    /// Render the configured style to a PNG at `path`.
    pub fn render(&self, features: &RepoFeatures, path: &Path) -> Result<(), RenderError> {
        self.draw(features, path).map_err(|err| RenderError {
            message: format!(
                "could not render {:?} artwork to {}: {err}",
                self.config.style,
                path.display()
            ),
        })
    }

    fn draw(&self, features: &RepoFeatures, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let root =
            BitMapBackend::new(path, (self.config.width, self.config.height)).into_drawing_area();
        match self.config.style {
            ArtStyle::Particle => particle::draw(&root, features)?,
            ArtStyle::Flow => flow::draw(&root, features)?,
            ArtStyle::Heatmap => heatmap::draw(&root, features)?,
        }
        root.present()?;

        debug!(
            path = %path.display(),
            style = ?self.config.style,
            width = self.config.width,
            height = self.config.height,
            "wrote artwork"
        );
        Ok(())
    }
}

/// Blend `fg` toward `bg`; `alpha` 1.0 keeps the pure foreground.
pub(crate) fn blend(fg: RGBColor, bg: RGBColor, alpha: f32) -> RGBColor {
    let channel = |f: u8, b: u8| (f32::from(f) * alpha + f32::from(b) * (1.0 - alpha)) as u8;
    RGBColor(
        channel(fg.0, bg.0),
        channel(fg.1, bg.1),
        channel(fg.2, bg.2),
    )
}
