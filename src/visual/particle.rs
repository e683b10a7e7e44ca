//! Particle style: each commit as a glowing dot.
//!
//! Commits are placed on a time/activity plane: horizontal position
//! follows the commit's place in the history, vertical position falls as
//! activity rises, so heavy commits float toward the top. Color encodes
//! the add/delete balance (warm for additions, cool for deletions) and a
//! soft halo around each dot fakes a glow on the dark background.

use plotters::coord::Shift;
use plotters::prelude::*;

use super::blend;
use crate::analyze::{Commit, RepoFeatures};
use crate::sonify::EventSpan;

const BACKGROUND: RGBColor = RGBColor(10, 10, 20);
const LINK_COLOR: RGBColor = RGBColor(50, 50, 80);
/// Canvas inset, px; keeps particles off the exact edge.
const MARGIN: f32 = 50.0;
/// Links are only drawn between commits closer than this, px.
const LINK_REACH: i32 = 100;

pub(crate) fn draw(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    features: &RepoFeatures,
) -> Result<(), Box<dyn std::error::Error>> {
    root.fill(&BACKGROUND)?;

    let commits = &features.commits;
    let Some(span) = EventSpan::of(commits) else {
        return Ok(());
    };

    let (width, height) = root.dim_in_pixel();
    let place = |commit: &Commit| -> (i32, i32) {
        let x = span.position(commit.timestamp) * (width as f32 - 2.0 * MARGIN) + MARGIN;
        let altitude = 1.0 - span.relative_activity(commit.activity());
        let y = altitude * (height as f32 - 2.0 * MARGIN) + MARGIN;
        (x as i32, y as i32)
    };

    for commit in commits {
        let (x, y) = place(commit);
        let relative = span.relative_activity(commit.activity());
        let radius = ((relative * 15.0) as i32).clamp(2, 20);
        let color = particle_color(commit, relative);

        // Halo rings, widest and faintest first, then the crisp core.
        for ring in (1..=3).rev() {
            let alpha = (100.0 / ring as f32) / 255.0;
            let halo = blend(color, BACKGROUND, alpha);
            root.draw(&Circle::new((x, y), radius * ring, halo.filled()))?;
        }
        root.draw(&Circle::new((x, y), radius, color.filled()))?;
    }

    // Faint links between temporally adjacent commits that land nearby.
    for pair in commits.windows(2) {
        let (x1, y1) = place(&pair[0]);
        let (x2, y2) = place(&pair[1]);
        if (x2 - x1).abs() < LINK_REACH {
            root.draw(&PathElement::new(
                vec![(x1, y1), (x2, y2)],
                LINK_COLOR.stroke_width(1),
            ))?;
        }
    }

    Ok(())
}

/// Warm for additions, cool for deletions, gray when nothing changed.
fn particle_color(commit: &Commit, relative_activity: f32) -> RGBColor {
    if commit.activity() == 0 {
        return RGBColor(128, 128, 128);
    }
    let add_ratio = commit.additions as f32 / commit.activity() as f32;
    RGBColor(
        (255.0 * add_ratio) as u8,
        (100.0 + 155.0 * relative_activity) as u8,
        (255.0 * (1.0 - add_ratio)) as u8,
    )
}
