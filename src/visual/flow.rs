//! Flow style: layered waves traced from monthly commit density.
//!
//! Each month in the timeline contributes three short phase-offset wave
//! strokes around the canvas midline; busy months swing wider and glow
//! brighter, so bursts of development read as turbulence.

use std::f32::consts::PI;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::analyze::RepoFeatures;

const BACKGROUND: RGBColor = RGBColor(15, 15, 25);
const WAVE_COLORS: [RGBColor; 3] = [
    RGBColor(100, 150, 255), // blue
    RGBColor(150, 100, 255), // purple
    RGBColor(255, 100, 150), // pink
];
/// Horizontal reach of one month's stroke, px each side.
const STROKE_REACH: i32 = 20;

pub(crate) fn draw(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    features: &RepoFeatures,
) -> Result<(), Box<dyn std::error::Error>> {
    root.fill(&BACKGROUND)?;

    let timeline = &features.timeline;
    let Some(&busiest) = timeline.values().max() else {
        return Ok(());
    };
    let busiest = busiest.max(1) as f32;

    let (width, height) = root.dim_in_pixel();
    let months = timeline.len();

    for (i, &count) in timeline.values().enumerate() {
        let t = i as f32 / months.saturating_sub(1).max(1) as f32;
        let x = (t * (width as f32 - 100.0)) as i32 + 50;
        let intensity = count as f32 / busiest;
        let amplitude = intensity * (height / 3) as f32;
        let y_base = (height / 2) as f32;

        for wave in 0..WAVE_COLORS.len() {
            let phase = wave as f32 * PI / 3.0;
            let swing = amplitude * (t * 4.0 + phase).sin()
                + intensity * 50.0 * ((t * 8.0 + wave as f32) * PI).sin();
            let y = (y_base + swing) as i32;

            let points: Vec<(i32, i32)> = (-STROKE_REACH..=STROKE_REACH)
                .step_by(2)
                .map(|offset| (x + offset, y))
                .filter(|&(px, _)| px >= 0 && px < width as i32)
                .collect();
            if points.len() > 1 {
                let color = wave_color(intensity, wave);
                root.draw(&PathElement::new(points, color.stroke_width(2)))?;
            }
        }
    }

    Ok(())
}

/// Wave color dimmed toward 30% brightness in quiet months.
fn wave_color(intensity: f32, wave: usize) -> RGBColor {
    let base = WAVE_COLORS[wave % WAVE_COLORS.len()];
    let level = 0.3 + intensity * 0.7;
    RGBColor(
        (f32::from(base.0) * level) as u8,
        (f32::from(base.1) * level) as u8,
        (f32::from(base.2) * level) as u8,
    )
}
