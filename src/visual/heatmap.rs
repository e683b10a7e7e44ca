//! Heatmap style: monthly activity columns with a vertical fade.
//!
//! One column per timeline month, ten stacked cells per column. Cell
//! color runs a blue → green → yellow → white heat ramp with the month's
//! intensity, fading toward the background further down the column.

use plotters::coord::Shift;
use plotters::prelude::*;

use super::blend;
use crate::analyze::RepoFeatures;

const BACKGROUND: RGBColor = RGBColor(5, 5, 10);
const ROWS: i32 = 10;
/// Gutter between cells, px.
const GUTTER: i32 = 2;

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
    let cell_width = (width / (timeline.len() as u32 + 1)) as i32;
    let cell_height = height as i32 / ROWS;

    for (i, &count) in timeline.values().enumerate() {
        let intensity = count as f32 / busiest;
        let x = i as i32 * cell_width;
        let color = heat_color(intensity);

        for row in 0..ROWS {
            let y = row * cell_height;
            let alpha = intensity * (1.0 - row as f32 * 0.08);
            let cell = blend(color, BACKGROUND, alpha);
            root.draw(&Rectangle::new(
                [(x, y), (x + cell_width - GUTTER, y + cell_height - GUTTER)],
                cell.filled(),
            ))?;
        }
    }

    Ok(())
}

/// Blue → green → yellow → white heat ramp over [0, 1].
fn heat_color(intensity: f32) -> RGBColor {
    if intensity < 0.3 {
        RGBColor(0, (intensity * 255.0 / 0.3) as u8, 128)
    } else if intensity < 0.6 {
        RGBColor(((intensity - 0.3) * 255.0 / 0.3) as u8, 255, 128)
    } else {
        RGBColor(255, 255, (255.0 * (1.0 - (intensity - 0.6) / 0.4)) as u8)
    }
}
