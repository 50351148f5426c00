//! Language pie chart
//!
//! Painted with plotters into an in-memory RGB buffer so the PDF writer can
//! embed the pixels directly. Slice labels are not drawn on the bitmap; the
//! PDF prints a legend next to it, keyed by [`slice_color`].

use std::f64::consts::PI;
use std::fmt;

use plotters::prelude::*;
use tracing::debug;

use crate::error::{self, Result};

/// Chart width and height in pixels
pub const CHART_SIZE: u32 = 600;

/// Angle of the first slice edge, counterclockwise from 3 o'clock
pub const START_ANGLE_DEG: f64 = 140.0;

const MARGIN: u32 = 20;

/// Raw 8-bit RGB image
#[derive(Clone, PartialEq, Eq)]
pub struct ChartImage {
    pub width: u32,
    pub height: u32,
    /// Row-major pixels, three bytes each
    pub rgb: Vec<u8>,
}

impl ChartImage {
    /// Pixel at `(x, y)`
    #[allow(dead_code)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 3) as usize;
        Some((self.rgb[i], self.rgb[i + 1], self.rgb[i + 2]))
    }
}

impl fmt::Debug for ChartImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgb.len())
            .finish()
    }
}

/// Fill color of the `index`th slice
pub fn slice_color(index: usize) -> (u8, u8, u8) {
    Palette99::COLORS[index % Palette99::COLORS.len()]
}

/// Paint a pie chart with one slice per count, in order
///
/// `labels` and `counts` must have the same length. Slices are laid out
/// counterclockwise starting at [`START_ANGLE_DEG`].
pub fn draw_pie(labels: &[&str], counts: &[u64]) -> Result<ChartImage> {
    if labels.len() != counts.len() {
        return Err(error::chart_failed(format!(
            "{} labels for {} values",
            labels.len(),
            counts.len()
        )));
    }

    let (width, height) = (CHART_SIZE, CHART_SIZE);
    let mut rgb = vec![0_u8; (width * height * 3) as usize];
    paint(&mut rgb, (width, height), counts).map_err(|e| error::chart_failed(e.to_string()))?;

    debug!(slices = counts.len(), labels = ?labels, "painted chart");
    Ok(ChartImage { width, height, rgb })
}

fn paint(
    buffer: &mut [u8],
    size: (u32, u32),
    counts: &[u64],
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::with_buffer(buffer, size).into_drawing_area();
    root.fill(&WHITE)?;

    let total: u64 = counts.iter().sum();
    if total > 0 {
        let center = (f64::from(size.0) / 2.0, f64::from(size.1) / 2.0);
        let radius = f64::from(size.0.min(size.1) / 2 - MARGIN);

        let mut start = START_ANGLE_DEG;
        for (index, &count) in counts.iter().enumerate() {
            let sweep = 360.0 * count as f64 / total as f64;
            let (r, g, b) = slice_color(index);
            let points = wedge(center, radius, start, sweep);
            root.draw(&Polygon::new(points, RGBColor(r, g, b).filled()))?;
            start += sweep;
        }

        // Separate neighbouring slices with a thin white edge
        if counts.iter().filter(|&&c| c > 0).count() > 1 {
            let mut angle = START_ANGLE_DEG;
            for &count in counts {
                let edge = vec![point(center, 0.0, angle), point(center, radius, angle)];
                root.draw(&PathElement::new(edge, WHITE.stroke_width(3)))?;
                angle += 360.0 * count as f64 / total as f64;
            }
        }
    }

    root.present()?;
    Ok(())
}

/// Polygon approximating the slice from `start` sweeping `sweep` degrees
fn wedge(center: (f64, f64), radius: f64, start: f64, sweep: f64) -> Vec<(i32, i32)> {
    let steps = sweep.ceil().max(1.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    if sweep < 360.0 {
        points.push(point(center, 0.0, start));
    }
    for step in 0..=steps {
        let angle = start + sweep * step as f64 / steps as f64;
        points.push(point(center, radius, angle));
    }
    points
}

/// Screen coordinates at `angle` degrees, counterclockwise with y pointing down
fn point(center: (f64, f64), radius: f64, angle: f64) -> (i32, i32) {
    let theta = angle * PI / 180.0;
    (
        (center.0 + radius * theta.cos()).round() as i32,
        (center.1 - radius * theta.sin()).round() as i32,
    )
}
