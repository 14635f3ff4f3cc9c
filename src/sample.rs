//! The fixed demonstration render used for documentation screenshots.

use crate::{Canvas, HeatmapConfig, Point};

pub const CANVAS: Canvas = Canvas::new(900, 600);
pub const RADIUS: f64 = 70.0;
pub const OPACITY: f64 = 0.65;
pub const OUTPUT_PATH: &str = "artifacts/sample_heatmap.bmp";

/// Clustered clicks: a left pair, a center pair and a right-hand triple.
pub const CLICKS: [Point; 7] = [
    Point::new(0.22, 0.30),
    Point::new(0.28, 0.32),
    Point::new(0.50, 0.55),
    Point::new(0.52, 0.60),
    Point::new(0.76, 0.42),
    Point::new(0.78, 0.45),
    Point::new(0.80, 0.40),
];

pub fn config() -> HeatmapConfig {
    HeatmapConfig { radius: RADIUS, opacity: OPACITY, ..Default::default() }
}
