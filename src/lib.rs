//! Heatsplat
//!
//! Renders click heatmaps as Gaussian splats over a vertical background
//! gradient and encodes the result as an uncompressed 24-bit BMP.
//!
//! # Pipeline
//!
//! - **Background**: one truncated gradient color per row
//! - **Intensity**: additive Gaussian splats, clipped at three radii
//! - **Normalize**: divide by the observed peak (or clamp, when disabled)
//! - **Colorize**: cold→hot ramp, alpha-blended over the background
//! - **Encode**: bottom-up BGR rows with 4-byte row padding
//!
//! # Example
//!
//! ```
//! use heatsplat::{Canvas, HeatmapConfig, Point};
//!
//! # fn main() -> heatsplat::Result<()> {
//! let points = [Point::new(0.25, 0.5), Point::new(0.75, 0.5)];
//! let bmp = heatsplat::generate_heatmap(Canvas::new(64, 32), &points, &HeatmapConfig::default())?;
//! assert_eq!(&bmp[0..2], b"BM");
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

pub mod color;
pub mod config;
pub mod error;
pub mod rendering;
pub mod sample;

pub use color::Color;
pub use config::HeatmapConfig;
pub use error::{Error, Result};
pub use rendering::PixelBuffer;

/// Canvas dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidCanvas { width: self.width, height: self.height });
        }
        if rendering::bmp::checked_file_size(self.width, self.height).is_none() {
            return Err(Error::CanvasTooLarge { width: self.width, height: self.height });
        }
        Ok(())
    }
}

/// A click position in normalized canvas coordinates
///
/// `x` and `y` are fractions of the canvas width and height. `weight` scales
/// the point's contribution; plain clicks use 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub weight: f64,
}

impl Point {
    /// Smallest weight accepted by [`Point::weighted`].
    pub const MIN_WEIGHT: f64 = 0.01;

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, weight: 1.0 }
    }

    /// A point with a custom weight, raised to [`Point::MIN_WEIGHT`] if smaller.
    pub fn weighted(x: f64, y: f64, weight: f64) -> Self {
        Self { x, y, weight: weight.max(Self::MIN_WEIGHT) }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

fn validate_points(points: &[Point]) -> Result<()> {
    let unit = 0.0..=1.0;
    for (index, p) in points.iter().enumerate() {
        if !unit.contains(&p.x) || !unit.contains(&p.y) {
            return Err(Error::PointOutOfRange { index, x: p.x, y: p.y });
        }
        if !(p.weight.is_finite() && p.weight > 0.0) {
            return Err(Error::InvalidWeight { index, weight: p.weight });
        }
    }
    Ok(())
}

/// Run the pipeline up to the blended pixel grid, without encoding.
pub fn render_pixels(canvas: Canvas, points: &[Point], config: &HeatmapConfig) -> Result<PixelBuffer> {
    canvas.validate()?;
    config.validate()?;
    validate_points(points)?;

    let bg_rows = rendering::background::background_rows(canvas.height, config.background);

    let mut grid = rendering::intensity::accumulate(canvas, points, config.radius);
    if config.auto_normalize {
        grid.normalize();
    } else {
        grid.clamp_unit();
    }

    Ok(rendering::colorize::colorize(&grid, &bg_rows, config))
}

/// Render `points` onto `canvas` and return the encoded BMP bytes.
///
/// Pure: identical inputs always produce identical bytes.
pub fn generate_heatmap(canvas: Canvas, points: &[Point], config: &HeatmapConfig) -> Result<Vec<u8>> {
    let pixels = render_pixels(canvas, points, config)?;
    let bytes = rendering::bmp::encode(&pixels)?;
    debug!("encoded {}x{} bitmap, {} bytes", canvas.width, canvas.height, bytes.len());
    Ok(bytes)
}

/// Write `bytes` to `path`, creating the parent directory if needed.
pub fn write_bitmap(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}
