//! Gaussian splat accumulation and normalization.
//!
//! Each point spreads `weight * exp(-d² / σ²)` (σ² = r²/2) over the pixels
//! within 3r of its center. Tails past 3r are dropped.

use log::debug;

use crate::{Canvas, Point};

/// Seed for the running maximum; keeps normalization finite for empty input.
pub const MAX_INTENSITY_SEED: f64 = 1e-6;

/// Per-pixel intensities, row-major with the top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityGrid {
    pub width: u32,
    pub height: u32,
    pub values: Vec<f64>,
    /// Largest accumulated value, never below [`MAX_INTENSITY_SEED`]
    pub max: f64,
}

impl IntensityGrid {
    pub fn zeroed(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            values: vec![0.0; canvas.width as usize * canvas.height as usize],
            max: MAX_INTENSITY_SEED,
        }
    }

    pub fn get(&self, x: u32, y: u32) -> f64 {
        self.values[self.index(x, y)]
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Add one point's splat.
    pub fn splat(&mut self, point: &Point, radius: f64) {
        let sigma2 = radius * radius / 2.0;
        let cx = point.x * f64::from(self.width);
        let cy = point.y * f64::from(self.height);
        let reach = 3.0 * radius;

        // `as i64` truncates toward zero, then the box is clipped to the canvas.
        let x0 = ((cx - reach) as i64).max(0);
        let x1 = ((cx + reach) as i64).min(i64::from(self.width) - 1);
        let y0 = ((cy - reach) as i64).max(0);
        let y1 = ((cy + reach) as i64).min(i64::from(self.height) - 1);

        for y in y0..=y1 {
            let dy = y as f64 - cy;
            let dy2 = dy * dy;
            let row = y as usize * self.width as usize;
            for x in x0..=x1 {
                let dx = x as f64 - cx;
                let dist2 = dx * dx + dy2;
                let cell = &mut self.values[row + x as usize];
                *cell += point.weight * (-dist2 / sigma2).exp();
                if *cell > self.max {
                    self.max = *cell;
                }
            }
        }
    }

    /// Scale so the peak becomes exactly 1.0.
    pub fn normalize(&mut self) {
        let max = self.max;
        for v in &mut self.values {
            *v /= max;
        }
    }

    /// Clamp raw intensities into [0, 1] without rescaling.
    pub fn clamp_unit(&mut self) {
        for v in &mut self.values {
            *v = v.clamp(0.0, 1.0);
        }
    }

    pub fn peak(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

/// Accumulate every point into a fresh grid. The result is not normalized.
pub fn accumulate(canvas: Canvas, points: &[Point], radius: f64) -> IntensityGrid {
    let mut grid = IntensityGrid::zeroed(canvas);
    for p in points {
        grid.splat(p, radius);
    }
    debug!(
        "accumulated {} point(s) on {}x{} canvas, max intensity {:.6}",
        points.len(),
        canvas.width,
        canvas.height,
        grid.max
    );
    grid
}
