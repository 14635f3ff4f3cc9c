//! Map normalized intensity onto the cold→hot ramp and composite it over the background.

use crate::color::Color;
use crate::config::HeatmapConfig;
use crate::rendering::intensity::IntensityGrid;
use crate::rendering::PixelBuffer;

/// Heat color and overlay alpha for a normalized intensity `t`.
pub fn heat_at(t: f64, config: &HeatmapConfig) -> (Color, f64) {
    (config.cold_color.lerp(config.hot_color, t), config.opacity * t)
}

/// Blend every cell of `grid` over its row's background color.
///
/// `bg_rows` must hold one entry per grid row.
pub fn colorize(grid: &IntensityGrid, bg_rows: &[Color], config: &HeatmapConfig) -> PixelBuffer {
    debug_assert_eq!(bg_rows.len(), grid.height as usize);

    let mut pixels = Vec::with_capacity(grid.values.len());
    for (row, &bg) in grid.values.chunks(grid.width as usize).zip(bg_rows) {
        pixels.extend(row.iter().map(|&t| {
            let (heat, alpha) = heat_at(t, config);
            bg.blend(heat, alpha)
        }));
    }

    PixelBuffer { width: grid.width, height: grid.height, pixels }
}
