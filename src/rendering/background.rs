//! Vertical background gradient, dark at the top and full brightness at the bottom.

use crate::color::Color;

/// Brightness factor for row `y` of a canvas `height` rows tall.
pub fn gradient_factor(y: u32, height: u32) -> f64 {
    let span = height.saturating_sub(1).max(1);
    0.05 + 0.95 * (f64::from(y) / f64::from(span))
}

/// One color per row, base channels scaled (and truncated) by the row's factor.
pub fn background_rows(height: u32, base: Color) -> Vec<Color> {
    (0..height)
        .map(|y| base.scaled_trunc(gradient_factor(y, height)))
        .collect()
}
