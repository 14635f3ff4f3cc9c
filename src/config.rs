//! Rendering configuration

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{Error, Result};

/// Configuration for a heatmap render
///
/// Defaults match the reference sample script: a teal-to-orange ramp over a
/// near-white background, 60px spots at 60% peak opacity.
///
/// # Examples
///
/// ```
/// let cfg = heatsplat::HeatmapConfig::default();
/// assert_eq!(cfg.radius, 60.0);
/// assert!(cfg.auto_normalize);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapConfig {
    /// Spot radius in pixels; controls spread and falloff
    pub radius: f64,
    /// Overlay alpha at peak intensity, within [0, 1]
    pub opacity: f64,
    /// Color at zero intensity
    pub cold_color: Color,
    /// Color at full intensity
    pub hot_color: Color,
    /// Base color of the vertical background gradient
    pub background: Color,
    /// Divide by the observed peak so the hottest pixel maps to 1.0.
    /// When disabled, raw intensities are clamped into [0, 1] instead.
    pub auto_normalize: bool,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            radius: 60.0,
            opacity: 0.6,
            cold_color: Color::rgb(0, 188, 212),
            hot_color: Color::rgb(255, 87, 34),
            background: Color::rgb(245, 247, 250),
            auto_normalize: true,
        }
    }
}

impl HeatmapConfig {
    pub fn validate(&self) -> Result<()> {
        // σ² = r²/2 divides every splat exponent; it must not underflow.
        let sigma2 = self.radius * self.radius / 2.0;
        if !(self.radius.is_finite() && self.radius > 0.0 && sigma2.is_normal()) {
            return Err(Error::InvalidRadius(self.radius));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(Error::InvalidOpacity(self.opacity));
        }
        Ok(())
    }
}
