//! 8-bit RGB color and the channel arithmetic used by the blender.
//!
//! All rounding goes through [`round_channel`], which rounds half to even so
//! output matches the reference images byte for byte. The background gradient
//! is the one place that truncates instead (see `rendering::background`).

use serde::{Deserialize, Serialize};

/// An (r, g, b) triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel by `factor`, truncating toward zero.
    pub fn scaled_trunc(self, factor: f64) -> Self {
        let s = |c: u8| (f64::from(c) * factor) as u8;
        Self::rgb(s(self.r), s(self.g), s(self.b))
    }

    /// Linear interpolation from `self` (t = 0) to `other` (t = 1), rounded per channel.
    pub fn lerp(self, other: Color, t: f64) -> Self {
        let l = |a: u8, b: u8| {
            let a = f64::from(a);
            round_channel(a + (f64::from(b) - a) * t)
        };
        Self::rgb(l(self.r, other.r), l(self.g, other.g), l(self.b, other.b))
    }

    /// Composite `fg` over `self` with the given alpha.
    pub fn blend(self, fg: Color, alpha: f64) -> Self {
        Self::rgb(
            blend_channel(self.r, fg.r, alpha),
            blend_channel(self.g, fg.g, alpha),
            blend_channel(self.b, fg.b, alpha),
        )
    }

    /// Channels in bitmap storage order.
    pub fn to_bgr(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

/// Round half to even and clamp into the channel range.
pub fn round_channel(v: f64) -> u8 {
    v.round_ties_even().clamp(0.0, 255.0) as u8
}

pub fn blend_channel(bg: u8, fg: u8, alpha: f64) -> u8 {
    round_channel(f64::from(bg) * (1.0 - alpha) + f64::from(fg) * alpha)
}
