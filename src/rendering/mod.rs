//! Rendering pipeline
//!
//! background rows -> intensity accumulation -> normalization -> colorize/blend -> BMP

pub mod background;
pub mod bmp;
pub mod colorize;
pub mod intensity;

use crate::color::Color;

/// Final blended pixels, row-major with the top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl PixelBuffer {
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self { width, height, pixels: vec![color; width as usize * height as usize] }
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Iterate rows from the top of the image down.
    pub fn rows(&self) -> std::slice::Chunks<'_, Color> {
        self.pixels.chunks(self.width as usize)
    }
}
