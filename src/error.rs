//! Error types for heatmap generation

use thiserror::Error;

/// Result type alias for heatmap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating or decoding a heatmap
#[derive(Error, Debug)]
pub enum Error {
    /// Canvas has a zero dimension
    #[error("Invalid canvas: {width}x{height} (both dimensions must be at least 1)")]
    InvalidCanvas { width: u32, height: u32 },

    /// Canvas too large for the bitmap header fields
    #[error("Canvas too large: {width}x{height} (width and height must fit in i32 and the file in 4 GiB)")]
    CanvasTooLarge { width: u32, height: u32 },

    /// Splat radius is not a positive finite number
    #[error("Invalid radius: {0} (must be finite, > 0, and large enough that r²/2 is a normal float)")]
    InvalidRadius(f64),

    /// Opacity falls outside [0, 1]
    #[error("Invalid opacity: {0} (must be within [0, 1])")]
    InvalidOpacity(f64),

    /// A point coordinate falls outside the normalized range
    #[error("Point {index} out of range: ({x}, {y}) (coordinates must be within [0, 1])")]
    PointOutOfRange { index: usize, x: f64, y: f64 },

    /// A point weight is not a positive finite number
    #[error("Point {index} has invalid weight {weight}")]
    InvalidWeight { index: usize, weight: f64 },

    /// A byte stream could not be read back as a 24-bit bitmap
    #[error("Malformed bitmap: {0}")]
    MalformedBitmap(String),

    /// Filesystem error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
