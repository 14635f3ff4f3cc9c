//! Uncompressed 24-bit BMP encoding.
//!
//! Layout: 14-byte file header, 40-byte BITMAPINFOHEADER, then pixel rows
//! bottom-to-top in BGR order, each padded to a multiple of four bytes.

use crate::error::{Error, Result};
use crate::rendering::PixelBuffer;

pub const FILE_HEADER_LEN: u32 = 14;
pub const INFO_HEADER_LEN: u32 = 40;
pub const PIXEL_DATA_OFFSET: u32 = FILE_HEADER_LEN + INFO_HEADER_LEN;
pub const BITS_PER_PIXEL: u16 = 24;
/// ~72 DPI
pub const PIXELS_PER_METRE: i32 = 2835;

/// Zero bytes appended to each row of `width` pixels.
pub fn row_padding(width: u32) -> usize {
    (4 - (width as usize * 3) % 4) % 4
}

/// Bytes of pixel data (padding included) for a `width`x`height` image.
pub fn pixel_data_len(width: u32, height: u32) -> usize {
    (width as usize * 3 + row_padding(width)) * height as usize
}

/// Total file size, or `None` when the header fields can't hold the image.
///
/// Width and height are stored as signed 32-bit values and both sizes as
/// unsigned 32-bit values.
pub fn checked_file_size(width: u32, height: u32) -> Option<u32> {
    i32::try_from(width).ok()?;
    i32::try_from(height).ok()?;
    let row = u64::from(width) * 3 + row_padding(width) as u64;
    u32::try_from(u64::from(PIXEL_DATA_OFFSET) + row * u64::from(height)).ok()
}

/// Serialize `buffer` into a complete BMP byte stream.
pub fn encode(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    let too_large = || Error::CanvasTooLarge { width: buffer.width, height: buffer.height };
    let file_size = checked_file_size(buffer.width, buffer.height).ok_or_else(too_large)?;
    let data_len = file_size - PIXEL_DATA_OFFSET;
    let width = i32::try_from(buffer.width).map_err(|_| too_large())?;
    let height = i32::try_from(buffer.height).map_err(|_| too_large())?;

    let padding = [0u8; 3];
    let pad = row_padding(buffer.width);
    let mut out = Vec::with_capacity(file_size as usize);

    // File header
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&PIXEL_DATA_OFFSET.to_le_bytes());

    // Info header
    out.extend_from_slice(&INFO_HEADER_LEN.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&data_len.to_le_bytes());
    out.extend_from_slice(&PIXELS_PER_METRE.to_le_bytes());
    out.extend_from_slice(&PIXELS_PER_METRE.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());

    for row in buffer.rows().rev() {
        for px in row {
            out.extend_from_slice(&px.to_bgr());
        }
        out.extend_from_slice(&padding[..pad]);
    }

    Ok(out)
}

/// Header fields read back from an encoded bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeader {
    pub file_size: u32,
    pub pixel_offset: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_metre: i32,
    pub y_pixels_per_metre: i32,
}

impl BmpHeader {
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < PIXEL_DATA_OFFSET as usize {
            return Err(Error::MalformedBitmap(format!(
                "need at least {} header bytes, got {}",
                PIXEL_DATA_OFFSET,
                bytes.len()
            )));
        }
        if &bytes[0..2] != b"BM" {
            return Err(Error::MalformedBitmap("missing BM signature".into()));
        }

        let info_len = read_u32(bytes, 14);
        if info_len != INFO_HEADER_LEN {
            return Err(Error::MalformedBitmap(format!(
                "unsupported info header size {}",
                info_len
            )));
        }

        Ok(Self {
            file_size: read_u32(bytes, 2),
            pixel_offset: read_u32(bytes, 10),
            width: read_u32(bytes, 18) as i32,
            height: read_u32(bytes, 22) as i32,
            planes: read_u16(bytes, 26),
            bits_per_pixel: read_u16(bytes, 28),
            compression: read_u32(bytes, 30),
            image_size: read_u32(bytes, 34),
            x_pixels_per_metre: read_u32(bytes, 38) as i32,
            y_pixels_per_metre: read_u32(bytes, 42) as i32,
        })
    }
}

// Callers guarantee `at + N <= bytes.len()`.
fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}
