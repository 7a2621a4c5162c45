//! Per-pixel color remaps: grayscale, sepia and invert.
//!
//! Color maps are cumulative. They operate on the current image, so applying
//! sepia twice compounds. Alpha is never touched.

use serde::{Deserialize, Serialize};

use crate::luminance::calculate_luminance_u8;
use crate::raster::{for_each_row, RasterBuffer, CHANNELS};

/// A stateless color remap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMap {
    /// Replace each pixel with its BT.601 luminance.
    Grayscale,
    /// Classic warm sepia tone matrix.
    Sepia,
    /// Photographic negative.
    Invert,
}

/// Apply a color map, returning a new buffer.
pub fn apply_color_map(buffer: &RasterBuffer, map: ColorMap) -> RasterBuffer {
    let mut output = buffer.clone();
    apply_color_map_in_place(&mut output, map);
    output
}

/// Apply a color map directly to `buffer`.
pub fn apply_color_map_in_place(buffer: &mut RasterBuffer, map: ColorMap) {
    let remap: fn(u8, u8, u8) -> [u8; 3] = match map {
        ColorMap::Grayscale => grayscale_pixel,
        ColorMap::Sepia => sepia_pixel,
        ColorMap::Invert => invert_pixel,
    };

    let row_len = buffer.row_len();
    for_each_row(buffer.as_raw_mut(), row_len, |_, row| {
        for chunk in row.chunks_exact_mut(CHANNELS) {
            let [r, g, b] = remap(chunk[0], chunk[1], chunk[2]);
            chunk[0] = r;
            chunk[1] = g;
            chunk[2] = b;
        }
    });
}

/// Convert to grayscale.
pub fn grayscale(buffer: &RasterBuffer) -> RasterBuffer {
    apply_color_map(buffer, ColorMap::Grayscale)
}

/// Apply the sepia tone matrix.
pub fn sepia(buffer: &RasterBuffer) -> RasterBuffer {
    apply_color_map(buffer, ColorMap::Sepia)
}

/// Invert the color channels. Applying it twice restores the input exactly.
pub fn invert(buffer: &RasterBuffer) -> RasterBuffer {
    apply_color_map(buffer, ColorMap::Invert)
}

#[inline]
fn grayscale_pixel(r: u8, g: u8, b: u8) -> [u8; 3] {
    let gray = calculate_luminance_u8(r, g, b);
    [gray, gray, gray]
}

#[inline]
fn sepia_pixel(r: u8, g: u8, b: u8) -> [u8; 3] {
    let (r, g, b) = (r as u32, g as u32, b as u32);
    // Coefficients in thousandths; all positive, so only the upper bound can be exceeded.
    let tone = |cr: u32, cg: u32, cb: u32| {
        ((cr * r + cg * g + cb * b + 500) / 1000).min(255) as u8
    };
    [tone(393, 769, 189), tone(349, 686, 168), tone(272, 534, 131)]
}

#[inline]
fn invert_pixel(r: u8, g: u8, b: u8) -> [u8; 3] {
    [255 - r, 255 - g, 255 - b]
}


// ============================================================================
// Property-Based Tests
// ============================================================================
