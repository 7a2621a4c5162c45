//! Tone adjustment: brightness, contrast and saturation.
//!
//! Tone adjustment is non-cumulative. It is always computed from the
//! untouched original, so moving a slider back to zero restores the image.
//!
//! ## Adjustment Order
//! 1. Brightness
//! 2. Contrast
//! 3. Saturation
//!
//! Intermediate values stay in floating point and are only clamped and
//! rounded once at the end. Alpha is copied from the source pixel.

use crate::luminance::calculate_luminance;
use crate::raster::{for_each_row, RasterBuffer, CHANNELS};
use crate::AdjustmentParameters;

/// Apply tone adjustments to `original`, returning a new buffer.
///
/// # Arguments
/// * `original` - The untouched source image
/// * `params` - Brightness, contrast and saturation, all applied together.
///   Values outside the slider ranges are clamped first.
///
/// # Example
/// ```
/// use rasteredit_core::{adjust, AdjustmentParameters, RasterBuffer};
///
/// let original = RasterBuffer::filled(2, 2, [100, 100, 100, 255]);
/// let params = AdjustmentParameters::from_sliders(20, 0, 0);
/// let adjusted = adjust(&original, &params);
/// assert_eq!(adjusted.get(0, 0), [151, 151, 151, 255]);
/// ```
pub fn adjust(original: &RasterBuffer, params: &AdjustmentParameters) -> RasterBuffer {
    let mut output = original.clone();
    let params = &params.clamped();

    // Early exit if no adjustments
    if params.is_identity() {
        return output;
    }

    let row_len = output.row_len();
    for_each_row(output.as_raw_mut(), row_len, |_, row| {
        for chunk in row.chunks_exact_mut(CHANNELS) {
            let (r, g, b) = apply_to_pixel(
                chunk[0] as f32,
                chunk[1] as f32,
                chunk[2] as f32,
                params,
            );
            chunk[0] = to_channel(r);
            chunk[1] = to_channel(g);
            chunk[2] = to_channel(b);
        }
    });

    output
}

/// Apply all three steps to one pixel with channels on the 0-255 scale.
#[inline]
pub(crate) fn apply_to_pixel(
    r: f32,
    g: f32,
    b: f32,
    params: &AdjustmentParameters,
) -> (f32, f32, f32) {
    let (r, g, b) = apply_brightness(r, g, b, params.brightness);
    let (r, g, b) = apply_contrast(r, g, b, params.contrast);
    apply_saturation(r, g, b, params.saturation)
}

/// Shift every channel by `brightness * 255`.
#[inline]
fn apply_brightness(r: f32, g: f32, b: f32, brightness: f32) -> (f32, f32, f32) {
    let shift = brightness * 255.0;
    (r + shift, g + shift, b + shift)
}

/// Scale distance from mid-gray.
///
/// Formula: `output = ((input / 255 - 0.5) * contrast + 0.5) * 255`
#[inline]
fn apply_contrast(r: f32, g: f32, b: f32, contrast: f32) -> (f32, f32, f32) {
    let scale = |c: f32| ((c / 255.0 - 0.5) * contrast + 0.5) * 255.0;
    (scale(r), scale(g), scale(b))
}

/// Scale distance from the pixel's own luminance.
///
/// A factor of 0 produces grayscale, 1 leaves the pixel unchanged and
/// values above 1 push colors further apart.
#[inline]
fn apply_saturation(r: f32, g: f32, b: f32, saturation: f32) -> (f32, f32, f32) {
    let gray = calculate_luminance(r, g, b);
    (
        gray + (r - gray) * saturation,
        gray + (g - gray) * saturation,
        gray + (b - gray) * saturation,
    )
}

#[inline]
fn to_channel(v: f32) -> u8 {
    v.clamp(0.0, 255.0).round() as u8
}


// ============================================================================
// Property-Based Tests
// ============================================================================
