//! Image rotation about the center, keeping the frame size.
//!
//! The output always has the input's dimensions. Source corners rotated out of
//! the frame are clipped, and frame areas the rotated source does not cover
//! become fully transparent.
//!
//! # Algorithm
//!
//! Exact multiples of 90 degrees are handled by index remapping and never
//! interpolate. Any other angle uses inverse mapping: for each output pixel
//! center we compute the source position and resample it.
//!
//! For a clockwise rotation by θ (y axis pointing down), the inverse transform
//! relative to the center `(cx, cy)` is:
//! ```text
//! src_x = dx * cos(θ) + dy * sin(θ) + cx
//! src_y = -dx * sin(θ) + dy * cos(θ) + cy
//! ```
//!
//! Resampling works on premultiplied alpha. Taps outside the source count as
//! transparent, which gives the rotated edges a soft antialiased falloff.

use serde::{Deserialize, Serialize};

use crate::raster::{for_each_row, Pixel, RasterBuffer, CHANNELS, TRANSPARENT};

/// Angles within this many degrees of a right angle snap to it.
const ANGLE_EPSILON: f64 = 0.001;

/// Interpolation filter for arbitrary-angle rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationFilter {
    /// Fast bilinear interpolation over a 2x2 neighborhood.
    Bilinear,
    /// Catmull-Rom bicubic interpolation over a 4x4 neighborhood.
    #[default]
    Bicubic,
    /// Lanczos3 interpolation over a 6x6 neighborhood, sharpest result.
    Lanczos3,
}

impl InterpolationFilter {
    /// Half-width of the filter window in source pixels.
    fn radius(self) -> i64 {
        match self {
            InterpolationFilter::Bilinear => 1,
            InterpolationFilter::Bicubic => 2,
            InterpolationFilter::Lanczos3 => 3,
        }
    }

    fn weight(self, x: f64) -> f64 {
        match self {
            InterpolationFilter::Bilinear => (1.0 - x.abs()).max(0.0),
            InterpolationFilter::Bicubic => catmull_rom_weight(x),
            InterpolationFilter::Lanczos3 => lanczos_weight(x, 3.0),
        }
    }
}

/// Rotate an image by `angle_degrees` using bicubic resampling.
///
/// Positive angles rotate clockwise on screen. The output keeps the input's
/// dimensions.
///
/// # Example
/// ```
/// use rasteredit_core::{rotate, RasterBuffer};
///
/// let mut img = RasterBuffer::new(3, 3);
/// img.set(0, 0, [255, 0, 0, 255]);
///
/// // Top-left moves to top-right after a clockwise quarter turn
/// let rotated = rotate(&img, 90.0);
/// assert_eq!(rotated.get(2, 0), [255, 0, 0, 255]);
/// ```
pub fn rotate(image: &RasterBuffer, angle_degrees: f32) -> RasterBuffer {
    rotate_with_filter(image, angle_degrees, InterpolationFilter::default())
}

/// Rotate an image with an explicit interpolation filter.
///
/// The filter only matters for angles that are not multiples of 90 degrees.
/// A NaN or infinite angle returns the input unchanged.
pub fn rotate_with_filter(
    image: &RasterBuffer,
    angle_degrees: f32,
    filter: InterpolationFilter,
) -> RasterBuffer {
    if image.is_empty() || !angle_degrees.is_finite() {
        return image.clone();
    }

    let angle = angle_degrees as f64;
    match quarter_turns(angle) {
        Some(0) => image.clone(),
        Some(turns) => rotate_quarter_turns(image, turns),
        None => rotate_resampled(image, angle, filter),
    }
}

/// Number of clockwise quarter turns (0-3) if `angle` is a right-angle multiple.
fn quarter_turns(angle: f64) -> Option<u8> {
    let normalized = angle.rem_euclid(360.0);
    let turns = (normalized / 90.0).round();
    if (normalized - turns * 90.0).abs() < ANGLE_EPSILON {
        Some((turns as i64).rem_euclid(4) as u8)
    } else {
        None
    }
}

/// Exact rotation by 90, 180 or 270 degrees clockwise, same frame size.
///
/// Pixel centers are compared in doubled coordinates relative to the frame
/// center so everything stays integral. When width and height differ in
/// parity the mapping falls on half pixels and is floored.
fn rotate_quarter_turns(image: &RasterBuffer, turns: u8) -> RasterBuffer {
    let (w, h) = (image.width() as i64, image.height() as i64);
    let offset = (w - h).div_euclid(2);
    let span = (w + h).div_euclid(2) - 1;

    let src = image.as_raw();
    let mut output = RasterBuffer::new(image.width(), image.height());
    let row_len = output.row_len();

    for_each_row(output.as_raw_mut(), row_len, |y, row| {
        let y = y as i64;
        for x in 0..w {
            let (sx, sy) = match turns {
                1 => (y + offset, span - x),
                2 => (w - 1 - x, h - 1 - y),
                _ => (span - y, x - offset),
            };
            if sx < 0 || sx >= w || sy < 0 || sy >= h {
                continue;
            }
            let s = ((sy * w + sx) as usize) * CHANNELS;
            let d = (x as usize) * CHANNELS;
            row[d..d + CHANNELS].copy_from_slice(&src[s..s + CHANNELS]);
        }
    });

    output
}

/// Arbitrary-angle rotation by inverse mapping and resampling.
fn rotate_resampled(
    image: &RasterBuffer,
    angle_degrees: f64,
    filter: InterpolationFilter,
) -> RasterBuffer {
    let (w, h) = (image.width() as f64, image.height() as f64);
    let angle_rad = angle_degrees.to_radians();
    let cos = angle_rad.cos();
    let sin = angle_rad.sin();

    // Center of the frame
    let cx = w / 2.0;
    let cy = h / 2.0;

    let mut output = RasterBuffer::new(image.width(), image.height());
    let row_len = output.row_len();

    for_each_row(output.as_raw_mut(), row_len, |dst_y, row| {
        // Translate destination pixel center to origin at frame center
        let dy = dst_y as f64 + 0.5 - cy;
        for (dst_x, out) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let dx = dst_x as f64 + 0.5 - cx;

            // Inverse rotation, then back to pixel-index space
            let src_x = dx * cos + dy * sin + cx - 0.5;
            let src_y = -dx * sin + dy * cos + cy - 0.5;

            out.copy_from_slice(&sample(image, src_x, src_y, filter));
        }
    });

    output
}

/// Sample `image` at fractional pixel-index coordinates.
///
/// Weights are separable. The total weight of the whole window is used for
/// normalization, including taps that fall outside the image and contribute
/// nothing, so coverage fades smoothly at the edges.
fn sample(image: &RasterBuffer, x: f64, y: f64, filter: InterpolationFilter) -> Pixel {
    let (w, h) = (image.width() as i64, image.height() as i64);
    let radius = filter.radius();

    // Entirely outside the filter's reach
    let reach = radius as f64;
    if x <= -reach || y <= -reach || x >= (w - 1) as f64 + reach || y >= (h - 1) as f64 + reach {
        return TRANSPARENT;
    }

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;
    let src = image.as_raw();

    // Premultiplied accumulators: r*a, g*a, b*a, a
    let mut sum = [0.0f64; 4];
    let mut weight_sum = 0.0;

    for ky in (1 - radius)..=radius {
        let py = y0 + ky;
        let wy = filter.weight(y - py as f64);
        for kx in (1 - radius)..=radius {
            let px = x0 + kx;
            let weight = filter.weight(x - px as f64) * wy;
            weight_sum += weight;

            if px < 0 || px >= w || py < 0 || py >= h || weight == 0.0 {
                continue;
            }

            let idx = ((py * w + px) as usize) * CHANNELS;
            let alpha = src[idx + 3] as f64;
            let aw = alpha * weight;
            sum[0] += src[idx] as f64 * aw;
            sum[1] += src[idx + 1] as f64 * aw;
            sum[2] += src[idx + 2] as f64 * aw;
            sum[3] += aw;
        }
    }

    if weight_sum <= 0.0 {
        return TRANSPARENT;
    }

    let alpha = (sum[3] / weight_sum).clamp(0.0, 255.0).round();
    if alpha <= 0.0 || sum[3] <= 0.0 {
        return TRANSPARENT;
    }

    // Un-premultiply: color = sum(c * a * w) / sum(a * w)
    let channel = |s: f64| (s / sum[3]).clamp(0.0, 255.0).round() as u8;
    [channel(sum[0]), channel(sum[1]), channel(sum[2]), alpha as u8]
}

/// Catmull-Rom cubic convolution kernel (a = -0.5).
///
/// ```text
/// W(x) = 1.5|x|³ - 2.5|x|² + 1            for |x| <= 1
/// W(x) = -0.5|x|³ + 2.5|x|² - 4|x| + 2    for 1 < |x| < 2
/// W(x) = 0                                otherwise
/// ```
fn catmull_rom_weight(x: f64) -> f64 {
    let x = x.abs();
    if x <= 1.0 {
        (1.5 * x - 2.5) * x * x + 1.0
    } else if x < 2.0 {
        ((-0.5 * x + 2.5) * x - 4.0) * x + 2.0
    } else {
        0.0
    }
}

/// Lanczos kernel weight function.
///
/// The Lanczos kernel is defined as:
/// ```text
/// L(x) = sinc(x) * sinc(x/a)  for |x| < a
/// L(x) = 0                     for |x| >= a
/// ```
///
/// where sinc(x) = sin(πx) / (πx)
fn lanczos_weight(x: f64, a: f64) -> f64 {
    if x.abs() < f64::EPSILON {
        return 1.0;
    }
    if x.abs() >= a {
        return 0.0;
    }

    let pi_x = std::f64::consts::PI * x;
    let pi_x_a = pi_x / a;

    (a * pi_x.sin() * pi_x_a.sin()) / (pi_x * pi_x)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test image with a unique value per pixel.
    fn test_image(width: u32, height: u32) -> RasterBuffer {
        let mut img = RasterBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                img.set(x, y, [v, 255 - v, v / 2, 255]);
            }
        }
        img
    }

    // ===================== Right-angle rotations =====================

    #[test]
    fn test_no_rotation() {
        let img = test_image(10, 6);
        assert_eq!(rotate(&img, 0.0), img);
        assert_eq!(rotate(&img, 360.0), img);
        assert_eq!(rotate(&img, -720.0), img);
    }

    #[test]
    fn test_non_finite_angle_is_noop() {
        let img = test_image(6, 4);
        for angle in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert_eq!(rotate(&img, angle), img, "angle {angle}");
        }
    }

    #[test]
    fn test_tiny_rotation_snaps_to_identity() {
        let img = test_image(10, 6);
        assert_eq!(rotate(&img, 0.0001), img);
    }

    #[test]
    fn test_quarter_turns_detection() {
        assert_eq!(quarter_turns(0.0), Some(0));
        assert_eq!(quarter_turns(90.0), Some(1));
        assert_eq!(quarter_turns(180.0), Some(2));
        assert_eq!(quarter_turns(270.0), Some(3));
        assert_eq!(quarter_turns(-90.0), Some(3));
        assert_eq!(quarter_turns(450.0), Some(1));
        assert_eq!(quarter_turns(359.9999), Some(0));
        assert_eq!(quarter_turns(45.0), None);
        assert_eq!(quarter_turns(89.9), None);
    }

    #[test]
    fn test_90_clockwise_square() {
        let img = test_image(3, 3);
        let result = rotate(&img, 90.0);
        // Clockwise: dst(x, y) = src(y, n - 1 - x)
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(result.get(x, y), img.get(y, 2 - x));
            }
        }
    }

    #[test]
    fn test_minus_90_counter_clockwise_square() {
        let img = test_image(4, 4);
        let result = rotate(&img, -90.0);
        // Counter-clockwise: dst(x, y) = src(n - 1 - y, x)
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(result.get(x, y), img.get(3 - y, x));
            }
        }
        assert_eq!(rotate(&img, 270.0), result);
    }

    #[test]
    fn test_180_rotation() {
        let img = test_image(5, 3);
        let result = rotate(&img, 180.0);
        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(result.get(x, y), img.get(4 - x, 2 - y));
            }
        }
        assert_eq!(rotate(&result, -180.0), img);
    }

    #[test]
    fn test_90_roundtrip_is_lossless() {
        let img = test_image(7, 7);
        assert_eq!(rotate(&rotate(&img, 90.0), -90.0), img);
        assert_eq!(rotate(&rotate(&img, -90.0), 90.0), img);
    }

    #[test]
    fn test_four_quarter_turns_identity() {
        let img = test_image(6, 6);
        let mut result = img.clone();
        for _ in 0..4 {
            result = rotate(&result, 90.0);
        }
        assert_eq!(result, img);
    }

    #[test]
    fn test_90_non_square_keeps_dimensions_and_clips() {
        let img = test_image(6, 2);
        let result = rotate(&img, 90.0);

        assert_eq!(result.width(), 6);
        assert_eq!(result.height(), 2);

        // Columns outside the rotated 2-wide band are uncovered
        for y in 0..2 {
            assert_eq!(result.get(0, y), TRANSPARENT);
            assert_eq!(result.get(5, y), TRANSPARENT);
        }
        // Center band comes from the source's middle columns
        // offset = 2, span = 3: dst(2, 0) = src(0 + 2, 3 - 2) = src(2, 1)
        assert_eq!(result.get(2, 0), img.get(2, 1));
    }

    // ===================== Resampled rotations =====================

    #[test]
    fn test_arbitrary_angle_keeps_dimensions() {
        let img = test_image(40, 25);
        for filter in [
            InterpolationFilter::Bilinear,
            InterpolationFilter::Bicubic,
            InterpolationFilter::Lanczos3,
        ] {
            let result = rotate_with_filter(&img, 33.0, filter);
            assert_eq!(result.width(), 40);
            assert_eq!(result.height(), 25);
            assert_eq!(result.byte_size(), img.byte_size());
        }
    }

    #[test]
    fn test_45_degree_corners_transparent() {
        let img = RasterBuffer::filled(30, 30, [200, 100, 50, 255]);
        let result = rotate(&img, 45.0);

        // Frame corners are not covered by the rotated square
        assert_eq!(result.get(0, 0), TRANSPARENT);
        assert_eq!(result.get(29, 0), TRANSPARENT);
        assert_eq!(result.get(0, 29), TRANSPARENT);
        assert_eq!(result.get(29, 29), TRANSPARENT);

        // Center stays solid and keeps its color
        assert_eq!(result.get(15, 15), [200, 100, 50, 255]);
    }

    #[test]
    fn test_uniform_interior_keeps_color() {
        // Premultiplied resampling must not darken fully covered pixels
        let img = RasterBuffer::filled(40, 40, [10, 220, 130, 255]);
        for filter in [
            InterpolationFilter::Bilinear,
            InterpolationFilter::Bicubic,
            InterpolationFilter::Lanczos3,
        ] {
            let result = rotate_with_filter(&img, 17.0, filter);
            for y in 15..25 {
                for x in 15..25 {
                    let [r, g, b, a] = result.get(x, y);
                    assert_eq!(a, 255);
                    assert!((r as i32 - 10).abs() <= 1);
                    assert!((g as i32 - 220).abs() <= 1);
                    assert!((b as i32 - 130).abs() <= 1);
                }
            }
        }
    }

    #[test]
    fn test_edge_fade_keeps_color() {
        // Partially covered pixels lose alpha, not color
        let img = RasterBuffer::filled(20, 20, [240, 30, 30, 255]);
        let result = rotate(&img, 30.0);
        for px in result.as_raw().chunks_exact(4) {
            if px[3] > 16 {
                assert!(px[0] > 200, "edge pixel darkened: {:?}", px);
            }
        }
    }

    #[test]
    fn test_rotation_center_preservation() {
        let size = 21;
        let mut img = RasterBuffer::filled(size, size, [0, 0, 0, 255]);
        let center = size / 2;
        for dy in 0..3 {
            for dx in 0..3 {
                img.set(center - 1 + dx, center - 1 + dy, [255, 255, 255, 255]);
            }
        }

        let result = rotate(&img, 37.0);
        assert!(result.get(center, center)[0] > 200);
    }

    #[test]
    fn test_small_images_do_not_panic() {
        for (w, h) in [(1, 1), (1, 9), (9, 1), (2, 3)] {
            let img = test_image(w, h);
            let result = rotate(&img, 30.0);
            assert_eq!(result.width(), w);
            assert_eq!(result.height(), h);
        }
    }

    #[test]
    fn test_empty_image() {
        let img = RasterBuffer::new(0, 4);
        assert_eq!(rotate(&img, 45.0), img);
    }

    #[test]
    fn test_opposite_rotations_mirror() {
        // Rotating a symmetric pattern by +a and -a gives mirror images
        let mut img = RasterBuffer::filled(21, 21, [0, 0, 0, 255]);
        for x in 0..21 {
            img.set(x, 10, [255, 255, 255, 255]);
        }
        let cw = rotate(&img, 20.0);
        let ccw = rotate(&img, -20.0);
        for y in 0..21 {
            for x in 0..21 {
                let a = cw.get(x, y);
                let b = ccw.get(20 - x, y);
                for c in 0..4 {
                    assert!((a[c] as i32 - b[c] as i32).abs() <= 1);
                }
            }
        }
    }

    // ===================== Kernel weights =====================

    #[test]
    fn test_catmull_rom_weights() {
        assert!((catmull_rom_weight(0.0) - 1.0).abs() < 1e-12);
        assert!(catmull_rom_weight(1.0).abs() < 1e-12);
        assert!(catmull_rom_weight(2.0).abs() < 1e-12);
        assert!((catmull_rom_weight(0.5) - catmull_rom_weight(-0.5)).abs() < 1e-12);

        // Partition of unity at any fractional offset
        for i in 0..10 {
            let f = i as f64 / 10.0;
            let sum: f64 = (-1..=2).map(|k| catmull_rom_weight(f - k as f64)).sum();
            assert!((sum - 1.0).abs() < 1e-9, "sum at {f} was {sum}");
        }
    }

    #[test]
    fn test_lanczos_weight_at_zero() {
        let w = lanczos_weight(0.0, 3.0);
        assert!((w - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_lanczos_weight_at_boundary() {
        let w = lanczos_weight(3.0, 3.0);
        assert!(w.abs() < f64::EPSILON);
    }

    #[test]
    fn test_lanczos_weight_symmetry() {
        let w1 = lanczos_weight(1.5, 3.0);
        let w2 = lanczos_weight(-1.5, 3.0);
        assert!((w1 - w2).abs() < 1e-10);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Square buffers, where quarter turns never clip.
    fn square_strategy() -> impl Strategy<Value = RasterBuffer> {
        (1u32..=16).prop_flat_map(|n| {
            let size = (n * n * 4) as usize;
            prop::collection::vec(any::<u8>(), size..=size)
                .prop_map(move |px| RasterBuffer::from_raw(n, n, px).unwrap())
        })
    }

    fn any_strategy() -> impl Strategy<Value = RasterBuffer> {
        (1u32..=16, 1u32..=16).prop_flat_map(|(w, h)| {
            let size = (w * h * 4) as usize;
            prop::collection::vec(any::<u8>(), size..=size)
                .prop_map(move |px| RasterBuffer::from_raw(w, h, px).unwrap())
        })
    }

    proptest! {
        /// Property: +90 then -90 is lossless on square buffers.
        #[test]
        fn prop_quarter_turn_roundtrip(img in square_strategy()) {
            prop_assert_eq!(rotate(&rotate(&img, 90.0), -90.0), img);
        }

        /// Property: 180 twice is lossless for any shape.
        #[test]
        fn prop_half_turn_roundtrip(img in any_strategy()) {
            prop_assert_eq!(rotate(&rotate(&img, 180.0), 180.0), img);
        }

        /// Property: rotation never changes the frame size.
        #[test]
        fn prop_dimensions_preserved(img in any_strategy(), angle in -720.0f32..720.0) {
            let result = rotate(&img, angle);
            prop_assert_eq!(result.width(), img.width());
            prop_assert_eq!(result.height(), img.height());
        }
    }
}
