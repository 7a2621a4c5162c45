//! Exact mirroring along either axis.

use serde::{Deserialize, Serialize};

use crate::raster::{for_each_row, RasterBuffer, CHANNELS};

/// Mirror axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlipAxis {
    /// Mirror left-right.
    Horizontal,
    /// Mirror top-bottom.
    Vertical,
}

/// Mirror an image. No interpolation, no dimension change.
///
/// Flipping twice along the same axis restores the input exactly.
pub fn flip(image: &RasterBuffer, axis: FlipAxis) -> RasterBuffer {
    let mut output = image.clone();
    let src = image.as_raw();
    let row_len = image.row_len();
    let height = image.height() as usize;

    match axis {
        FlipAxis::Horizontal => for_each_row(output.as_raw_mut(), row_len, |y, row| {
            let src_row = &src[y * row_len..(y + 1) * row_len];
            for (dst, px) in row
                .chunks_exact_mut(CHANNELS)
                .zip(src_row.chunks_exact(CHANNELS).rev())
            {
                dst.copy_from_slice(px);
            }
        }),
        FlipAxis::Vertical => for_each_row(output.as_raw_mut(), row_len, |y, row| {
            let sy = height - 1 - y;
            row.copy_from_slice(&src[sy * row_len..(sy + 1) * row_len]);
        }),
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image(width: u32, height: u32) -> RasterBuffer {
        let mut img = RasterBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                img.set(x, y, [x as u8, y as u8, (x * y) as u8, 255]);
            }
        }
        img
    }

    #[test]
    fn test_flip_horizontal() {
        let img = test_image(4, 3);
        let result = flip(&img, FlipAxis::Horizontal);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(result.get(x, y), img.get(3 - x, y));
            }
        }
    }

    #[test]
    fn test_flip_vertical() {
        let img = test_image(4, 3);
        let result = flip(&img, FlipAxis::Vertical);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(result.get(x, y), img.get(x, 2 - y));
            }
        }
    }

    #[test]
    fn test_flip_twice_restores() {
        let img = test_image(5, 7);
        for axis in [FlipAxis::Horizontal, FlipAxis::Vertical] {
            assert_eq!(flip(&flip(&img, axis), axis), img);
        }
    }

    #[test]
    fn test_flip_single_pixel() {
        let img = RasterBuffer::filled(1, 1, [9, 8, 7, 6]);
        assert_eq!(flip(&img, FlipAxis::Horizontal), img);
        assert_eq!(flip(&img, FlipAxis::Vertical), img);
    }

    #[test]
    fn test_flip_empty() {
        let img = RasterBuffer::new(0, 0);
        assert_eq!(flip(&img, FlipAxis::Vertical), img);
    }

    #[test]
    fn test_both_flips_equal_half_turn() {
        let img = test_image(6, 4);
        let both = flip(&flip(&img, FlipAxis::Horizontal), FlipAxis::Vertical);
        assert_eq!(both, crate::transform::rotate(&img, 180.0));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
