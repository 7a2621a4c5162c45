//! Luminance calculation using ITU-R BT.601 coefficients.
//!
//! Shared by the saturation step of tone adjustment and by the grayscale
//! color map.

/// ITU-R BT.601 coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Calculate luminance from channel values on any scale.
///
/// The result is on the same scale as the inputs, so this works for both
/// normalized (0.0 to 1.0) and 8-bit (0.0 to 255.0) values, and for
/// intermediate values outside either range.
#[inline]
pub fn calculate_luminance(r: f32, g: f32, b: f32) -> f32 {
    LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b
}

/// Calculate luminance from u8 RGB values, rounded to the nearest integer
/// with halves rounding up.
///
/// Computed in integer thousandths so exact halves are not lost to float
/// representation of the coefficients.
#[inline]
pub fn calculate_luminance_u8(r: u8, g: u8, b: u8) -> u8 {
    let sum = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
    ((sum + 500) / 1000) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients_sum_to_one() {
        let sum = LUMINANCE_R + LUMINANCE_G + LUMINANCE_B;
        assert!((sum - 1.0).abs() < 1e-6, "Coefficients should sum to 1.0");
    }

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(calculate_luminance_u8(255, 255, 255), 255);
        assert_eq!(calculate_luminance_u8(0, 0, 0), 0);
    }

    #[test]
    fn test_luminance_gray_preserves_value() {
        for v in 0..=255u8 {
            assert_eq!(calculate_luminance_u8(v, v, v), v, "gray {v}");
        }
    }

    #[test]
    fn test_luminance_primaries() {
        // 0.299 * 255 = 76.245
        assert_eq!(calculate_luminance_u8(255, 0, 0), 76);
        // 0.587 * 255 = 149.685
        assert_eq!(calculate_luminance_u8(0, 255, 0), 150);
        // 0.114 * 255 = 29.07
        assert_eq!(calculate_luminance_u8(0, 0, 255), 29);
    }

    #[test]
    fn test_luminance_u8_half_rounds_up() {
        // 1.196 + 23.48 + 1.824 = 26.5 exactly
        assert_eq!(calculate_luminance_u8(4, 40, 16), 27);
    }

    #[test]
    fn test_luminance_u8_matches_exact_rounding() {
        for r in (0..=255u32).step_by(3) {
            for g in (0..=255u32).step_by(5) {
                for b in (0..=255u32).step_by(7) {
                    let thousandths = 299 * r + 587 * g + 114 * b;
                    let round_up = u32::from(thousandths % 1000 >= 500);
                    let expected = (thousandths / 1000 + round_up) as u8;
                    assert_eq!(calculate_luminance_u8(r as u8, g as u8, b as u8), expected);
                }
            }
        }
    }

    #[test]
    fn test_luminance_accepts_out_of_range_values() {
        let lum = calculate_luminance(300.0, 300.0, 300.0);
        assert!((lum - 300.0).abs() < 1e-3);
    }
}
