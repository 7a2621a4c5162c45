//! Fixed 3x3 kernel filters: box blur and sharpen.
//!
//! # Border policy
//!
//! Only interior pixels, where the full 3x3 neighborhood exists, are
//! written. The outermost one-pixel ring is copied bit-for-bit from the input.
//! Buffers narrower or shorter than 3 pixels have no interior and come back
//! unchanged.
//!
//! # Alpha
//!
//! Blur keeps the source alpha. Sharpen convolves alpha along with the color
//! channels by default. Use [`sharpen_with_alpha`] with [`AlphaMode::Preserve`]
//! to keep alpha instead.

use serde::{Deserialize, Serialize};

use crate::raster::{for_each_row, RasterBuffer, CHANNELS};

/// How the alpha channel is treated by a convolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphaMode {
    /// Copy alpha from the source pixel.
    Preserve,
    /// Run alpha through the kernel like the color channels.
    #[default]
    Convolve,
}

/// A kernel filter selectable by collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// 3x3 box average.
    Blur,
    /// 3x3 high-pass sharpen.
    Sharpen,
}

impl Filter {
    /// The kernel this filter convolves with.
    pub fn kernel(self) -> Kernel3x3 {
        match self {
            Filter::Blur => Kernel3x3::box_blur(),
            Filter::Sharpen => Kernel3x3::sharpen(),
        }
    }
}

/// An integer 3x3 kernel with a normalizing divisor.
///
/// Each output channel is `round(sum(weight * neighbor) / divisor)`, clamped
/// to 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel3x3 {
    /// Weights indexed `[row][column]`, centered on the output pixel.
    pub weights: [[i32; 3]; 3],
    /// Normalizing divisor (must be positive).
    pub divisor: i32,
}

impl Kernel3x3 {
    /// All weights 1, normalized by 9.
    pub fn box_blur() -> Self {
        Self {
            weights: [[1; 3]; 3],
            divisor: 9,
        }
    }

    /// `[[0,-1,0],[-1,5,-1],[0,-1,0]]`, unnormalized.
    pub fn sharpen() -> Self {
        Self {
            weights: [[0, -1, 0], [-1, 5, -1], [0, -1, 0]],
            divisor: 1,
        }
    }
}

/// Blur with a 3x3 box kernel. Alpha and the border ring are left as-is.
///
/// # Example
/// ```
/// use rasteredit_core::{blur, RasterBuffer};
///
/// let mut img = RasterBuffer::filled(3, 3, [0, 0, 0, 255]);
/// img.set(1, 1, [255, 255, 255, 255]);
/// assert_eq!(blur(&img).get(1, 1), [28, 28, 28, 255]);
/// ```
pub fn blur(buffer: &RasterBuffer) -> RasterBuffer {
    convolve(buffer, &Kernel3x3::box_blur(), AlphaMode::Preserve)
}

/// Sharpen with the 3x3 high-pass kernel, convolving alpha as well.
pub fn sharpen(buffer: &RasterBuffer) -> RasterBuffer {
    sharpen_with_alpha(buffer, AlphaMode::Convolve)
}

/// Sharpen with an explicit alpha policy.
pub fn sharpen_with_alpha(buffer: &RasterBuffer, alpha: AlphaMode) -> RasterBuffer {
    convolve(buffer, &Kernel3x3::sharpen(), alpha)
}

/// Run a selectable filter. `sharpen_alpha` only affects [`Filter::Sharpen`];
/// blur always keeps alpha.
pub fn apply_filter(
    buffer: &RasterBuffer,
    filter: Filter,
    sharpen_alpha: AlphaMode,
) -> RasterBuffer {
    let alpha = match filter {
        Filter::Blur => AlphaMode::Preserve,
        Filter::Sharpen => sharpen_alpha,
    };
    convolve(buffer, &filter.kernel(), alpha)
}

/// Convolve the interior of `buffer` with `kernel`.
///
/// All reads come from the unmodified input, so the result does not depend on
/// the order rows are processed in.
pub fn convolve(buffer: &RasterBuffer, kernel: &Kernel3x3, alpha: AlphaMode) -> RasterBuffer {
    let mut output = buffer.clone();

    let (w, h) = (buffer.width() as usize, buffer.height() as usize);
    if w < 3 || h < 3 {
        return output;
    }

    let channels = match alpha {
        AlphaMode::Preserve => 3,
        AlphaMode::Convolve => CHANNELS,
    };
    let src = buffer.as_raw();
    let row_len = buffer.row_len();
    let divisor = kernel.divisor.max(1);

    for_each_row(output.as_raw_mut(), row_len, |y, row| {
        if y == 0 || y == h - 1 {
            return;
        }
        for x in 1..w - 1 {
            for c in 0..channels {
                let mut sum = 0i32;
                for (ky, weights) in kernel.weights.iter().enumerate() {
                    let base = ((y + ky - 1) * w + x - 1) * CHANNELS + c;
                    for (kx, &k) in weights.iter().enumerate() {
                        sum += src[base + kx * CHANNELS] as i32 * k;
                    }
                }
                row[x * CHANNELS + c] = div_round(sum, divisor).clamp(0, 255) as u8;
            }
        }
    });

    output
}

/// Integer division rounding to nearest, halves rounding up.
#[inline]
fn div_round(sum: i32, divisor: i32) -> i32 {
    if divisor == 1 {
        return sum;
    }
    (2 * sum + divisor).div_euclid(2 * divisor)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
