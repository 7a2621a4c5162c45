//! rasteredit Core - Pixel transformation engine
//!
//! This crate provides the image editing engine behind rasteredit: geometric
//! transforms, tone adjustment, color maps and kernel filters over an
//! in-memory RGBA buffer, plus an edit session that keeps the original image
//! for non-cumulative adjustments and reset.
//!
//! Decoding and encoding files is left to collaborators.

pub mod adjustments;
pub mod color_map;
pub mod convolution;
pub mod error;
pub mod luminance;
pub mod raster;
pub mod session;
pub mod transform;

pub use adjustments::adjust;
pub use color_map::{
    apply_color_map, apply_color_map_in_place, grayscale, invert, sepia, ColorMap,
};
pub use convolution::{
    apply_filter, blur, convolve, sharpen, sharpen_with_alpha, AlphaMode, Filter, Kernel3x3,
};
pub use error::EditError;
pub use raster::{Pixel, RasterBuffer};
pub use session::{EditOperation, EditOutcome, EditSession, GeometryOp, SessionConfig};
pub use transform::{flip, rotate, rotate_with_filter, FlipAxis, InterpolationFilter};

/// Lowest value a UI slider can report.
pub const SLIDER_MIN: i32 = -100;

/// Highest value a UI slider can report.
pub const SLIDER_MAX: i32 = 100;

/// Tone adjustment parameters, always applied together.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AdjustmentParameters {
    /// Brightness shift (-1.0 to 1.0, fraction of full scale)
    pub brightness: f32,
    /// Contrast factor around mid-gray (0.0 to 2.0, 1.0 = unchanged)
    pub contrast: f32,
    /// Saturation factor around luminance (0.0 to 2.0, 1.0 = unchanged)
    pub saturation: f32,
}

impl Default for AdjustmentParameters {
    fn default() -> Self {
        Self::identity()
    }
}

impl AdjustmentParameters {
    /// Parameters that leave the image unchanged.
    pub fn identity() -> Self {
        Self {
            brightness: 0.0,
            contrast: 1.0,
            saturation: 1.0,
        }
    }

    /// Map the three UI slider positions (-100 to 100) to parameters.
    ///
    /// Out-of-range slider values are clamped.
    pub fn from_sliders(brightness: i32, contrast: i32, saturation: i32) -> Self {
        let clamp = |v: i32| v.clamp(SLIDER_MIN, SLIDER_MAX) as f32;
        Self {
            brightness: clamp(brightness) / 100.0,
            contrast: (clamp(contrast) + 100.0) / 100.0,
            saturation: (clamp(saturation) + 100.0) / 100.0,
        }
    }

    /// Check if these parameters leave the image unchanged.
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Check that no field is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.brightness.is_finite() && self.contrast.is_finite() && self.saturation.is_finite()
    }

    /// Clamp each field to its slider range (brightness -1 to 1, contrast and
    /// saturation 0 to 2). A NaN field falls back to its identity value.
    pub fn clamped(&self) -> Self {
        let identity = Self::identity();
        let clamp = |v: f32, fallback: f32, min: f32, max: f32| {
            if v.is_nan() {
                fallback
            } else {
                v.clamp(min, max)
            }
        };
        Self {
            brightness: clamp(self.brightness, identity.brightness, -1.0, 1.0),
            contrast: clamp(self.contrast, identity.contrast, 0.0, 2.0),
            saturation: clamp(self.saturation, identity.saturation, 0.0, 2.0),
        }
    }
}
