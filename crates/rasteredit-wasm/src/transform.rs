//! WASM bindings for stateless geometric transforms.
//!
//! Both functions keep the frame size of the source image.

use crate::types::{to_js_error, JsRasterBuffer};
use rasteredit_core::transform::{flip, rotate_with_filter, FlipAxis, InterpolationFilter};
use wasm_bindgen::prelude::*;

/// Rotate an image about its center.
///
/// Multiples of 90 degrees are remapped exactly. Other angles are resampled;
/// areas not covered by the source become transparent.
///
/// # Arguments
///
/// * `image` - Source image to rotate
/// * `angle_degrees` - Rotation angle in degrees (positive = clockwise)
/// * `use_lanczos` - Use the sharper Lanczos3 filter, otherwise bicubic
///
/// # Example (TypeScript)
///
/// ```typescript
/// const preview = rotate_image(sourceImage, 15.0, false);
/// const exported = rotate_image(sourceImage, 15.0, true);
/// ```
#[wasm_bindgen]
pub fn rotate_image(
    image: &JsRasterBuffer,
    angle_degrees: f32,
    use_lanczos: bool,
) -> Result<JsRasterBuffer, JsValue> {
    let src = image.to_core().map_err(to_js_error)?;
    let filter = if use_lanczos {
        InterpolationFilter::Lanczos3
    } else {
        InterpolationFilter::Bicubic
    };

    Ok(JsRasterBuffer::from_core(rotate_with_filter(
        &src,
        angle_degrees,
        filter,
    )))
}

/// Mirror an image left-right when `horizontal`, top-bottom otherwise.
#[wasm_bindgen]
pub fn flip_image(image: &JsRasterBuffer, horizontal: bool) -> Result<JsRasterBuffer, JsValue> {
    let src = image.to_core().map_err(to_js_error)?;
    let axis = if horizontal {
        FlipAxis::Horizontal
    } else {
        FlipAxis::Vertical
    };
    Ok(JsRasterBuffer::from_core(flip(&src, axis)))
}
