//! WASM bindings for color maps and 3x3 filters.

use crate::types::{to_js_error, JsRasterBuffer};
use rasteredit_core::{blur, grayscale, invert, sepia, sharpen, RasterBuffer};
use wasm_bindgen::prelude::*;

fn map_image(
    image: &JsRasterBuffer,
    op: impl FnOnce(&RasterBuffer) -> RasterBuffer,
) -> Result<JsRasterBuffer, JsValue> {
    let src = image.to_core().map_err(to_js_error)?;
    Ok(JsRasterBuffer::from_core(op(&src)))
}

/// Convert to gray using perceptual luminance. Alpha is kept.
#[wasm_bindgen]
pub fn grayscale_image(image: &JsRasterBuffer) -> Result<JsRasterBuffer, JsValue> {
    map_image(image, grayscale)
}

/// Apply a warm sepia tone. Alpha is kept.
#[wasm_bindgen]
pub fn sepia_image(image: &JsRasterBuffer) -> Result<JsRasterBuffer, JsValue> {
    map_image(image, sepia)
}

/// Invert the color channels. Alpha is kept.
#[wasm_bindgen]
pub fn invert_image(image: &JsRasterBuffer) -> Result<JsRasterBuffer, JsValue> {
    map_image(image, invert)
}

/// 3x3 box blur. The one-pixel border is left as-is.
#[wasm_bindgen]
pub fn blur_image(image: &JsRasterBuffer) -> Result<JsRasterBuffer, JsValue> {
    map_image(image, blur)
}

/// 3x3 sharpen. The one-pixel border is left as-is.
#[wasm_bindgen]
pub fn sharpen_image(image: &JsRasterBuffer) -> Result<JsRasterBuffer, JsValue> {
    map_image(image, sharpen)
}
