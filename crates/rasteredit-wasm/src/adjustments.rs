//! Tone adjustment WASM bindings.
//!
//! This module provides JavaScript bindings for the AdjustmentParameters type,
//! so the three sliders can be kept and applied from TypeScript without a
//! session.

use crate::types::{to_js_error, JsRasterBuffer};
use rasteredit_core::adjust;
use wasm_bindgen::prelude::*;

/// Tone adjustment parameters wrapper for JavaScript
#[wasm_bindgen]
pub struct AdjustmentParameters {
    inner: rasteredit_core::AdjustmentParameters,
}

#[wasm_bindgen]
impl AdjustmentParameters {
    /// Create parameters that leave the image unchanged
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: rasteredit_core::AdjustmentParameters::identity(),
        }
    }

    /// Create parameters from slider positions (-100 to 100)
    pub fn from_sliders(brightness: i32, contrast: i32, saturation: i32) -> Self {
        Self {
            inner: rasteredit_core::AdjustmentParameters::from_sliders(
                brightness, contrast, saturation,
            ),
        }
    }

    /// Get brightness shift
    #[wasm_bindgen(getter)]
    pub fn brightness(&self) -> f32 {
        self.inner.brightness
    }

    /// Set brightness shift
    #[wasm_bindgen(setter)]
    pub fn set_brightness(&mut self, value: f32) {
        self.inner.brightness = value;
    }

    /// Get contrast factor
    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> f32 {
        self.inner.contrast
    }

    /// Set contrast factor
    #[wasm_bindgen(setter)]
    pub fn set_contrast(&mut self, value: f32) {
        self.inner.contrast = value;
    }

    /// Get saturation factor
    #[wasm_bindgen(getter)]
    pub fn saturation(&self) -> f32 {
        self.inner.saturation
    }

    /// Set saturation factor
    #[wasm_bindgen(setter)]
    pub fn set_saturation(&mut self, value: f32) {
        self.inner.saturation = value;
    }

    /// Check if these parameters leave the image unchanged
    pub fn is_identity(&self) -> bool {
        self.inner.is_identity()
    }

    /// Serialize to a plain object for storage
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(to_js_error)
    }

    /// Deserialize from a plain object
    pub fn from_json(value: JsValue) -> Result<AdjustmentParameters, JsValue> {
        let inner: rasteredit_core::AdjustmentParameters =
            serde_wasm_bindgen::from_value(value).map_err(to_js_error)?;
        Ok(Self { inner })
    }
}

impl Default for AdjustmentParameters {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply tone adjustments to an image, returning a new image.
///
/// # Example (TypeScript)
/// ```typescript
/// const params = AdjustmentParameters.from_sliders(20, 0, -30);
/// const adjusted = adjust_image(sourceImage, params);
/// ```
#[wasm_bindgen]
pub fn adjust_image(
    image: &JsRasterBuffer,
    params: &AdjustmentParameters,
) -> Result<JsRasterBuffer, JsValue> {
    let src = image.to_core().map_err(to_js_error)?;
    Ok(JsRasterBuffer::from_core(adjust(&src, &params.inner)))
}
