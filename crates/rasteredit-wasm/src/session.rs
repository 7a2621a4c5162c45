//! WASM bindings for the stateful edit session.

use crate::types::{to_js_error, JsRasterBuffer};
use rasteredit_core::{
    AdjustmentParameters, ColorMap, EditError, EditOperation, EditOutcome, EditSession, Filter,
    FlipAxis, GeometryOp, SessionConfig,
};
use wasm_bindgen::prelude::*;

/// An edit session holding one image for JavaScript.
///
/// All edit methods throw if no image is loaded.
///
/// # Example (TypeScript)
/// ```typescript
/// const session = new JsEditSession();
/// session.load(new JsRasterBuffer(w, h, rgba));
/// session.rotate(90);
/// session.apply_adjustments(20, 10, 0);
/// session.apply({ op: "filter", filter: "sharpen" });
/// const out = session.current();
/// ```
#[wasm_bindgen]
pub struct JsEditSession {
    inner: EditSession,
}

#[wasm_bindgen]
impl JsEditSession {
    /// Create an empty session with default settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: EditSession::new(),
        }
    }

    /// Create an empty session from a config object,
    /// e.g. `{ interpolation: "lanczos3", sharpen_alpha: "preserve" }`.
    pub fn with_config(config: JsValue) -> Result<JsEditSession, JsValue> {
        let config: SessionConfig = serde_wasm_bindgen::from_value(config).map_err(to_js_error)?;
        Ok(Self {
            inner: EditSession::with_config(config),
        })
    }

    /// Load an image, replacing the current one
    pub fn load(&mut self, image: &JsRasterBuffer) -> Result<(), JsValue> {
        let buffer = image.to_core().map_err(to_js_error)?;
        self.inner.load(buffer).map_err(to_js_error)
    }

    /// Drop the loaded image, returning the last edited state
    pub fn unload(&mut self) -> Option<JsRasterBuffer> {
        self.inner.unload().map(JsRasterBuffer::from_core)
    }

    #[wasm_bindgen(getter)]
    pub fn is_loaded(&self) -> bool {
        self.inner.is_loaded()
    }

    /// Cumulative rotation in degrees since load or reset
    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> f32 {
        self.inner.rotation()
    }

    /// Copy of the edited image, or undefined when empty
    pub fn current(&self) -> Option<JsRasterBuffer> {
        self.inner.current().cloned().map(JsRasterBuffer::from_core)
    }

    /// Rotate by `degrees`, positive = clockwise. The frame size is kept.
    pub fn rotate(&mut self, degrees: f32) -> Result<(), JsValue> {
        self.run_geometry(GeometryOp::Rotate(degrees))
    }

    /// Mirror left-right when `horizontal`, top-bottom otherwise
    pub fn flip(&mut self, horizontal: bool) -> Result<(), JsValue> {
        let axis = if horizontal {
            FlipAxis::Horizontal
        } else {
            FlipAxis::Vertical
        };
        self.run_geometry(GeometryOp::Flip(axis))
    }

    /// Apply the three tone sliders (-100 to 100) to the original image
    pub fn apply_adjustments(
        &mut self,
        brightness: i32,
        contrast: i32,
        saturation: i32,
    ) -> Result<(), JsValue> {
        let params = AdjustmentParameters::from_sliders(brightness, contrast, saturation);
        finish(self.inner.apply_tone(&params))
    }

    pub fn grayscale(&mut self) -> Result<(), JsValue> {
        self.run_color_map(ColorMap::Grayscale)
    }

    pub fn sepia(&mut self) -> Result<(), JsValue> {
        self.run_color_map(ColorMap::Sepia)
    }

    pub fn invert(&mut self) -> Result<(), JsValue> {
        self.run_color_map(ColorMap::Invert)
    }

    pub fn blur(&mut self) -> Result<(), JsValue> {
        self.run_filter(Filter::Blur)
    }

    pub fn sharpen(&mut self) -> Result<(), JsValue> {
        self.run_filter(Filter::Sharpen)
    }

    /// Restore the original image
    pub fn reset(&mut self) -> Result<(), JsValue> {
        finish(self.inner.reset())
    }

    /// Run an operation given as a plain object, e.g.
    /// `{ op: "rotate", degrees: 45 }`, and return the outcome object.
    pub fn apply(&mut self, operation: JsValue) -> Result<JsValue, JsValue> {
        let operation: EditOperation =
            serde_wasm_bindgen::from_value(operation).map_err(to_js_error)?;
        let outcome = self.inner.apply(operation).map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&outcome).map_err(to_js_error)
    }
}

impl Default for JsEditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl JsEditSession {
    fn run_geometry(&mut self, op: GeometryOp) -> Result<(), JsValue> {
        finish(self.inner.apply_geometry(op))
    }

    fn run_color_map(&mut self, map: ColorMap) -> Result<(), JsValue> {
        finish(self.inner.apply_color_map(map))
    }

    fn run_filter(&mut self, filter: Filter) -> Result<(), JsValue> {
        finish(self.inner.apply_convolution(filter))
    }
}

fn finish(result: Result<EditOutcome, EditError>) -> Result<(), JsValue> {
    result.map(drop).map_err(to_js_error)
}
