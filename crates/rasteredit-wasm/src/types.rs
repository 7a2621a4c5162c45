//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core rasteredit
//! types, handling the conversion between Rust and JavaScript data.

use rasteredit_core::{EditError, RasterBuffer};
use wasm_bindgen::prelude::*;

/// An RGBA image wrapper for JavaScript.
///
/// The layout matches canvas `ImageData`: 4 bytes per pixel, row-major, no
/// padding, so `new ImageData(new Uint8ClampedArray(img.pixels()), img.width)`
/// works directly.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is
/// made to JavaScript memory as a `Uint8Array`.
#[wasm_bindgen]
pub struct JsRasterBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsRasterBuffer {
    /// Create a new JsRasterBuffer from dimensions and RGBA pixel data.
    ///
    /// Throws if `pixels` is not exactly `width * height * 4` bytes.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsRasterBuffer, JsValue> {
        Self::checked(width, height, pixels).map_err(to_js_error)
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array (copied).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsRasterBuffer {
    /// Validate the pixel length, as `RasterBuffer::from_raw` does.
    pub(crate) fn checked(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, EditError> {
        RasterBuffer::from_raw(width, height, pixels).map(Self::from_core)
    }

    pub(crate) fn from_core(buffer: RasterBuffer) -> Self {
        Self {
            width: buffer.width(),
            height: buffer.height(),
            pixels: buffer.into_raw(),
        }
    }

    /// Convert to a core buffer, cloning the pixel data.
    ///
    /// Cannot fail for buffers built through `new`, `checked` or `from_core`.
    pub(crate) fn to_core(&self) -> Result<RasterBuffer, EditError> {
        RasterBuffer::from_raw(self.width, self.height, self.pixels.clone())
    }
}

/// Convert a core error into a JS exception value.
pub(crate) fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
