//! rasteredit WASM - WebAssembly bindings for rasteredit
//!
//! This crate provides WASM bindings to expose the rasteredit-core engine
//! to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for RGBA image data
//! - `session` - Stateful edit session (load, edit, reset)
//! - `adjustments` - Stateless brightness/contrast/saturation
//! - `transform` - Stateless rotate and flip
//! - `effects` - Stateless color maps and 3x3 filters
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsEditSession, JsRasterBuffer } from '@rasteredit/wasm';
//!
//! await init();
//!
//! const data = ctx.getImageData(0, 0, w, h);
//! const session = new JsEditSession();
//! session.load(new JsRasterBuffer(w, h, new Uint8Array(data.data.buffer)));
//! session.sepia();
//! ```

use wasm_bindgen::prelude::*;

mod adjustments;
mod effects;
mod session;
mod transform;
mod types;

// Re-export public types
pub use adjustments::{adjust_image, AdjustmentParameters};
pub use effects::{blur_image, grayscale_image, invert_image, sepia_image, sharpen_image};
pub use session::JsEditSession;
pub use transform::{flip_image, rotate_image};
pub use types::JsRasterBuffer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
