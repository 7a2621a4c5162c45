//! In-memory RGBA raster storage.
//!
//! All engines consume and produce [`RasterBuffer`] values. Decoding and
//! encoding files is left to collaborators; the buffer converts to and from
//! `image::RgbaImage` so they can hand pixels over without copying.

mod buffer;
mod rows;

pub use buffer::{Pixel, RasterBuffer, CHANNELS, TRANSPARENT};
pub(crate) use rows::for_each_row;
