//! The RGBA raster buffer every engine reads and writes.

use crate::error::EditError;

/// Number of bytes per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// A single RGBA pixel.
pub type Pixel = [u8; 4];

/// Fully transparent black, used for uncovered areas after rotation.
pub const TRANSPARENT: Pixel = [0, 0, 0, 0];

/// A decoded image with RGBA pixel data.
///
/// The storage length is always exactly `width * height * 4`. Pixels are
/// stored row-major, so pixel `(x, y)` starts at `(y * width + x) * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterBuffer {
    /// Create a transparent black buffer of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; Self::expected_len(width, height)],
        }
    }

    /// Create a buffer with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Self {
        let count = (width as usize) * (height as usize);
        let mut pixels = Vec::with_capacity(count * CHANNELS);
        for _ in 0..count {
            pixels.extend_from_slice(&pixel);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Wrap raw RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns `EditError::InvalidInput` if `pixels.len()` is not
    /// `width * height * 4`.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, EditError> {
        let expected = Self::expected_len(width, height);
        if pixels.len() != expected {
            return Err(EditError::InvalidInput(format!(
                "expected {expected} bytes for {width}x{height} RGBA, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a buffer from an `image::RgbaImage` without copying.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an `image::RgbaImage` for a collaborator to encode.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        // Length is guaranteed by construction.
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this buffer has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Consume the buffer and return its raw RGBA bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the buffer.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Pixel {
        let idx = self.index(x, y);
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Write the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the buffer.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, pixel: Pixel) {
        let idx = self.index(x, y);
        self.pixels[idx..idx + CHANNELS].copy_from_slice(&pixel);
    }

    /// Checked variant of [`RasterBuffer::get`].
    pub fn try_get(&self, x: u32, y: u32) -> Result<Pixel, EditError> {
        if x >= self.width || y >= self.height {
            return Err(EditError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.get(x, y))
    }

    /// Byte offset of pixel `(x, y)`.
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of range for {}x{} buffer",
            self.width,
            self.height
        );
        ((y as usize) * (self.width as usize) + (x as usize)) * CHANNELS
    }

    /// Bytes in a single row.
    #[inline]
    pub(crate) fn row_len(&self) -> usize {
        self.width as usize * CHANNELS
    }

    fn expected_len(width: u32, height: u32) -> usize {
        (width as usize) * (height as usize) * CHANNELS
    }
}
