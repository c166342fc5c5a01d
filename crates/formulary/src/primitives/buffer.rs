//! RGBA pixel buffer.
//!
//! ## Purpose
//!
//! This module provides the image container consumed and produced by the
//! convolution filter: a row-major grid of RGBA pixels, four bytes per pixel,
//! matching the layout of a browser `ImageData` array.
//!
//! ## Invariants
//!
//! * `data.len() == width * height * 4` for every constructed buffer.
//!
//! ## Non-goals
//!
//! * This module does not decode or encode image files (see the `image` feature).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::FormularyError;

/// Bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// Row-major RGBA image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes, checking the length against the dimensions.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, FormularyError> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(CHANNELS));
        if expected != Some(data.len()) {
            return Err(FormularyError::InvalidImageDimensions {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create an image where every pixel has the same RGBA value.
    ///
    /// Fails when `width * height * 4` does not fit in `usize`.
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Result<Self, FormularyError> {
        let pixels = width
            .checked_mul(height)
            .filter(|n| n.checked_mul(CHANNELS).is_some())
            .ok_or(FormularyError::InvalidImageDimensions {
                width,
                height,
                len: 0,
            })?;
        let mut data = Vec::with_capacity(pixels * CHANNELS);
        for _ in 0..pixels {
            data.extend_from_slice(&rgba);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return its RGBA bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// RGBA value at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * CHANNELS;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Overwrite the pixel at `(x, y)`. Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = (y * self.width + x) * CHANNELS;
        self.data[i..i + CHANNELS].copy_from_slice(&rgba);
    }

    /// Split into `(width, height, bytes)`.
    pub(crate) fn parts_mut(&mut self) -> (usize, usize, &mut [u8]) {
        (self.width, self.height, &mut self.data)
    }
}

// ============================================================================
// image crate interop
// ============================================================================

#[cfg(feature = "image")]
impl From<image::RgbaImage> for PixelBuffer {
    fn from(img: image::RgbaImage) -> Self {
        let width = img.width() as usize;
        let height = img.height() as usize;
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }
}

#[cfg(feature = "image")]
impl TryFrom<PixelBuffer> for image::RgbaImage {
    type Error = FormularyError;

    fn try_from(buf: PixelBuffer) -> Result<Self, Self::Error> {
        let (width, height, len) = (buf.width, buf.height, buf.data.len());
        let bad_dims = || FormularyError::InvalidImageDimensions { width, height, len };
        let w = u32::try_from(width).map_err(|_| bad_dims())?;
        let h = u32::try_from(height).map_err(|_| bad_dims())?;
        image::RgbaImage::from_raw(w, h, buf.data).ok_or_else(bad_dims)
    }
}
