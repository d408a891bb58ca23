//! RGBA and RGB image types

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::dimensions::Dimensions;

/// A raw RGBA dump whose length has been checked against its dimensions.
///
/// Pixels are row-major, 4 bytes each in R, G, B, A order, with no padding
/// between rows.
#[derive(Debug, Clone, Copy)]
pub struct RgbaBuffer<'a> {
    dimensions: Dimensions,
    data: &'a [u8],
}

impl<'a> RgbaBuffer<'a> {
    /// Wraps `data` as a `height x width` RGBA grid.
    ///
    /// Fails with `SizeMismatch` unless the length is exactly
    /// `height * width * 4`, whatever policy produced the dimensions.
    pub fn new(data: &'a [u8], dimensions: Dimensions) -> Result<Self> {
        if dimensions.width == 0 || dimensions.height == 0 {
            return Err(ConversionError::InvalidDimensions(dimensions.width, dimensions.height));
        }

        // An overflowing product can never match a real buffer
        let expected = dimensions.rgba_len().unwrap_or(usize::MAX);
        if data.len() != expected {
            return Err(ConversionError::SizeMismatch {
                actual: data.len(),
                expected,
            });
        }

        Ok(Self { dimensions, data })
    }

    pub fn width(&self) -> usize {
        self.dimensions.width
    }

    pub fn height(&self) -> usize {
        self.dimensions.height
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// RGBA value at row `y`, column `x`.
    #[cfg(test)]
    pub(crate) fn pixel(&self, y: usize, x: usize) -> Option<[u8; 4]> {
        if y >= self.height() || x >= self.width() {
            return None;
        }
        let offset = (y * self.width() + x) * 4;
        let px = &self.data[offset..offset + 4];
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// RGB image data after the alpha channel has been dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// RGB pixel data interleaved [R, G, B, R, G, B, ...]
    pub data: Vec<u8>,
}
