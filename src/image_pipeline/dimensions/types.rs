//! Dimension types

use std::path::Path;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::dimensions::{DimensionResolver, SidecarResolver, SquareResolver};

/// Bytes per RGBA pixel
pub const RGBA_CHANNELS: usize = 4;

/// Height and width of a pixel grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub height: usize,
    pub width: usize,
}

impl Dimensions {
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Byte length of an RGBA buffer with these dimensions, `None` on overflow.
    pub fn rgba_len(&self) -> Option<usize> {
        self.height
            .checked_mul(self.width)
            .and_then(|pixels| pixels.checked_mul(RGBA_CHANNELS))
    }
}

/// Dimension resolution strategies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DimensionPolicy {
    /// Read `height:H, width:W` from the `.txt` file next to the buffer
    #[default]
    Sidecar,
    /// Accept the buffer only if it holds a perfect square of pixels
    SquareInference,
}

impl DimensionResolver for DimensionPolicy {
    fn resolve(&self, buffer: &[u8], sidecar: Option<&Path>) -> Result<Dimensions> {
        match self {
            DimensionPolicy::Sidecar => SidecarResolver.resolve(buffer, sidecar),
            DimensionPolicy::SquareInference => SquareResolver.resolve(buffer, sidecar),
        }
    }
}
