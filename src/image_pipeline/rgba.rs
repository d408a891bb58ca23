//! RGBA buffer module
//!
//! Validates raw RGBA dumps against their resolved dimensions and reshapes
//! them into 3-channel pixel grids.

pub mod types;
mod convert;

pub use types::{RgbaBuffer, RgbImageData};
pub use convert::drop_alpha;
