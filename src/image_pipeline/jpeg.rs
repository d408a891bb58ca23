//! JPEG writing module
//!
//! This module provides JPEG encoding for converted RGB grids, plus the
//! configuration shared by the conversion pipeline.

mod writer;
mod standard_jpeg_writer;
pub mod types;

pub use writer::JpegWriter;
pub use standard_jpeg_writer::StandardJpegWriter;
pub use types::{ConversionConfig, ConversionConfigBuilder, DEFAULT_QUALITY};
