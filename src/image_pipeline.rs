//! Image processing pipeline module
//!
//! This module turns raw RGBA pixel dumps into JPEG thumbnails, with separate
//! modules for dimension resolution, buffer reshaping, JPEG writing, and
//! conversion orchestration.

pub mod common;
pub mod dimensions;
pub mod rgba;
pub mod jpeg;
pub mod conversions;

pub use common::{
    ConversionError,
    Result,
};

pub use dimensions::{
    Dimensions,
    DimensionPolicy,
    DimensionResolver,
    SidecarResolver,
    SquareResolver,
};

pub use rgba::{
    RgbaBuffer,
    RgbImageData,
};

pub use jpeg::{
    ConversionConfig,
    ConversionConfigBuilder,
    JpegWriter,
    StandardJpegWriter,
};

pub use conversions::{
    BatchReport,
    RgbaToJpegPipeline,
    SkippedFile,
};
