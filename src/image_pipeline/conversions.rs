//! Pipeline conversions module
//!
//! This module contains orchestration logic: the per-file RGBA to JPEG
//! pipeline and the batch walk over a source tree.

mod rgba_to_jpeg;
mod discover;
mod report;


pub use rgba_to_jpeg::RgbaToJpegPipeline;
pub use discover::{find_test_images, is_test_image, output_path_for, sidecar_path_for};
pub use report::{BatchReport, SkippedFile};
