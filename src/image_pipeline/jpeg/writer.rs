use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::rgba::types::RgbImageData;
use crate::image_pipeline::jpeg::types::ConversionConfig;

pub trait JpegWriter {
    fn write_jpeg(&self, image: &RgbImageData, output: &mut dyn Write, config: &ConversionConfig) -> Result<()>;
}
