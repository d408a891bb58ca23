use std::io::Write;

use image::ExtendedColorType;
use image::codecs::jpeg::JpegEncoder;
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::rgba::types::RgbImageData;
use crate::image_pipeline::jpeg::types::ConversionConfig;
use crate::image_pipeline::jpeg::writer::JpegWriter;

/// JPEG writer backed by the `image` crate's baseline encoder.
pub struct StandardJpegWriter;

impl JpegWriter for StandardJpegWriter {
    fn write_jpeg(&self, image: &RgbImageData, output: &mut dyn Write, config: &ConversionConfig) -> Result<()> {
        debug!(
            "Encoding JPEG image: {}x{} at quality {}",
            image.width, image.height, config.quality
        );

        let width = u32::try_from(image.width)
            .map_err(|_| ConversionError::InvalidDimensions(image.width, image.height))?;
        let height = u32::try_from(image.height)
            .map_err(|_| ConversionError::InvalidDimensions(image.width, image.height))?;

        let mut buffer = Vec::new();

        JpegEncoder::new_with_quality(&mut buffer, config.quality)
            .encode(&image.data, width, height, ExtendedColorType::Rgb8)
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("JPEG encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
