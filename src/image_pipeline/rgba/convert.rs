use tracing::debug;

use crate::image_pipeline::rgba::types::{RgbaBuffer, RgbImageData};

/// Drops the alpha byte of every pixel. No blending against a background.
pub fn drop_alpha(buffer: &RgbaBuffer<'_>) -> RgbImageData {
    debug!("Dropping alpha for {}x{} image", buffer.width(), buffer.height());

    let mut data = Vec::with_capacity(buffer.width() * buffer.height() * 3);
    for px in buffer.as_bytes().chunks_exact(4) {
        data.extend_from_slice(&px[..3]);
    }

    RgbImageData {
        width: buffer.width(),
        height: buffer.height(),
        data,
    }
}
