use std::path::Path;

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::dimensions::resolver::DimensionResolver;
use crate::image_pipeline::dimensions::types::{Dimensions, RGBA_CHANNELS};

/// Treats the buffer as a square image. Any sidecar is ignored.
pub struct SquareResolver;

impl DimensionResolver for SquareResolver {
    fn resolve(&self, buffer: &[u8], _sidecar: Option<&Path>) -> Result<Dimensions> {
        let len = buffer.len();

        if len % RGBA_CHANNELS != 0 {
            return Err(ConversionError::DimensionResolution(format!(
                "{} bytes is not a whole number of RGBA pixels",
                len
            )));
        }

        let pixels = len / RGBA_CHANNELS;
        let side = pixels.isqrt();

        if side == 0 || side * side != pixels {
            return Err(ConversionError::DimensionResolution(format!(
                "{} pixels do not form a square image",
                pixels
            )));
        }

        debug!("Inferred square image {}x{} from {} bytes", side, side, len);
        Ok(Dimensions::new(side, side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_square() {
        let dims = SquareResolver.resolve(&[0u8; 64], None).unwrap();
        assert_eq!(dims, Dimensions::new(4, 4));

        let dims = SquareResolver.resolve(&vec![0u8; 640 * 640 * 4], None).unwrap();
        assert_eq!(dims, Dimensions::new(640, 640));
    }

    #[test]
    fn test_single_pixel() {
        let dims = SquareResolver.resolve(&[1, 2, 3, 4], None).unwrap();
        assert_eq!(dims, Dimensions::new(1, 1));
    }

    #[test]
    fn test_twelve_pixels_rejected() {
        let err = SquareResolver.resolve(&[0u8; 48], None).unwrap_err();
        assert!(matches!(err, ConversionError::DimensionResolution(_)));
    }

    #[test]
    fn test_partial_pixel_rejected() {
        let err = SquareResolver.resolve(&[0u8; 65], None).unwrap_err();
        assert!(matches!(err, ConversionError::DimensionResolution(_)));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(SquareResolver.resolve(&[], None).is_err());
    }

    #[test]
    fn test_ignores_sidecar() {
        let bogus = Path::new("does/not/exist.txt");
        let dims = SquareResolver.resolve(&[0u8; 36], Some(bogus)).unwrap();
        assert_eq!(dims, Dimensions::new(3, 3));
    }
}
