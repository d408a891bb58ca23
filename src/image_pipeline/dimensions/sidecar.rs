//! Sidecar dimension files.
//!
//! The sidecar is a single line such as `height:480, width:640`. Whitespace
//! anywhere in the line is ignored. Height always comes first.

use std::path::Path;

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::dimensions::resolver::DimensionResolver;
use crate::image_pipeline::dimensions::types::Dimensions;

pub struct SidecarResolver;

impl DimensionResolver for SidecarResolver {
    fn resolve(&self, _buffer: &[u8], sidecar: Option<&Path>) -> Result<Dimensions> {
        let path = sidecar.ok_or_else(|| {
            ConversionError::DimensionResolution("no sidecar path given".to_string())
        })?;

        let text = std::fs::read_to_string(path).map_err(|e| {
            ConversionError::DimensionResolution(format!("{}: {}", path.display(), e))
        })?;

        let dims = parse_dimension_hint(&text).map_err(|e| match e {
            ConversionError::DimensionResolution(msg) => {
                ConversionError::DimensionResolution(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;

        debug!("Sidecar {} gives {}x{}", path.display(), dims.width, dims.height);
        Ok(dims)
    }
}

/// Parses `height:H, width:W`.
///
/// Zero values are rejected the same way as malformed ones.
pub fn parse_dimension_hint(text: &str) -> Result<Dimensions> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let tokens: Vec<&str> = compact.split(',').collect();

    let [height_token, width_token] = tokens.as_slice() else {
        return Err(ConversionError::DimensionResolution(format!(
            "expected 2 comma-separated fields, found {}",
            tokens.len()
        )));
    };

    let height = parse_field(height_token, "height")?;
    let width = parse_field(width_token, "width")?;

    Ok(Dimensions::new(height, width))
}

fn parse_field(token: &str, key: &str) -> Result<usize> {
    let (name, value) = token.split_once(':').ok_or_else(|| {
        ConversionError::DimensionResolution(format!("field '{}' has no ':'", token))
    })?;

    if name != key {
        return Err(ConversionError::DimensionResolution(format!(
            "expected '{}', found '{}'",
            key, name
        )));
    }

    match value.parse::<usize>() {
        Ok(0) => Err(ConversionError::DimensionResolution(format!("{} is zero", key))),
        Ok(n) => Ok(n),
        Err(e) => Err(ConversionError::DimensionResolution(format!(
            "invalid {} '{}': {}",
            key, value, e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_canonical() {
        let dims = parse_dimension_hint("height:4, width:8").unwrap();
        assert_eq!(dims, Dimensions::new(4, 8));
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        let dims = parse_dimension_hint("  height : 480 ,\twidth: 640\n").unwrap();
        assert_eq!(dims, Dimensions::new(480, 640));
    }

    #[test]
    fn test_parse_rejects_swapped_keys() {
        let err = parse_dimension_hint("width:8, height:4").unwrap_err();
        assert!(matches!(err, ConversionError::DimensionResolution(_)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for text in [
            "",
            "height:4",
            "height:4, width:4, depth:4",
            "height=4, width=4",
            "height:four, width:4",
            "height:-4, width:4",
            "height:0, width:4",
            "height:4, width:",
        ] {
            assert!(
                matches!(parse_dimension_hint(text), Err(ConversionError::DimensionResolution(_))),
                "accepted {:?}",
                text
            );
        }
    }

    #[test]
    fn test_resolve_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "height:2, width:3").unwrap();

        let dims = SidecarResolver.resolve(&[], Some(file.path())).unwrap();
        assert_eq!(dims, Dimensions::new(2, 3));
    }

    #[test]
    fn test_resolve_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("_testimage001.txt");

        let err = SidecarResolver.resolve(&[0u8; 64], Some(&missing)).unwrap_err();
        assert!(matches!(err, ConversionError::DimensionResolution(_)));
        assert!(err.to_string().contains("_testimage001.txt"));
    }

    #[test]
    fn test_resolve_without_path() {
        let err = SidecarResolver.resolve(&[0u8; 64], None).unwrap_err();
        assert!(matches!(err, ConversionError::DimensionResolution(_)));
    }
}
