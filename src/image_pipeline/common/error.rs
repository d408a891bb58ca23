use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Could not resolve dimensions: {0}")]
    DimensionResolution(String),

    #[error("Buffer size {actual} does not match expected {expected}")]
    SizeMismatch { actual: usize, expected: usize },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to encode JPEG image: {0}")]
    EncodeError(String),

    #[error("Source root is not accessible: {}: {source}", path.display())]
    SourceRootUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not create output directory: {}: {source}", path.display())]
    OutputDirUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConversionError {
    /// Whether the error aborts a whole batch rather than skipping one file.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ConversionError::SourceRootUnavailable { .. } | ConversionError::OutputDirUnavailable { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;
