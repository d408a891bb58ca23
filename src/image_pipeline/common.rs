//! Shared error type for the conversion pipeline.

pub mod error;

pub use error::{ConversionError, Result};
