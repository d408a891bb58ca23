use std::path::Path;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::dimensions::types::Dimensions;

pub trait DimensionResolver {
    /// Determines the shape of `buffer`. `sidecar` is where a companion
    /// dimension file would live, if the caller knows one.
    fn resolve(&self, buffer: &[u8], sidecar: Option<&Path>) -> Result<Dimensions>;
}
