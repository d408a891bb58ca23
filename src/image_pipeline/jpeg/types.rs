//! Conversion configuration types

use std::path::PathBuf;

use crate::image_pipeline::dimensions::DimensionPolicy;

/// Encoder quality used when none is configured
pub const DEFAULT_QUALITY: u8 = 75;

/// Configuration for RGBA to JPEG conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Directory walked recursively for `_testimage*.rgba` files
    pub source_root: PathBuf,
    /// Flat directory receiving `<stem>.jpg` outputs, created if missing
    pub dest_root: PathBuf,
    /// How each buffer's height and width are determined
    pub policy: DimensionPolicy,
    /// JPEG quality, 1 to 100
    pub quality: u8,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("PaperPlugin").join("PaperPluginTester"),
            dest_root: PathBuf::from("AnnotatedTestImages"),
            policy: DimensionPolicy::default(),
            quality: DEFAULT_QUALITY,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    source_root: Option<PathBuf>,
    dest_root: Option<PathBuf>,
    policy: Option<DimensionPolicy>,
    quality: Option<u8>,
}

impl ConversionConfigBuilder {
    pub fn source_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_root = Some(path.into());
        self
    }

    pub fn dest_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.dest_root = Some(path.into());
        self
    }

    pub fn policy(mut self, policy: DimensionPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            source_root: self.source_root.unwrap_or(default.source_root),
            dest_root: self.dest_root.unwrap_or(default.dest_root),
            policy: self.policy.unwrap_or(default.policy),
            quality: self.quality.unwrap_or(default.quality).clamp(1, 100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ConversionConfig::builder()
            .source_root("in")
            .dest_root("out")
            .policy(DimensionPolicy::SquareInference)
            .quality(90)
            .build();

        assert_eq!(config.source_root, PathBuf::from("in"));
        assert_eq!(config.dest_root, PathBuf::from("out"));
        assert_eq!(config.policy, DimensionPolicy::SquareInference);
        assert_eq!(config.quality, 90);
    }

    #[test]
    fn test_builder_defaults() {
        let config = ConversionConfig::builder().build();
        assert_eq!(config.policy, DimensionPolicy::Sidecar);
        assert_eq!(config.quality, DEFAULT_QUALITY);
        assert_eq!(config.dest_root, PathBuf::from("AnnotatedTestImages"));
    }

    #[test]
    fn test_quality_clamped() {
        assert_eq!(ConversionConfig::builder().quality(0).build().quality, 1);
        assert_eq!(ConversionConfig::builder().quality(250).build().quality, 100);
    }
}
