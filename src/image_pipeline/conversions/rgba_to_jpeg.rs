use tracing::{info, instrument, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    conversions::discover::{find_test_images, output_path_for, sidecar_path_for},
    conversions::report::{BatchReport, SkippedFile},
    dimensions::{DimensionPolicy, DimensionResolver},
    jpeg::{ConversionConfig, JpegWriter, StandardJpegWriter},
    rgba::{RgbaBuffer, drop_alpha},
};

pub struct RgbaToJpegPipeline<D: DimensionResolver, W: JpegWriter> {
    resolver: D,
    writer: W,
    config: ConversionConfig,
}

impl RgbaToJpegPipeline<DimensionPolicy, StandardJpegWriter> {
    /// Pipeline resolving dimensions with `config.policy`.
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            resolver: config.policy,
            writer: StandardJpegWriter,
            config,
        }
    }
}

impl<D: DimensionResolver, W: JpegWriter> RgbaToJpegPipeline<D, W> {
    /// Uses `resolver` in place of `config.policy`.
    pub fn with_custom(resolver: D, writer: W, config: ConversionConfig) -> Self {
        Self {
            resolver,
            writer,
            config,
        }
    }

    #[instrument(skip(self, input_data, sidecar, output), fields(input_size = input_data.len()))]
    pub fn convert(
        &self,
        input_data: &[u8],
        sidecar: Option<&Path>,
        output: &mut dyn Write,
    ) -> Result<()> {
        let dimensions = {
            let _span = tracing::info_span!("resolve_dimensions").entered();
            self.resolver.resolve(input_data, sidecar)?
        };

        let buffer = {
            let _span = tracing::info_span!("validate_size",
                width = dimensions.width,
                height = dimensions.height
            ).entered();
            RgbaBuffer::new(input_data, dimensions)?
        };

        let rgb = {
            let _span = tracing::info_span!("drop_alpha").entered();
            drop_alpha(&buffer)
        };

        {
            let _span = tracing::info_span!("encode_jpeg").entered();
            self.writer.write_jpeg(&rgb, output, &self.config)?;
        }

        Ok(())
    }

    /// Converts one buffer file, reading its sidecar from next to it.
    ///
    /// The destination is only created once encoding has succeeded, and any
    /// existing file there is replaced.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let sidecar = sidecar_path_for(input_path);
        let mut encoded = Vec::new();
        self.convert(&input_data, Some(sidecar.as_path()), &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(())
    }

    /// Converts every `_testimage*.rgba` under the source root into the
    /// destination directory.
    ///
    /// Per-file failures are logged and recorded in the report. Only an
    /// inaccessible source root or an uncreatable destination aborts the run.
    #[instrument(skip(self), fields(
        source = %self.config.source_root.display(),
        dest = %self.config.dest_root.display()
    ))]
    pub fn run(&self) -> Result<BatchReport> {
        let dest_root = &self.config.dest_root;
        std::fs::create_dir_all(dest_root).map_err(|source| ConversionError::OutputDirUnavailable {
            path: dest_root.clone(),
            source,
        })?;

        let candidates = find_test_images(&self.config.source_root)?;
        info!("Found {} buffer files", candidates.len());

        let mut report = BatchReport::default();
        for input_path in candidates {
            match self.convert_candidate(&input_path) {
                Ok(output_path) => {
                    info!("Converted {} -> {}", input_path.display(), output_path.display());
                    report.converted.push((input_path, output_path));
                }
                Err(e) => {
                    warn!("Skipping {}: {}", input_path.display(), e);
                    report.skipped.push(SkippedFile {
                        path: input_path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            converted = report.converted.len(),
            skipped = report.skipped.len(),
            "Batch complete"
        );
        Ok(report)
    }

    fn convert_candidate(&self, input_path: &Path) -> Result<PathBuf> {
        let output_path = output_path_for(input_path, &self.config.dest_root).ok_or_else(|| {
            ConversionError::InputReadError(format!("{}: no file stem", input_path.display()))
        })?;
        self.convert_file(input_path, &output_path)?;
        Ok(output_path)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }
}
