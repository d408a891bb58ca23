use rgba_thumbs::image_pipeline::{ConversionConfig, RgbaToJpegPipeline};
use rgba_thumbs::logger;

use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    logger::init();

    let config = ConversionConfig::default();
    let pipeline = RgbaToJpegPipeline::new(config);

    info!("RGBA to JPEG converter initialized");
    info!("Source: {}", pipeline.config().source_root.display());
    info!("Destination: {}", pipeline.config().dest_root.display());
    info!("Dimension policy: {:?}", pipeline.config().policy);

    let report = pipeline.run()?;

    if !report.is_clean() {
        warn!("{} of {} files skipped", report.skipped.len(), report.total());
    }

    Ok(())
}
