pub mod image_pipeline;
pub mod logger;
pub mod uv_transform;
