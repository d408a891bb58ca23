//! Dimension resolution module
//!
//! A raw RGBA dump carries no header, so its shape comes from one of two
//! policies: a `.txt` sidecar next to the buffer, or the assumption that the
//! buffer is a square image.

mod resolver;
mod sidecar;
mod square;
pub mod types;

pub use resolver::DimensionResolver;
pub use sidecar::{SidecarResolver, parse_dimension_hint};
pub use square::SquareResolver;
pub use types::{Dimensions, DimensionPolicy};
