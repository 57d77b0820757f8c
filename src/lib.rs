pub mod cache;
pub mod error;
pub mod export;
pub mod models;
pub mod pipeline;
pub mod sample;
pub mod segmentation;

pub use cache::{CacheClear, CacheKey, PipelineCache};
pub use error::PipelineError;
pub use models::{LabelMap, Parameters, RegionRecord};
pub use pipeline::{compute, PipelineResult, SegmentationPipeline};
pub use sample::sample_image;

#[cfg(feature = "gui")]
pub mod gui;
