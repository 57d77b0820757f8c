#![allow(dead_code, unused_imports)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used items from coinseg for tests
pub use coinseg::segmentation::foreground_pixels;
pub use coinseg::{compute, sample_image, PipelineError, PipelineResult};
