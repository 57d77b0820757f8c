use image::GrayImage;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::Parameters;
use crate::pipeline::{PipelineResult, SegmentationPipeline};

/// Identity of one pipeline invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub image_digest: [u8; 32],
    pub parameters: Parameters,
}

impl CacheKey {
    pub fn new(image: &GrayImage, parameters: Parameters) -> Self {
        Self {
            image_digest: image_digest(image),
            parameters,
        }
    }
}

/// SHA-256 of an image: dimensions plus raw samples
pub fn image_digest(image: &GrayImage) -> [u8; 32] {
    let (width, height) = image.dimensions();
    let mut hasher = Sha256::new();
    hasher.update(width.to_le_bytes());
    hasher.update(height.to_le_bytes());
    hasher.update(image.as_raw());
    hasher.finalize().into()
}

/// A stored result together with the image it was computed from
#[derive(Debug)]
struct CacheEntry {
    image: GrayImage,
    result: Arc<PipelineResult>,
}

/// What a cache clear did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheClear {
    /// Stored results were dropped
    Cleared { entries: usize },
    /// Nothing has been computed yet in this session
    NothingComputed,
}

/// Memoized pipeline results, one per (image, parameters) key.
///
/// Results are handed out as `Arc`s, so clearing never invalidates a result a
/// caller already holds.
#[derive(Debug, Default)]
pub struct PipelineCache {
    entries: HashMap<CacheKey, CacheEntry>,
    computed: bool,
}

impl PipelineCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached result for the key, computing and storing it on a miss
    pub fn get_or_compute(
        &mut self,
        image: &GrayImage,
        parameters: Parameters,
    ) -> Result<Arc<PipelineResult>> {
        let key = CacheKey::new(image, parameters);
        match self.entries.get(&key) {
            Some(entry) if entry.image == *image => {
                debug!(?parameters, "pipeline cache hit");
                return Ok(entry.result.clone());
            }
            Some(_) => warn!(?parameters, "image digest collision, recomputing"),
            None => debug!(?parameters, "pipeline cache miss"),
        }

        let result = Arc::new(
            SegmentationPipeline::new()
                .with_parameters(parameters)
                .run(image)?,
        );
        self.computed = true;
        self.entries.insert(
            key,
            CacheEntry {
                image: image.clone(),
                result: result.clone(),
            },
        );
        Ok(result)
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every stored result
    pub fn clear(&mut self) -> CacheClear {
        if !self.computed {
            return CacheClear::NothingComputed;
        }
        let entries = self.entries.len();
        self.entries.clear();
        debug!(entries, "pipeline cache cleared");
        CacheClear::Cleared { entries }
    }
}
