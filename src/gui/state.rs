use std::sync::Arc;
use std::time::Instant;

use iced::widget::image::Handle;
use image::{DynamicImage, GrayImage};

use crate::cache::{CacheClear, PipelineCache};
use crate::models::Parameters;
use crate::pipeline::PipelineResult;
use crate::sample::sample_image;

/// Status line under the sidebar buttons
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Info(String),
    Error(String),
}

/// A pipeline result with its images ready for display
#[derive(Debug, Clone)]
pub struct RenderedResult {
    pub result: Arc<PipelineResult>,
    pub elapsed_secs: f64,
    pub cleaned: Handle,
    pub overlay: Handle,
}

impl RenderedResult {
    fn new(result: Arc<PipelineResult>, elapsed_secs: f64) -> Self {
        let cleaned = to_handle(DynamicImage::ImageLuma8(result.cleaned.clone()));
        let overlay = to_handle(DynamicImage::ImageRgb8(result.overlay.clone()));
        Self {
            result,
            elapsed_secs,
            cleaned,
            overlay,
        }
    }
}

pub(crate) fn to_handle(img: DynamicImage) -> Handle {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Handle::from_rgba(width, height, rgba.into_raw())
}

#[derive(Debug)]
pub struct AppState {
    pub source: GrayImage,
    pub source_handle: Handle,
    pub parameters: Parameters,
    pub cache: PipelineCache,
    pub current: Option<RenderedResult>,
    pub notice: Option<Notice>,
}

impl AppState {
    /// Recompute (or fetch from the cache) for the current slider values
    pub fn recompute(&mut self) {
        let start = Instant::now();
        match self.cache.get_or_compute(&self.source, self.parameters) {
            Ok(result) => {
                let elapsed = start.elapsed().as_secs_f64();
                self.current = Some(RenderedResult::new(result, elapsed));
            }
            Err(e) => {
                tracing::error!("pipeline failed: {}", e);
                self.current = None;
                self.notice = Some(Notice::Error(e.to_string()));
            }
        }
    }

    pub fn clear_cache(&mut self) {
        self.notice = Some(match self.cache.clear() {
            CacheClear::Cleared { entries } => {
                Notice::Success(format!("Cache cleared ({} entries).", entries))
            }
            CacheClear::NothingComputed => {
                Notice::Info("Nothing has been computed yet in this session.".to_string())
            }
        });
    }
}

impl Default for AppState {
    fn default() -> Self {
        let source = sample_image();
        let source_handle = to_handle(DynamicImage::ImageLuma8(source.clone()));
        Self {
            source,
            source_handle,
            parameters: Parameters::default(),
            cache: PipelineCache::new(),
            current: None,
            notice: None,
        }
    }
}
