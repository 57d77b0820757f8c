use image::{ImageBuffer, Luma};
use serde::{Deserialize, Serialize};

/// Per-pixel region labels; 0 is background
pub type LabelMap = ImageBuffer<Luma<u32>, Vec<u32>>;

/// Mask value for foreground pixels
pub const FOREGROUND: u8 = 255;
/// Mask value for background pixels
pub const BACKGROUND: u8 = 0;

/// Slider bounds shared by the CLI and the GUI
pub const PARAM_MIN: u32 = 0;
pub const PARAM_MAX: u32 = 1000;
pub const PARAM_STEP: u32 = 10;
pub const DEFAULT_MIN_OBJECT_SIZE: u32 = 50;
pub const DEFAULT_MIN_HOLE_SIZE: u32 = 50;

/// Area thresholds for mask cleanup. A value of 0 disables the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameters {
    pub min_object_size: u32,
    pub min_hole_size: u32,
}

impl Parameters {
    pub fn new(min_object_size: u32, min_hole_size: u32) -> Self {
        Self {
            min_object_size,
            min_hole_size,
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_OBJECT_SIZE, DEFAULT_MIN_HOLE_SIZE)
    }
}

/// One row of the region table.
///
/// The bounding box uses image rows/columns, inclusive at the `0` edge and
/// exclusive at the `1` edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRecord {
    pub label: u32,
    pub area: u32,
    pub bbox_r0: u32,
    pub bbox_c0: u32,
    pub bbox_r1: u32,
    pub bbox_c1: u32,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

impl RegionRecord {
    /// Whether a pixel lies inside the bounding box
    pub fn bbox_contains(&self, row: u32, col: u32) -> bool {
        row >= self.bbox_r0 && row < self.bbox_r1 && col >= self.bbox_c0 && col < self.bbox_c1
    }

    /// Copy with the intensity statistics rounded to two decimals.
    /// Only for on-screen display; exports use the unrounded record.
    pub fn rounded(&self) -> Self {
        Self {
            mean: round2(self.mean),
            median: round2(self.median),
            min: round2(self.min),
            max: round2(self.max),
            ..self.clone()
        }
    }
}

/// Round to two decimals, leaving NaN untouched
pub fn round2(value: f64) -> f64 {
    if value.is_nan() {
        return value;
    }
    (value * 100.0).round() / 100.0
}
