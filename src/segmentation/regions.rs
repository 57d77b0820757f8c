use image::GrayImage;
use std::collections::BTreeMap;

use crate::models::{LabelMap, RegionRecord};

/// Running bounds and intensities of one label
struct RegionAccumulator {
    min_row: u32,
    min_col: u32,
    max_row: u32,
    max_col: u32,
    intensities: Vec<u8>,
}

impl RegionAccumulator {
    fn new(row: u32, col: u32) -> Self {
        Self {
            min_row: row,
            min_col: col,
            max_row: row,
            max_col: col,
            intensities: Vec::new(),
        }
    }

    fn add(&mut self, row: u32, col: u32, value: u8) {
        self.min_row = self.min_row.min(row);
        self.min_col = self.min_col.min(col);
        self.max_row = self.max_row.max(row);
        self.max_col = self.max_col.max(col);
        self.intensities.push(value);
    }

    fn into_record(mut self, label: u32) -> RegionRecord {
        self.intensities.sort_unstable();
        let area = self.intensities.len() as u32;
        let sum: u64 = self.intensities.iter().map(|&v| v as u64).sum();
        let mean = if area > 0 { sum as f64 / area as f64 } else { f64::NAN };

        RegionRecord {
            label,
            area,
            bbox_r0: self.min_row,
            bbox_c0: self.min_col,
            bbox_r1: self.max_row + 1,
            bbox_c1: self.max_col + 1,
            mean,
            median: median_sorted(&self.intensities),
            min: self.intensities.first().map_or(f64::NAN, |&v| v as f64),
            max: self.intensities.last().map_or(f64::NAN, |&v| v as f64),
        }
    }
}

/// Median of sorted samples; even counts average the two middle values.
/// Empty input has no median and yields NaN.
pub fn median_sorted(values: &[u8]) -> f64 {
    let n = values.len();
    if n == 0 {
        return f64::NAN;
    }
    if n % 2 == 1 {
        values[n / 2] as f64
    } else {
        (values[n / 2 - 1] as f64 + values[n / 2] as f64) / 2.0
    }
}

/// Per-label area, bounding box and intensity statistics, sorted by label.
///
/// `intensity` must have the same dimensions as `labels`.
pub fn region_stats(labels: &LabelMap, intensity: &GrayImage) -> Vec<RegionRecord> {
    let mut regions: BTreeMap<u32, RegionAccumulator> = BTreeMap::new();

    for (x, y, label) in labels.enumerate_pixels() {
        let label_val = label[0];
        if label_val == 0 {
            continue;
        }
        let value = intensity.get_pixel(x, y)[0];

        regions
            .entry(label_val)
            .or_insert_with(|| RegionAccumulator::new(y, x))
            .add(y, x, value);
    }

    regions
        .into_iter()
        .map(|(label, acc)| acc.into_record(label))
        .collect()
}
