use anyhow::{Context, Result};
use image::{DynamicImage, GrayImage};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use crate::models::{Parameters, RegionRecord};
use crate::pipeline::PipelineResult;
use crate::segmentation::overlay::colorize_labels;

/// Suggested file name for the CSV download
pub const CSV_FILE_NAME: &str = "region_props.csv";

pub const CSV_HEADER: [&str; 10] = [
    "label", "area", "bbox_r0", "bbox_c0", "bbox_r1", "bbox_c1", "mean", "median", "min", "max",
];

/// Shortest representation that parses back to the same value; NaN is empty
fn csv_float(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        format!("{:?}", value)
    }
}

/// Write the region table as CSV at full precision
pub fn write_csv<W: Write>(records: &[RegionRecord], mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "{}", CSV_HEADER.join(","))?;
    for r in records {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{},{}",
            r.label,
            r.area,
            r.bbox_r0,
            r.bbox_c0,
            r.bbox_r1,
            r.bbox_c1,
            csv_float(r.mean),
            csv_float(r.median),
            csv_float(r.min),
            csv_float(r.max),
        )?;
    }
    writer.flush()
}

/// CSV export as UTF-8 bytes
pub fn to_csv_bytes(records: &[RegionRecord]) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_csv(records, &mut buf)?;
    Ok(buf)
}

pub fn save_csv(records: &[RegionRecord], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    write_csv(records, std::io::BufWriter::new(file))
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
    Ok(())
}

/// Fixed-width table with statistics rounded to two decimals
pub fn format_table(records: &[RegionRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>6} {:>6} {:>7} {:>7} {:>7} {:>7} {:>8} {:>8} {:>8} {:>8}",
        "label", "area", "bbox_r0", "bbox_c0", "bbox_r1", "bbox_c1", "mean", "median", "min", "max"
    );
    for r in records.iter().map(RegionRecord::rounded) {
        let _ = writeln!(
            out,
            "{:>6} {:>6} {:>7} {:>7} {:>7} {:>7} {:>8.2} {:>8.2} {:>8.2} {:>8.2}",
            r.label, r.area, r.bbox_r0, r.bbox_c0, r.bbox_r1, r.bbox_c1, r.mean, r.median, r.min,
            r.max
        );
    }
    out
}

/// Headline numbers of one run, as shown above the images
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub width: u32,
    pub height: u32,
    pub threshold: f64,
    pub region_count: u32,
    pub elapsed_secs: f64,
    pub parameters: Parameters,
    pub regions: Vec<RegionRecord>,
}

impl Summary {
    pub fn new(result: &PipelineResult, elapsed_secs: f64) -> Self {
        Self {
            width: result.labels.width(),
            height: result.labels.height(),
            threshold: result.threshold,
            region_count: result.region_count(),
            elapsed_secs,
            parameters: result.parameters,
            regions: result.regions.clone(),
        }
    }

    /// The three metrics formatted for display
    pub fn metrics(&self) -> [(&'static str, String); 3] {
        [
            ("Otsu threshold", format!("{:.1}", self.threshold)),
            ("Regions detected", self.region_count.to_string()),
            ("Time (s)", format!("{:.3}", self.elapsed_secs)),
        ]
    }
}

/// Output directories must be empty or not exist yet
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        let entries = std::fs::read_dir(dir)?;
        if entries.count() > 0 {
            return Err(anyhow::anyhow!(
                "Output directory is not empty: {}",
                dir.display()
            ));
        }
    } else {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Save the source, both masks, the label map and the overlay as PNGs
pub fn save_images(result: &PipelineResult, source: &GrayImage, dir: &Path) -> Result<()> {
    let images = [
        ("original.png", DynamicImage::ImageLuma8(source.clone())),
        ("mask.png", DynamicImage::ImageLuma8(result.mask.clone())),
        ("cleaned.png", DynamicImage::ImageLuma8(result.cleaned.clone())),
        ("labels.png", DynamicImage::ImageRgb8(colorize_labels(&result.labels))),
        ("overlay.png", DynamicImage::ImageRgb8(result.overlay.clone())),
    ];

    for (name, img) in images {
        let path = dir.join(name);
        img.save(&path)
            .map_err(|e| anyhow::anyhow!("Failed to save {}: {}", path.display(), e))?;
        tracing::info!("saved {}", path.display());
    }
    Ok(())
}
