use image::{GrayImage, Rgb, RgbImage};

use crate::models::LabelMap;

/// Opacity of the label colors over the grayscale image
pub const OVERLAY_ALPHA: f64 = 0.3;

/// Cyclic label palette: red, blue, yellow, magenta, green, indigo,
/// darkorange, cyan, pink, yellowgreen
pub const PALETTE: [[u8; 3]; 10] = [
    [255, 0, 0],
    [0, 0, 255],
    [255, 255, 0],
    [255, 0, 255],
    [0, 128, 0],
    [75, 0, 130],
    [255, 140, 0],
    [0, 255, 255],
    [255, 192, 203],
    [154, 205, 50],
];

/// Palette color for a positive label
pub fn label_color(label: u32) -> [u8; 3] {
    PALETTE[(label.saturating_sub(1) as usize) % PALETTE.len()]
}

fn blend(color: u8, gray: u8, alpha: f64) -> u8 {
    let value = alpha * color as f64 + (1.0 - alpha) * gray as f64;
    value.round().clamp(0.0, 255.0) as u8
}

/// Tint every labeled pixel with its label color at `alpha` opacity.
/// Background pixels keep their gray value on all three channels.
pub fn render_overlay(gray: &GrayImage, labels: &LabelMap, alpha: f64) -> RgbImage {
    RgbImage::from_fn(gray.width(), gray.height(), |x, y| {
        let g = gray.get_pixel(x, y)[0];
        let label = labels.get_pixel(x, y)[0];
        if label == 0 {
            return Rgb([g, g, g]);
        }
        let [r, gr, b] = label_color(label);
        Rgb([blend(r, g, alpha), blend(gr, g, alpha), blend(b, g, alpha)])
    })
}

/// Label map drawn in palette colors on black
pub fn colorize_labels(labels: &LabelMap) -> RgbImage {
    RgbImage::from_fn(labels.width(), labels.height(), |x, y| {
        match labels.get_pixel(x, y)[0] {
            0 => Rgb([0, 0, 0]),
            label => Rgb(label_color(label)),
        }
    })
}
