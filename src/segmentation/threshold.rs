use image::{GrayImage, Luma};

use crate::models::{BACKGROUND, FOREGROUND};

/// Compute a global threshold with Otsu's method.
///
/// Every intensity `t` is tried as a split into `{v <= t}` and `{v > t}`; the
/// one with the largest between-class variance wins, the lowest `t` on ties.
/// A single-valued image returns that value, so binarizing it yields an empty
/// mask.
pub fn otsu_threshold(img: &GrayImage) -> f64 {
    let mut histogram = [0u64; 256];
    for pixel in img.pixels() {
        histogram[pixel[0] as usize] += 1;
    }

    let first = histogram.iter().position(|&c| c > 0);
    let last = histogram.iter().rposition(|&c| c > 0);
    let (first, last) = match (first, last) {
        (Some(first), Some(last)) => (first, last),
        _ => return 0.0,
    };
    if first == last {
        return first as f64;
    }

    let total: u64 = histogram.iter().sum();
    let total_sum: f64 = histogram
        .iter()
        .enumerate()
        .map(|(value, &count)| value as f64 * count as f64)
        .sum();

    let mut weight_below = 0u64;
    let mut sum_below = 0.0;
    let mut best_variance = -1.0;
    let mut best_split = first;

    for split in first..last {
        weight_below += histogram[split];
        sum_below += split as f64 * histogram[split] as f64;

        let weight_above = total - weight_below;
        if weight_below == 0 || weight_above == 0 {
            continue;
        }

        let mean_below = sum_below / weight_below as f64;
        let mean_above = (total_sum - sum_below) / weight_above as f64;
        let diff = mean_below - mean_above;
        let variance = weight_below as f64 * weight_above as f64 * diff * diff;

        if variance > best_variance {
            best_variance = variance;
            best_split = split;
        }
    }

    best_split as f64
}

/// Foreground wherever the intensity is strictly above `threshold`
pub fn binarize(img: &GrayImage, threshold: f64) -> GrayImage {
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        if img.get_pixel(x, y)[0] as f64 > threshold {
            Luma([FOREGROUND])
        } else {
            Luma([BACKGROUND])
        }
    })
}
