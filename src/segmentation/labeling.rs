use image::{GrayImage, Luma};
use imageproc::region_labelling::{connected_components, Connectivity};
use std::collections::HashMap;

use crate::models::{LabelMap, BACKGROUND, FOREGROUND};

/// Label the 4-connected foreground components of a mask.
///
/// Labels start at 1 and follow row-major first-encounter order, so identical
/// masks always produce identical label maps.
pub fn label_regions(mask: &GrayImage) -> LabelMap {
    components(mask, true)
}

/// Label the 4-connected components of either the foreground (`true`) or the
/// background (`false`) pixels of a mask.
pub(crate) fn components(mask: &GrayImage, foreground: bool) -> LabelMap {
    let selected = GrayImage::from_fn(mask.width(), mask.height(), |x, y| {
        let on = mask.get_pixel(x, y)[0] != BACKGROUND;
        if on == foreground {
            Luma([FOREGROUND])
        } else {
            Luma([BACKGROUND])
        }
    });

    // imageproc's union-find has no room for label 1 on a one-pixel image
    if selected.width() * selected.height() == 1 {
        let label = u32::from(selected.get_pixel(0, 0)[0] == FOREGROUND);
        return LabelMap::from_pixel(1, 1, Luma([label]));
    }

    let labeled = connected_components(&selected, Connectivity::Four, Luma([BACKGROUND]));
    relabel_raster_order(labeled)
}

/// Renumber labels by first appearance in a row-major scan
fn relabel_raster_order(mut labels: LabelMap) -> LabelMap {
    let mut mapping: HashMap<u32, u32> = HashMap::new();
    let mut next_label = 1u32;

    for pixel in labels.pixels_mut() {
        if pixel[0] == 0 {
            continue;
        }
        let new_label = *mapping.entry(pixel[0]).or_insert_with(|| {
            let label = next_label;
            next_label += 1;
            label
        });
        pixel[0] = new_label;
    }

    labels
}

/// Highest label value, which equals the number of components
pub fn max_label(labels: &LabelMap) -> u32 {
    labels.pixels().map(|p| p[0]).max().unwrap_or(0)
}

/// Pixel count per label, indexed by label (index 0 is background)
pub(crate) fn component_sizes(labels: &LabelMap) -> Vec<u32> {
    let mut sizes = vec![0u32; max_label(labels) as usize + 1];
    for pixel in labels.pixels() {
        sizes[pixel[0] as usize] += 1;
    }
    sizes
}

/// Which labels have at least one pixel on the image border
pub(crate) fn border_labels(labels: &LabelMap) -> Vec<bool> {
    let mut touches = vec![false; max_label(labels) as usize + 1];
    let (width, height) = labels.dimensions();
    if width == 0 || height == 0 {
        return touches;
    }

    for x in 0..width {
        touches[labels.get_pixel(x, 0)[0] as usize] = true;
        touches[labels.get_pixel(x, height - 1)[0] as usize] = true;
    }
    for y in 0..height {
        touches[labels.get_pixel(0, y)[0] as usize] = true;
        touches[labels.get_pixel(width - 1, y)[0] as usize] = true;
    }

    touches
}
