use image::{GrayImage, Luma};

use crate::models::{BACKGROUND, FOREGROUND};
use crate::segmentation::labeling::{border_labels, component_sizes, components};

/// Drop foreground components with fewer than `min_size` pixels.
/// `min_size == 0` returns the mask unchanged.
pub fn remove_small_objects(mask: &GrayImage, min_size: u32) -> GrayImage {
    if min_size == 0 {
        return mask.clone();
    }

    let labels = components(mask, true);
    let sizes = component_sizes(&labels);

    GrayImage::from_fn(mask.width(), mask.height(), |x, y| {
        let label = labels.get_pixel(x, y)[0] as usize;
        if label != 0 && sizes[label] >= min_size {
            Luma([FOREGROUND])
        } else {
            Luma([BACKGROUND])
        }
    })
}

/// Fill enclosed background components with fewer than `min_size` pixels.
///
/// Background touching the image border is never a hole, whatever its size.
/// `min_size == 0` returns the mask unchanged.
pub fn fill_small_holes(mask: &GrayImage, min_size: u32) -> GrayImage {
    if min_size == 0 {
        return mask.clone();
    }

    let labels = components(mask, false);
    let sizes = component_sizes(&labels);
    let on_border = border_labels(&labels);

    GrayImage::from_fn(mask.width(), mask.height(), |x, y| {
        let label = labels.get_pixel(x, y)[0] as usize;
        let foreground = label == 0 || (!on_border[label] && sizes[label] < min_size);
        if foreground {
            Luma([FOREGROUND])
        } else {
            Luma([BACKGROUND])
        }
    })
}

/// Number of foreground pixels in a mask
pub fn foreground_pixels(mask: &GrayImage) -> usize {
    mask.pixels().filter(|p| p[0] != BACKGROUND).count()
}
