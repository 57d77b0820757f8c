use coinseg::models::{BACKGROUND, FOREGROUND};
use coinseg::RegionRecord;
use image::{GrayImage, Luma};

/// A `width`x`height` image of intensity `bg` with `fg` blocks.
/// Blocks are `(row, col, rows, cols)`.
pub fn gray_with_blocks(
    width: u32,
    height: u32,
    bg: u8,
    fg: u8,
    blocks: &[(u32, u32, u32, u32)],
) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        let inside = blocks
            .iter()
            .any(|&(r, c, h, w)| y >= r && y < r + h && x >= c && x < c + w);
        Luma([if inside { fg } else { bg }])
    })
}

/// Build a mask from text rows: `#` is foreground, anything else background
pub fn mask_from_rows(rows: &[&str]) -> GrayImage {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.len()) as u32;
    GrayImage::from_fn(width, height, |x, y| {
        let on = rows[y as usize].as_bytes()[x as usize] == b'#';
        Luma([if on { FOREGROUND } else { BACKGROUND }])
    })
}

/// Render a mask back to text rows
pub fn mask_to_rows(mask: &GrayImage) -> Vec<String> {
    (0..mask.height())
        .map(|y| {
            (0..mask.width())
                .map(|x| if mask.get_pixel(x, y)[0] != BACKGROUND { '#' } else { '.' })
                .collect()
        })
        .collect()
}

/// A region record with the given statistics and a 1x1 box at the origin
pub fn record(label: u32, mean: f64, median: f64, min: f64, max: f64) -> RegionRecord {
    RegionRecord {
        label,
        area: 1,
        bbox_r0: 0,
        bbox_c0: 0,
        bbox_r1: 1,
        bbox_c1: 1,
        mean,
        median,
        min,
        max,
    }
}
