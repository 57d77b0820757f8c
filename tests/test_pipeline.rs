mod common;

use coinseg::segmentation::overlay::{label_color, render_overlay, OVERLAY_ALPHA, PALETTE};
use coinseg::{LabelMap, Parameters, SegmentationPipeline};
use common::*;
use image::{GrayImage, Luma, Rgb};
use std::collections::BTreeSet;

fn gray_as_rgb(img: &GrayImage) -> image::RgbImage {
    image::RgbImage::from_fn(img.width(), img.height(), |x, y| {
        let g = img.get_pixel(x, y)[0];
        Rgb([g, g, g])
    })
}

#[test]
fn test_single_block_scenario() -> anyhow::Result<()> {
    let img = gray_with_blocks(10, 10, 50, 200, &[(2, 5, 3, 3)]);
    let result = compute(&img, 0, 0)?;

    assert!(result.threshold >= 50.0 && result.threshold < 200.0);
    assert_eq!(result.mask, gray_with_blocks(10, 10, 0, 255, &[(2, 5, 3, 3)]));
    assert_eq!(result.cleaned, result.mask);
    assert_eq!(result.region_count(), 1);

    for (x, y, label) in result.labels.enumerate_pixels() {
        let inside = (2..5).contains(&y) && (5..8).contains(&x);
        assert_eq!(label[0], if inside { 1 } else { 0 });
    }

    assert_eq!(result.regions.len(), 1);
    let r = &result.regions[0];
    assert_eq!(r.label, 1);
    assert_eq!(r.area, 9);
    assert_eq!((r.bbox_r0, r.bbox_c0, r.bbox_r1, r.bbox_c1), (2, 5, 5, 8));
    assert_eq!((r.mean, r.median, r.min, r.max), (200.0, 200.0, 200.0, 200.0));

    Ok(())
}

#[test]
fn test_all_zero_image() -> anyhow::Result<()> {
    let img = GrayImage::new(12, 7);
    let result = compute(&img, 50, 50)?;

    assert_eq!(result.mask_foreground(), 0);
    assert_eq!(result.cleaned_foreground(), 0);
    assert!(result.labels.pixels().all(|p| p[0] == 0));
    assert!(result.regions.is_empty());
    assert_eq!(result.region_count(), 0);
    assert_eq!(result.overlay, gray_as_rgb(&img));

    Ok(())
}

#[test]
fn test_two_small_blocks_are_removed() -> anyhow::Result<()> {
    let img = gray_with_blocks(10, 10, 50, 200, &[(1, 1, 2, 2), (6, 6, 2, 2)]);
    let result = compute(&img, 5, 0)?;

    assert_eq!(result.mask_foreground(), 8);
    assert_eq!(result.cleaned_foreground(), 0);
    assert!(result.regions.is_empty());
    assert_eq!(result.overlay, gray_as_rgb(&img));

    Ok(())
}

#[test]
fn test_empty_image_is_invalid_input() {
    for (w, h) in [(0, 0), (0, 5), (5, 0)] {
        let err = compute(&GrayImage::new(w, h), 50, 50).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidInput(_)));
    }
}

#[test]
fn test_pipeline_is_deterministic() -> anyhow::Result<()> {
    let img = sample_image();
    let first = compute(&img, 50, 50)?;
    let second = compute(&img, 50, 50)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_builder_matches_compute() -> anyhow::Result<()> {
    let img = sample_image();
    let via_builder = SegmentationPipeline::new()
        .with_parameters(Parameters::new(30, 120))
        .run(&img)?;
    assert_eq!(via_builder, compute(&img, 30, 120)?);
    assert_eq!(via_builder.parameters, Parameters::new(30, 120));
    Ok(())
}

#[test]
fn test_zero_parameters_keep_threshold_mask() -> anyhow::Result<()> {
    let img = sample_image();
    let result = compute(&img, 0, 0)?;
    assert_eq!(result.cleaned, result.mask);
    Ok(())
}

#[test]
fn test_labels_agree_with_region_table() -> anyhow::Result<()> {
    let img = sample_image();
    let result = compute(&img, 50, 50)?;
    assert!(result.region_count() >= 1);

    let distinct: BTreeSet<u32> = result
        .labels
        .pixels()
        .map(|p| p[0])
        .filter(|&l| l != 0)
        .collect();
    assert_eq!(distinct.len(), result.regions.len());
    assert_eq!(result.region_count() as usize, result.regions.len());

    let mut areas = vec![0u32; result.regions.len() + 1];
    let mut touches = vec![[false; 4]; result.regions.len() + 1];
    for (x, y, label) in result.labels.enumerate_pixels() {
        let l = label[0] as usize;
        if l == 0 {
            continue;
        }
        areas[l] += 1;
        let r = &result.regions[l - 1];
        assert_eq!(r.label as usize, l);
        assert!(r.bbox_contains(y, x));
        touches[l][0] |= y == r.bbox_r0;
        touches[l][1] |= x == r.bbox_c0;
        touches[l][2] |= y + 1 == r.bbox_r1;
        touches[l][3] |= x + 1 == r.bbox_c1;
    }

    for r in &result.regions {
        assert_eq!(r.area, areas[r.label as usize]);
        // every bbox edge is touched by the region, so the box is tight
        assert_eq!(touches[r.label as usize], [true; 4]);
        assert!(r.min <= r.median && r.median <= r.max);
        assert!(r.min <= r.mean && r.mean <= r.max);
    }

    Ok(())
}

#[test]
fn test_sample_finds_coins() -> anyhow::Result<()> {
    let img = sample_image();
    assert_eq!(img.dimensions(), (384, 303));

    let result = compute(&img, 50, 50)?;
    assert!(result.threshold > 40.0 && result.threshold < 220.0);
    // specks are smaller than 50 pixels and must be gone
    assert!(result.regions.iter().all(|r| r.area >= 50));
    Ok(())
}

#[test]
fn test_single_pixel_images() -> anyhow::Result<()> {
    for value in [0u8, 200] {
        let img = GrayImage::from_pixel(1, 1, Luma([value]));
        for (min_object_size, min_hole_size) in [(0, 10), (10, 0), (50, 50)] {
            let result = compute(&img, min_object_size, min_hole_size)?;
            // a constant image thresholds at its own value, so nothing is foreground
            assert_eq!(result.threshold, value as f64);
            assert_eq!(result.cleaned_foreground(), 0);
            assert_eq!(result.region_count(), 0);
            assert!(result.regions.is_empty());
            assert_eq!(result.overlay, gray_as_rgb(&img));
        }
    }
    Ok(())
}

#[test]
fn test_overlay_blends_label_colors() {
    let gray = GrayImage::from_pixel(3, 1, Luma([101]));
    let mut labels = LabelMap::new(3, 1);
    labels.put_pixel(1, 0, Luma([1]));
    labels.put_pixel(2, 0, Luma([12]));

    let overlay = render_overlay(&gray, &labels, OVERLAY_ALPHA);
    assert_eq!(*overlay.get_pixel(0, 0), Rgb([101, 101, 101]));
    // 0.3 * red + 0.7 * 101
    assert_eq!(*overlay.get_pixel(1, 0), Rgb([147, 71, 71]));
    // label 12 wraps around to the second palette color (blue)
    assert_eq!(label_color(12), PALETTE[1]);
    assert_eq!(*overlay.get_pixel(2, 0), Rgb([71, 71, 147]));
}
