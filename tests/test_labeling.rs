mod common;

use coinseg::segmentation::labeling::{label_regions, max_label};
use coinseg::segmentation::regions::{median_sorted, region_stats};
use common::*;
use image::{GrayImage, Luma};

fn label_rows(rows: &[&str]) -> Vec<Vec<u32>> {
    let labels = label_regions(&mask_from_rows(rows));
    (0..labels.height())
        .map(|y| (0..labels.width()).map(|x| labels.get_pixel(x, y)[0]).collect())
        .collect()
}

#[test]
fn test_labels_follow_raster_order() {
    assert_eq!(
        label_rows(&[
            "..#..",
            "#...#",
            "#..##",
        ]),
        vec![
            vec![0, 0, 1, 0, 0],
            vec![2, 0, 0, 0, 3],
            vec![2, 0, 0, 3, 3],
        ]
    );
}

#[test]
fn test_u_shape_is_one_region() {
    assert_eq!(
        label_rows(&[
            "#.#",
            "#.#",
            "###",
        ]),
        vec![vec![1, 0, 1], vec![1, 0, 1], vec![1, 1, 1]]
    );
}

#[test]
fn test_diagonal_neighbors_get_distinct_labels() {
    assert_eq!(label_rows(&["#.", ".#"]), vec![vec![1, 0], vec![0, 2]]);
}

#[test]
fn test_single_pixel_masks() {
    assert_eq!(label_rows(&["#"]), vec![vec![1]]);
    assert_eq!(label_rows(&["."]), vec![vec![0]]);

    let labels = label_regions(&mask_from_rows(&["#"]));
    let stats = region_stats(&labels, &GrayImage::from_pixel(1, 1, Luma([77])));
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].area, 1);
    assert_eq!(stats[0].median, 77.0);
}

#[test]
fn test_empty_mask_has_no_labels() {
    let labels = label_regions(&GrayImage::new(4, 4));
    assert_eq!(max_label(&labels), 0);
    assert!(region_stats(&labels, &GrayImage::new(4, 4)).is_empty());
}

#[test]
fn test_region_statistics() {
    let mask = mask_from_rows(&[
        "......",
        ".##...",
        ".##..#",
        ".....#",
    ]);
    let intensity = GrayImage::from_fn(6, 4, |x, y| match (x, y) {
        (1, 1) => Luma([10]),
        (2, 1) => Luma([20]),
        (1, 2) => Luma([30]),
        (2, 2) => Luma([40]),
        (5, 2) => Luma([7]),
        (5, 3) => Luma([9]),
        _ => Luma([255]),
    });

    let labels = label_regions(&mask);
    let regions = region_stats(&labels, &intensity);
    assert_eq!(regions.len(), 2);

    let square = &regions[0];
    assert_eq!(square.label, 1);
    assert_eq!(square.area, 4);
    assert_eq!(
        (square.bbox_r0, square.bbox_c0, square.bbox_r1, square.bbox_c1),
        (1, 1, 3, 3)
    );
    assert_eq!(square.mean, 25.0);
    assert_eq!(square.median, 25.0);
    assert_eq!(square.min, 10.0);
    assert_eq!(square.max, 40.0);

    let bar = &regions[1];
    assert_eq!(bar.label, 2);
    assert_eq!(bar.area, 2);
    assert_eq!((bar.bbox_r0, bar.bbox_c0, bar.bbox_r1, bar.bbox_c1), (2, 5, 4, 6));
    assert_eq!(bar.mean, 8.0);
    assert_eq!(bar.median, 8.0);
}

#[test]
fn test_median() {
    assert_eq!(median_sorted(&[3, 5, 9]), 5.0);
    assert_eq!(median_sorted(&[1, 2, 3, 10]), 2.5);
    assert!(median_sorted(&[]).is_nan());
}
