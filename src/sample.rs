//! Built-in sample image: a tray of coins on a textured background.
//!
//! The image is generated procedurally so every run sees the same pixels.

use image::{GrayImage, Luma};

pub const SAMPLE_WIDTH: u32 = 384;
pub const SAMPLE_HEIGHT: u32 = 303;

const ROWS: u32 = 4;
const COLS: u32 = 6;

/// Deterministic pixel noise in `-6..=6`
fn noise(x: u32, y: u32) -> i32 {
    let mut h = x
        .wrapping_mul(374_761_393)
        .wrapping_add(y.wrapping_mul(668_265_263));
    h = (h ^ (h >> 13)).wrapping_mul(1_274_126_177);
    h ^= h >> 16;
    (h % 13) as i32 - 6
}

struct Coin {
    cx: f32,
    cy: f32,
    radius: f32,
    brightness: f32,
    /// Dark engraved ring, as a fraction of the radius
    ring: Option<(f32, f32)>,
}

fn coins() -> Vec<Coin> {
    let mut result = Vec::new();
    for row in 0..ROWS {
        for col in 0..COLS {
            let index = row * COLS + col;
            let radius = 16.0 + ((index * 7) % 9) as f32;
            let brightness = 150.0 + ((index * 13) % 70) as f32;
            let ring = if index % 3 == 0 {
                Some((0.45, 0.6))
            } else {
                None
            };
            result.push(Coin {
                cx: 32.0 + col as f32 * 64.0,
                cy: 40.0 + row as f32 * 74.0,
                radius,
                brightness,
                ring,
            });
        }
    }
    result
}

/// Background intensity: a soft diagonal gradient plus noise
fn background(x: u32, y: u32) -> f32 {
    let gradient = 15.0 * (x as f32 / SAMPLE_WIDTH as f32) + 15.0 * (y as f32 / SAMPLE_HEIGHT as f32);
    45.0 + gradient + noise(x, y) as f32
}

/// Bright specks that are too small to be coins
const SPECKS: [(u32, u32); 6] = [(8, 8), (100, 290), (200, 5), (300, 150), (370, 280), (64, 115)];

/// Generate the sample image
pub fn sample_image() -> GrayImage {
    let coins = coins();

    GrayImage::from_fn(SAMPLE_WIDTH, SAMPLE_HEIGHT, |x, y| {
        let mut value = background(x, y);

        for coin in &coins {
            let dx = x as f32 - coin.cx;
            let dy = y as f32 - coin.cy;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance > coin.radius {
                continue;
            }
            let rel = distance / coin.radius;
            // brighter toward the upper left rim
            let shading = 12.0 * (-dx - dy) / (2.0 * coin.radius);
            value = coin.brightness + shading - 10.0 * rel + noise(x, y) as f32;
            if let Some((inner, outer)) = coin.ring {
                if rel >= inner && rel <= outer {
                    value -= 110.0;
                }
            }
            // small pit near the center
            if dx.abs() < 1.5 && (dy - 3.0).abs() < 1.5 {
                value = 40.0;
            }
        }

        for &(sx, sy) in &SPECKS {
            if x >= sx && x < sx + 3 && y >= sy && y < sy + 3 {
                value = 210.0;
            }
        }

        Luma([value.round().clamp(0.0, 255.0) as u8])
    })
}
