use dda_core::{Image, PixelCoord};
use rayon::prelude::*;

use crate::types::{CornerType, ScoredCorner};
use crate::utils::has_consecutive_bits;

/// FAST segment test over a Bresenham circle of radius 3
pub struct CornerDetector;

impl CornerDetector {
    /// FAST circle offsets, clockwise from the top
    pub const FAST_OFFSETS: [(i32, i32); 16] = [
        (0, -3), (1, -3), (2, -2), (3, -1),
        (3, 0), (3, 1), (2, 2), (1, 3),
        (0, 3), (-1, 3), (-2, 2), (-3, 1),
        (-3, 0), (-3, -1), (-2, -2), (-1, -3),
    ];

    /// Distance from a corner to the outermost circle pixel
    pub const BORDER: u32 = 3;

    /// Scan every interior pixel, rows in parallel.
    ///
    /// Output is in row-major scan order regardless of thread count.
    pub fn detect(img: &Image, threshold: u8, arc_length: u8) -> Vec<ScoredCorner> {
        let (width, height) = img.dimensions();
        if width <= 2 * Self::BORDER || height <= 2 * Self::BORDER {
            return Vec::new();
        }

        (Self::BORDER..height - Self::BORDER)
            .into_par_iter()
            .flat_map_iter(|y| {
                let mut row = Vec::new();
                for x in Self::BORDER..width - Self::BORDER {
                    if let Some(response) = Self::segment_test(img, x, y, threshold, arc_length) {
                        row.push(ScoredCorner {
                            coord: PixelCoord::new(x as i32, y as i32),
                            response,
                        });
                    }
                }
                row
            })
            .collect()
    }

    /// Segment test for one pixel; returns the corner response when it passes.
    ///
    /// Caller guarantees the full circle lies inside the image.
    pub fn segment_test(img: &Image, x: u32, y: u32, threshold: u8, arc_length: u8) -> Option<f32> {
        let p = img.get_pixel(x, y)[0];
        let mut circle = [0u8; 16];
        let mut bright_mask = 0u16;
        let mut dark_mask = 0u16;

        for (i, &(dx, dy)) in Self::FAST_OFFSETS.iter().enumerate() {
            let xx = (x as i32 + dx) as u32;
            let yy = (y as i32 + dy) as u32;
            let q = img.get_pixel(xx, yy)[0];
            circle[i] = q;

            if q >= p.saturating_add(threshold) {
                bright_mask |= 1 << i;
            } else if q.saturating_add(threshold) <= p {
                dark_mask |= 1 << i;
            }
        }

        let n = arc_length as usize;
        let corner_type = if has_consecutive_bits(bright_mask, n) {
            CornerType::Bright
        } else if has_consecutive_bits(dark_mask, n) {
            CornerType::Dark
        } else {
            return None;
        };

        Some(Self::compute_response(p, &circle, bright_mask, dark_mask, corner_type))
    }

    /// Mean absolute intensity difference of the winning side of the circle
    fn compute_response(p: u8, circle: &[u8; 16], bright_mask: u16, dark_mask: u16, corner_type: CornerType) -> f32 {
        let mask = match corner_type {
            CornerType::Bright => bright_mask,
            CornerType::Dark => dark_mask,
        };

        let (sum, count) = circle
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .fold((0i32, 0i32), |(s, c), (_, &q)| (s + (q as i32 - p as i32).abs(), c + 1));

        sum as f32 / count.max(1) as f32
    }
}
