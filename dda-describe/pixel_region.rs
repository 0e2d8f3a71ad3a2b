use dda_core::error::ensure_non_empty;
use dda_core::{DescribeRegionPoint, F64Desc, FeatureResult, Image};
use log::debug;

use crate::error::{DescribeError, DescribeResult};
use crate::sampling::{bilinear_sample, footprint_inside, transform_offset};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest region side accepted by [`NccConfig::validate`]
pub const MAX_REGION_SIDE: u32 = 1023;

/// Pixel-region descriptor settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NccConfig {
    pub region_width: u32,
    pub region_height: u32,
}

impl Default for NccConfig {
    fn default() -> Self {
        Self {
            region_width: 11,
            region_height: 11,
        }
    }
}

impl NccConfig {
    pub fn validate(&self) -> DescribeResult<()> {
        let valid_side = |v: u32| v % 2 == 1 && v <= MAX_REGION_SIDE;
        if !valid_side(self.region_width) || !valid_side(self.region_height) {
            return Err(DescribeError::InvalidRegion {
                width: self.region_width,
                height: self.region_height,
            });
        }
        Ok(())
    }
}

/// Raw pixel grid around a point, normalized to zero mean and unit length so
/// that the dot product of two descriptors is their normalized cross correlation
#[derive(Debug, Clone)]
pub struct DescribePixelRegionNcc {
    half_width: u32,
    half_height: u32,
    image: Image,
}

impl DescribePixelRegionNcc {
    pub fn new(config: NccConfig) -> DescribeResult<Self> {
        config.validate()?;
        debug!("NCC describer: region={}x{}", config.region_width, config.region_height);
        Ok(Self {
            half_width: config.region_width / 2,
            half_height: config.region_height / 2,
            image: Image::new(0, 0),
        })
    }

    fn region_width(&self) -> u32 {
        2 * self.half_width + 1
    }

    fn region_height(&self) -> u32 {
        2 * self.half_height + 1
    }

    /// Footprint half-extents in pixels at the given orientation and scale
    pub fn footprint(&self, orientation: f64, scale: f64) -> (f64, f64) {
        let hw = self.half_width as f64;
        let hh = self.half_height as f64;
        if orientation == 0.0 {
            ((hw * scale).ceil(), (hh * scale).ceil())
        } else {
            let r = (hw.hypot(hh) * scale).ceil();
            (r, r)
        }
    }

    fn normalize(values: &mut [f64]) {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        values.iter_mut().for_each(|v| *v -= mean);
        let norm = values.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > f64::EPSILON {
            values.iter_mut().for_each(|v| *v /= norm);
        }
    }
}

impl DescribeRegionPoint for DescribePixelRegionNcc {
    type Image = Image;
    type Desc = F64Desc;

    fn set_image(&mut self, image: &Image) -> FeatureResult<()> {
        let (width, height) = image.dimensions();
        ensure_non_empty(width, height)?;
        self.image = image.clone();
        Ok(())
    }

    fn is_in_bounds(&self, x: f64, y: f64, orientation: f64, scale: f64) -> bool {
        let (rx, ry) = self.footprint(orientation, scale);
        let (width, height) = self.image.dimensions();
        footprint_inside(width, height, x, y, rx, ry)
    }

    fn process(&self, x: f64, y: f64, orientation: f64, scale: f64, description: &mut F64Desc) {
        let (sin, cos) = orientation.sin_cos();
        let hw = self.half_width as i32;
        let hh = self.half_height as i32;

        let mut idx = 0;
        for dy in -hh..=hh {
            for dx in -hw..=hw {
                let (ox, oy) = transform_offset(dx as f64, dy as f64, cos, sin, scale);
                description.value[idx] = bilinear_sample(&self.image, x + ox, y + oy);
                idx += 1;
            }
        }
        Self::normalize(&mut description.value);
    }

    fn create_description(&self) -> F64Desc {
        F64Desc::new(self.description_length())
    }

    fn description_length(&self) -> usize {
        self.region_width() as usize * self.region_height() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dda_core::{DescriptionType, TupleDesc};
    use image::{GrayImage, Luma};

    fn textured_image(width: u32, height: u32) -> GrayImage {
        GrayImage::from_fn(width, height, |x, y| Luma([((x * 7 + y * 13) % 251) as u8]))
    }

    #[test]
    fn test_invalid_region() {
        let too_wide = MAX_REGION_SIDE + 2;
        for (w, h) in [(0, 5), (4, 5), (5, 6), (too_wide, 3), (3, too_wide), (70_001, 70_001)] {
            let cfg = NccConfig { region_width: w, region_height: h };
            assert_eq!(
                DescribePixelRegionNcc::new(cfg).unwrap_err(),
                DescribeError::InvalidRegion { width: w, height: h }
            );
        }
    }

    #[test]
    fn test_largest_region_accepted() {
        let cfg = NccConfig { region_width: MAX_REGION_SIDE, region_height: MAX_REGION_SIDE };
        let ncc = DescribePixelRegionNcc::new(cfg).unwrap();
        assert_eq!(ncc.description_length(), 1023 * 1023);
    }

    #[test]
    fn test_shape_and_type() {
        let ncc = DescribePixelRegionNcc::new(NccConfig { region_width: 5, region_height: 3 }).unwrap();
        assert_eq!(ncc.description_length(), 15);
        assert_eq!(ncc.create_description().size(), 15);
        assert_eq!(ncc.description_type(), DescriptionType::F64);
    }

    #[test]
    fn test_bounds() {
        let mut ncc = DescribePixelRegionNcc::new(NccConfig { region_width: 11, region_height: 5 }).unwrap();
        ncc.set_image(&textured_image(40, 30)).unwrap();

        assert!(ncc.is_in_bounds(5.0, 2.0, 0.0, 1.0));
        assert!(!ncc.is_in_bounds(4.0, 10.0, 0.0, 1.0));
        assert!(!ncc.is_in_bounds(10.0, 28.0, 0.0, 1.0));
        assert!(ncc.is_in_bounds(34.0, 27.0, 0.0, 1.0));
        assert!(!ncc.is_in_bounds(34.0, 27.0, 0.0, 1.5));
        // Rotated footprints are bounded by the region's diagonal
        assert!(!ncc.is_in_bounds(5.0, 15.0, 0.3, 1.0));
    }

    #[test]
    fn test_descriptor_is_normalized() {
        let mut ncc = DescribePixelRegionNcc::new(NccConfig::default()).unwrap();
        ncc.set_image(&textured_image(40, 40)).unwrap();
        let mut desc = ncc.create_description();
        ncc.process(20.0, 20.0, 0.0, 1.0, &mut desc);

        let mean: f64 = desc.value.iter().sum::<f64>() / desc.value.len() as f64;
        assert!(mean.abs() < 1e-9);
        assert!((desc.correlation(&desc) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_flat_region_is_all_zero() {
        let mut ncc = DescribePixelRegionNcc::new(NccConfig::default()).unwrap();
        ncc.set_image(&GrayImage::from_pixel(30, 30, Luma([200]))).unwrap();
        let mut desc = ncc.create_description();
        ncc.process(15.0, 15.0, 0.0, 1.0, &mut desc);
        assert!(desc.value.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_invariant_to_brightness_offset() {
        let base = textured_image(40, 40);
        let brighter = GrayImage::from_fn(40, 40, |x, y| Luma([base.get_pixel(x, y)[0] / 2 + 100]));
        let darker = GrayImage::from_fn(40, 40, |x, y| Luma([base.get_pixel(x, y)[0] / 2]));

        let mut ncc = DescribePixelRegionNcc::new(NccConfig::default()).unwrap();
        let mut a = ncc.create_description();
        let mut b = ncc.create_description();
        ncc.set_image(&brighter).unwrap();
        ncc.process(20.0, 20.0, 0.0, 1.0, &mut a);
        ncc.set_image(&darker).unwrap();
        ncc.process(20.0, 20.0, 0.0, 1.0, &mut b);

        assert!(a.euclidean_sq(&b) < 1e-9);
    }
}
