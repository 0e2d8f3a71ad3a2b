use dda_core::error::ensure_non_empty;
use dda_core::{BinaryDesc, DescribeRegionPoint, FeatureResult, Image};
use imageproc::filter::gaussian_blur_f32;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{DescribeError, DescribeResult};
use crate::sampling::{bilinear_sample, footprint_inside, transform_offset};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest sampling radius accepted by [`BriefConfig::validate`]
pub const MAX_RADIUS: u32 = 1024;

/// BRIEF descriptor settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BriefConfig {
    /// Radius of the disc sample points are drawn from, at scale 1
    pub radius: u32,
    /// Number of intensity comparisons, one bit each
    pub num_pairs: usize,
    /// Gaussian blur applied to the frame before sampling; 0 disables it
    pub blur_sigma: f32,
    /// Seed for the sampling pattern
    pub seed: u64,
}

impl Default for BriefConfig {
    fn default() -> Self {
        Self {
            radius: 16,
            num_pairs: 256,
            blur_sigma: 1.0,
            seed: 0xB41E_F5EE,
        }
    }
}

impl BriefConfig {
    pub fn validate(&self) -> DescribeResult<()> {
        if self.radius == 0 || self.radius > MAX_RADIUS {
            return Err(DescribeError::InvalidRadius(self.radius));
        }
        if self.num_pairs == 0 {
            return Err(DescribeError::InvalidPairCount(self.num_pairs));
        }
        if !self.blur_sigma.is_finite() || self.blur_sigma < 0.0 {
            return Err(DescribeError::InvalidBlurSigma(self.blur_sigma));
        }
        Ok(())
    }
}

/// One intensity comparison: bit is set when `I(a) < I(b)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplePair {
    pub a: (i32, i32),
    pub b: (i32, i32),
}

/// Sampling pattern of a BRIEF descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct BriefDefinition {
    pub radius: u32,
    pub pairs: Vec<SamplePair>,
}

impl BriefDefinition {
    /// Draw `num_pairs` pairs uniformly from the disc of `radius`
    pub fn uniform_disc(seed: u64, radius: u32, num_pairs: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let r = radius as i32;
        let mut point = || loop {
            let x = rng.gen_range(-r..=r);
            let y = rng.gen_range(-r..=r);
            if x * x + y * y <= r * r {
                break (x, y);
            }
        };

        let pairs = (0..num_pairs)
            .map(|_| SamplePair { a: point(), b: point() })
            .collect();
        Self { radius, pairs }
    }
}

/// BRIEF binary descriptor.
///
/// The bound frame is blurred into an owned buffer by `set_image`; samples are
/// taken with bilinear interpolation so sub-pixel locations and non-integer
/// scales are supported.
#[derive(Debug, Clone)]
pub struct DescribeBrief {
    definition: BriefDefinition,
    blur_sigma: f32,
    blurred: Image,
}

impl DescribeBrief {
    pub fn new(config: BriefConfig) -> DescribeResult<Self> {
        config.validate()?;
        debug!(
            "BRIEF describer: radius={}, pairs={}, sigma={}",
            config.radius, config.num_pairs, config.blur_sigma
        );
        Ok(Self {
            definition: BriefDefinition::uniform_disc(config.seed, config.radius, config.num_pairs),
            blur_sigma: config.blur_sigma,
            blurred: Image::new(0, 0),
        })
    }

    pub fn definition(&self) -> &BriefDefinition {
        &self.definition
    }

    /// Footprint radius in pixels at `scale`
    pub fn footprint_radius(&self, scale: f64) -> f64 {
        (self.definition.radius as f64 * scale).ceil()
    }
}

impl DescribeRegionPoint for DescribeBrief {
    type Image = Image;
    type Desc = BinaryDesc;

    fn set_image(&mut self, image: &Image) -> FeatureResult<()> {
        let (width, height) = image.dimensions();
        ensure_non_empty(width, height)?;
        self.blurred = if self.blur_sigma > 0.0 {
            gaussian_blur_f32(image, self.blur_sigma)
        } else {
            image.clone()
        };
        Ok(())
    }

    fn is_in_bounds(&self, x: f64, y: f64, _orientation: f64, scale: f64) -> bool {
        // Pairs lie in a disc, so rotation does not change the footprint
        let r = self.footprint_radius(scale);
        let (width, height) = self.blurred.dimensions();
        footprint_inside(width, height, x, y, r, r)
    }

    fn process(&self, x: f64, y: f64, orientation: f64, scale: f64, description: &mut BinaryDesc) {
        let (sin, cos) = orientation.sin_cos();
        for (i, pair) in self.definition.pairs.iter().enumerate() {
            let (ax, ay) = transform_offset(pair.a.0 as f64, pair.a.1 as f64, cos, sin, scale);
            let (bx, by) = transform_offset(pair.b.0 as f64, pair.b.1 as f64, cos, sin, scale);
            let va = bilinear_sample(&self.blurred, x + ax, y + ay);
            let vb = bilinear_sample(&self.blurred, x + bx, y + by);
            description.set_bit(i, va < vb);
        }
    }

    fn create_description(&self) -> BinaryDesc {
        BinaryDesc::new(self.definition.pairs.len())
    }

    fn description_length(&self) -> usize {
        self.definition.pairs.len()
    }
}
