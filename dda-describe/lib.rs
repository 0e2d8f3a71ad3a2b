//! Region describers for point features.

pub mod brief;
pub mod error;
pub mod pixel_region;
pub mod sampling;

pub use brief::{BriefConfig, BriefDefinition, DescribeBrief, SamplePair, MAX_RADIUS};
pub use error::{DescribeError, DescribeResult};
pub use pixel_region::{DescribePixelRegionNcc, NccConfig, MAX_REGION_SIDE};
