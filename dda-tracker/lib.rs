//! Detect/describe adapter feeding point-feature trackers.
//!
//! [`DetectDescribeAdapter`] runs a [`GeneralFeatureDetector`], filters the
//! candidates by describer footprint and hands back aligned locations and
//! descriptors. The helpers below wire it to the FAST detector and the
//! describers shipped with this workspace.

pub mod adapter;
pub mod config;
pub mod error;

pub use adapter::DetectDescribeAdapter;
pub use config::{DescriberConfig, DetectDescribeConfig, PipelineConfig};
pub use error::{AdapterError, AdapterResult};

pub use dda_core::{
    self, DescribeRegionPoint, DescriptionType, DetectDescribePoint, FeatureError, FeatureResult,
    GeneralFeatureDetector, Image, PixelCoord, Point2D,
};

use dda_describe::{BriefConfig, DescribeBrief, DescribePixelRegionNcc, NccConfig};
use dda_fast::{FastConfig, FastDetector};

/// FAST corners described with BRIEF
pub type FastBriefAdapter = DetectDescribeAdapter<FastDetector, DescribeBrief>;

/// FAST corners described with normalized pixel regions
pub type FastNccAdapter = DetectDescribeAdapter<FastDetector, DescribePixelRegionNcc>;

pub fn fast_brief(
    fast: FastConfig,
    brief: BriefConfig,
    config: DetectDescribeConfig,
) -> AdapterResult<FastBriefAdapter> {
    DetectDescribeAdapter::new(FastDetector::new(fast)?, DescribeBrief::new(brief)?, config)
}

pub fn fast_ncc(
    fast: FastConfig,
    ncc: NccConfig,
    config: DetectDescribeConfig,
) -> AdapterResult<FastNccAdapter> {
    DetectDescribeAdapter::new(FastDetector::new(fast)?, DescribePixelRegionNcc::new(ncc)?, config)
}
