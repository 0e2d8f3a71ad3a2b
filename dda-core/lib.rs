//! Core types shared by the detector, describer and adapter crates.

pub mod desc;
pub mod error;
pub mod geometry;
pub mod queue;
pub mod traits;

pub use desc::{BinaryDesc, DescriptionType, F64Desc, TupleDesc};
pub use error::{FeatureError, FeatureResult};
pub use geometry::{PixelCoord, Point2D};
pub use queue::GrowQueue;
pub use traits::{DescribeRegionPoint, DetectDescribePoint, GeneralFeatureDetector};

pub use image;

/// Row-major 8-bit grayscale image
pub type Image = image::GrayImage;

/// Orientation passed to describers when no rotation is estimated.
pub const NEUTRAL_ORIENTATION: f64 = 0.0;

/// Number of worker threads to use when none is configured
pub fn default_thread_count() -> usize {
    num_cpus::get().max(1)
}

/// Initialize Rayon thread pool with the specified number of threads
pub fn init_thread_pool(n_threads: usize) -> Result<(), rayon::ThreadPoolBuildError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(n_threads)
        .build_global()
}
