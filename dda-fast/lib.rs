//! FAST corner detection behind the `GeneralFeatureDetector` trait.

pub mod builder;
pub mod config;
pub mod corner_detection;
pub mod detector;
pub mod error;
pub mod suppression;
pub mod types;
pub mod utils;

pub use builder::FastDetectorBuilder;
pub use config::FastConfig;
pub use detector::{FastDetector, MIN_IMAGE_SIZE};
pub use error::{FastError, FastResult};
pub use types::ScoredCorner;
