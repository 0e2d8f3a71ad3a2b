//! Seams between the adapter and the components it composes.

use crate::desc::{DescriptionType, TupleDesc};
use crate::error::FeatureResult;
use crate::geometry::{PixelCoord, Point2D};

/// Detector that reports local maxima of some response function.
pub trait GeneralFeatureDetector {
    type Image;

    /// Run detection over `image`.
    ///
    /// When `exclude` is given, maxima near those locations are suppressed so
    /// already-known features are not found again.
    fn detect(&mut self, image: &Self::Image, exclude: Option<&[Point2D]>) -> FeatureResult<()>;

    /// Maxima found by the last call to [`detect`](Self::detect)
    fn maximums(&self) -> &[PixelCoord];
}

/// Describes the image region around a point.
///
/// Implementations must not keep a borrow of the image passed to
/// [`set_image`](Self::set_image); whatever they need is copied into storage
/// they own.
pub trait DescribeRegionPoint {
    type Image;
    type Desc: TupleDesc;

    /// Bind the frame that subsequent queries operate on
    fn set_image(&mut self, image: &Self::Image) -> FeatureResult<()>;

    /// Whether the whole footprint at this location lies inside the bound image
    fn is_in_bounds(&self, x: f64, y: f64, orientation: f64, scale: f64) -> bool;

    /// Compute the descriptor at a location whose footprint is in bounds
    fn process(&self, x: f64, y: f64, orientation: f64, scale: f64, description: &mut Self::Desc);

    fn create_description(&self) -> Self::Desc;

    fn description_length(&self) -> usize;

    fn description_type(&self) -> DescriptionType {
        <Self::Desc as TupleDesc>::TYPE
    }
}

/// Produces index-aligned locations and descriptors for a frame.
///
/// This is the surface an association or tracking stage is written against.
pub trait DetectDescribePoint {
    type Image;
    type Desc: TupleDesc;

    /// Detect and describe every feature of `image`.
    ///
    /// Both returned slices have the same length and `locations[i]` is where
    /// `descriptions[i]` was computed. Storage is reused between calls.
    fn detect_features(
        &mut self,
        image: &Self::Image,
    ) -> FeatureResult<(&[Point2D], &[Self::Desc])>;

    fn create_description(&self) -> Self::Desc;

    fn description_length(&self) -> usize;

    fn description_type(&self) -> DescriptionType;
}
