use dda_core::{
    DescribeRegionPoint, DescriptionType, DetectDescribePoint, FeatureResult,
    GeneralFeatureDetector, GrowQueue, Point2D, NEUTRAL_ORIENTATION,
};
use log::{debug, info};

use crate::config::DetectDescribeConfig;
use crate::error::AdapterResult;

/// Detects point features and describes each one at a fixed scale.
///
/// Candidates from the detector whose descriptor footprint would leave the
/// image are dropped; every other candidate yields one location and one
/// descriptor at the same index. Output buffers are reset and refilled on each
/// call, so their storage is reused across frames. Not reentrant: use one
/// adapter per thread.
pub struct DetectDescribeAdapter<D, R>
where
    D: GeneralFeatureDetector,
    R: DescribeRegionPoint<Image = D::Image>,
{
    detector: D,
    describer: R,
    scale: f64,
    locations: GrowQueue<Point2D>,
    descriptions: GrowQueue<R::Desc>,
}

impl<D, R> DetectDescribeAdapter<D, R>
where
    D: GeneralFeatureDetector,
    R: DescribeRegionPoint<Image = D::Image>,
{
    pub fn new(detector: D, describer: R, config: DetectDescribeConfig) -> AdapterResult<Self> {
        config.validate()?;

        let template = describer.create_description();
        let descriptions = GrowQueue::with_capacity(config.initial_capacity, move || template.clone());
        let locations = GrowQueue::with_capacity(config.initial_capacity, Point2D::default);

        info!(
            "Detect/describe adapter: scale={}, {} x {} descriptor",
            config.scale,
            describer.description_length(),
            describer.description_type()
        );

        Ok(Self {
            detector,
            describer,
            scale: config.scale,
            locations,
            descriptions,
        })
    }

    /// Same as [`detect_features`](DetectDescribePoint::detect_features) but
    /// asks the detector to skip maxima near `known`, e.g. the locations a
    /// tracker is already following.
    pub fn detect_features_excluding(
        &mut self,
        image: &D::Image,
        known: &[Point2D],
    ) -> FeatureResult<(&[Point2D], &[R::Desc])> {
        self.detect_and_describe(image, Some(known))?;
        Ok((self.locations.as_slice(), self.descriptions.as_slice()))
    }

    fn detect_and_describe(&mut self, image: &D::Image, exclude: Option<&[Point2D]>) -> FeatureResult<()> {
        self.detector.detect(image, exclude)?;
        self.describer.set_image(image)?;

        self.locations.reset();
        self.descriptions.reset();

        let found = self.detector.maximums();
        for p in found {
            let (x, y) = (f64::from(p.x), f64::from(p.y));
            if !self.describer.is_in_bounds(x, y, NEUTRAL_ORIENTATION, self.scale) {
                continue;
            }

            let loc = self.locations.grow();
            loc.set(x, y);
            let desc = self.descriptions.grow();
            self.describer.process(loc.x, loc.y, NEUTRAL_ORIENTATION, self.scale, desc);
        }

        debug!(
            "{} candidates, {} described, {} outside footprint",
            found.len(),
            self.locations.len(),
            found.len() - self.locations.len()
        );
        Ok(())
    }

    /// Locations from the last call
    pub fn locations(&self) -> &[Point2D] {
        self.locations.as_slice()
    }

    /// Descriptors from the last call, aligned with [`locations`](Self::locations)
    pub fn descriptions(&self) -> &[R::Desc] {
        self.descriptions.as_slice()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<(&Point2D, &R::Desc)> {
        Some((self.locations.get(index)?, self.descriptions.get(index)?))
    }

    /// Aligned `(location, descriptor)` pairs from the last call
    pub fn features(&self) -> impl Iterator<Item = (&Point2D, &R::Desc)> + '_ {
        self.locations.iter().zip(self.descriptions.iter())
    }

    /// Elements currently allocated per output buffer
    pub fn buffer_capacity(&self) -> usize {
        self.locations.allocated()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    pub fn describer(&self) -> &R {
        &self.describer
    }
}

impl<D, R> DetectDescribePoint for DetectDescribeAdapter<D, R>
where
    D: GeneralFeatureDetector,
    R: DescribeRegionPoint<Image = D::Image>,
{
    type Image = D::Image;
    type Desc = R::Desc;

    fn detect_features(&mut self, image: &D::Image) -> FeatureResult<(&[Point2D], &[R::Desc])> {
        self.detect_and_describe(image, None)?;
        Ok((self.locations.as_slice(), self.descriptions.as_slice()))
    }

    fn create_description(&self) -> R::Desc {
        self.describer.create_description()
    }

    fn description_length(&self) -> usize {
        self.describer.description_length()
    }

    fn description_type(&self) -> DescriptionType {
        self.describer.description_type()
    }
}
