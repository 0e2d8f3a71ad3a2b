use dda_core::error::ensure_min_size;
use dda_core::{FeatureResult, GeneralFeatureDetector, Image, PixelCoord, Point2D};
use log::{debug, trace};

use crate::config::FastConfig;
use crate::corner_detection::CornerDetector;
use crate::error::FastResult;
use crate::suppression::CornerSuppression;
use crate::types::ScoredCorner;

/// FAST requires at least 7x7 image (3-pixel border on each side)
pub const MIN_IMAGE_SIZE: u32 = 2 * CornerDetector::BORDER + 1;

/// FAST corner detector with non-maximum suppression.
///
/// Results of the last [`detect`](GeneralFeatureDetector::detect) are kept in
/// a buffer that is cleared, not reallocated, on every call.
#[derive(Debug, Clone)]
pub struct FastDetector {
    cfg: FastConfig,
    found: Vec<PixelCoord>,
}

impl FastDetector {
    /// Creates a new FAST detector with validation
    pub fn new(cfg: FastConfig) -> FastResult<Self> {
        cfg.validate()?;
        debug!("FAST detector ready: {}", cfg.summary());
        Ok(Self {
            cfg,
            found: Vec::new(),
        })
    }

    /// Detect corners with their response scores, strongest first
    pub fn detect_with_response(
        &self,
        img: &Image,
        exclude: Option<&[Point2D]>,
    ) -> FeatureResult<Vec<ScoredCorner>> {
        let (width, height) = img.dimensions();
        ensure_min_size(width, height, MIN_IMAGE_SIZE)?;

        let mut raw = CornerDetector::detect(img, self.cfg.threshold, self.cfg.arc_length);
        let raw_count = raw.len();

        if let Some(known) = exclude {
            CornerSuppression::exclude_known(&mut raw, known, self.cfg.exclude_radius);
        }

        let mut corners = CornerSuppression::non_maximum_suppression(&raw, self.cfg.nms_radius);
        if self.cfg.max_features > 0 {
            corners.truncate(self.cfg.max_features);
        }

        trace!(
            "FAST {}x{}: {} raw, {} after exclusion, {} kept",
            width,
            height,
            raw_count,
            raw.len(),
            corners.len()
        );
        Ok(corners)
    }

    /// Get detector configuration
    pub fn config(&self) -> &FastConfig {
        &self.cfg
    }
}

impl GeneralFeatureDetector for FastDetector {
    type Image = Image;

    fn detect(&mut self, image: &Image, exclude: Option<&[Point2D]>) -> FeatureResult<()> {
        self.found.clear();
        let corners = self.detect_with_response(image, exclude)?;
        self.found.extend(corners.iter().map(|c| c.coord));
        Ok(())
    }

    fn maximums(&self) -> &[PixelCoord] {
        &self.found
    }
}
