use crate::config::FastConfig;
use crate::detector::FastDetector;
use crate::error::FastResult;

/// Fluent builder for a `FastDetector`
#[derive(Debug, Clone, Default)]
pub struct FastDetectorBuilder {
    config: FastConfig,
}

impl FastDetectorBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the FAST threshold (1-127)
    pub fn threshold(mut self, threshold: u8) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// Set the contiguous arc length (FAST-9 .. FAST-12)
    pub fn arc_length(mut self, n: u8) -> Self {
        self.config.arc_length = n;
        self
    }

    /// Set the non-maximum suppression distance
    pub fn nms_radius(mut self, radius: f32) -> Self {
        self.config.nms_radius = radius;
        self
    }

    /// Cap the number of corners per frame (0 = unlimited)
    pub fn max_features(mut self, max: usize) -> Self {
        self.config.max_features = max;
        self
    }

    /// Set the suppression radius around excluded locations
    pub fn exclude_radius(mut self, radius: f64) -> Self {
        self.config.exclude_radius = radius;
        self
    }

    pub fn preset_ultra_fast(mut self) -> Self {
        self.config = FastConfig::ultra_fast_preset();
        self
    }

    pub fn preset_precision(mut self) -> Self {
        self.config = FastConfig::precision_preset();
        self
    }

    pub fn preset_balanced(mut self) -> Self {
        self.config = FastConfig::balanced_preset();
        self
    }

    /// Build the detector, validating the configuration
    pub fn build(self) -> FastResult<FastDetector> {
        FastDetector::new(self.config)
    }

    pub fn summary(&self) -> String {
        self.config.summary()
    }

    /// Create a builder from an existing `FastConfig`
    pub fn from_config(config: FastConfig) -> Self {
        Self { config }
    }

    pub fn to_config(self) -> FastConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FastError;

    #[test]
    fn test_fluent_settings() {
        let cfg = FastDetectorBuilder::new()
            .threshold(30)
            .arc_length(12)
            .nms_radius(4.0)
            .max_features(100)
            .exclude_radius(8.0)
            .to_config();
        assert_eq!(cfg.threshold, 30);
        assert_eq!(cfg.arc_length, 12);
        assert_eq!(cfg.nms_radius, 4.0);
        assert_eq!(cfg.max_features, 100);
        assert_eq!(cfg.exclude_radius, 8.0);
    }

    #[test]
    fn test_build_validates() {
        assert!(FastDetectorBuilder::new().build().is_ok());
        assert!(matches!(
            FastDetectorBuilder::new().arc_length(3).build(),
            Err(FastError::InvalidArcLength(3))
        ));
    }

    #[test]
    fn test_presets() {
        let cfg = FastDetectorBuilder::new().preset_ultra_fast().to_config();
        assert_eq!(cfg, FastConfig::ultra_fast_preset());

        let detector = FastDetectorBuilder::from_config(FastConfig::precision_preset())
            .preset_balanced()
            .threshold(25)
            .build()
            .unwrap();
        assert_eq!(detector.config().threshold, 25);
        assert_eq!(detector.config().arc_length, 9);
    }

    #[test]
    fn test_summary() {
        let builder = FastDetectorBuilder::new().preset_precision();
        assert!(builder.summary().contains("threshold=10"));
    }
}
