use crate::error::{FastError, FastResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete FAST detector configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FastConfig {
    /// Intensity difference a circle pixel needs to count as brighter/darker
    pub threshold: u8,
    /// Contiguous circle pixels required (FAST-9 .. FAST-12)
    pub arc_length: u8,
    /// Minimum distance between two reported corners; 0 disables NMS
    pub nms_radius: f32,
    /// Keep at most this many corners, strongest first; 0 keeps all
    pub max_features: usize,
    /// Radius around excluded locations where corners are dropped
    pub exclude_radius: f64,
    /// Metadata
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
}

impl Default for FastConfig {
    fn default() -> Self {
        Self::balanced_preset()
    }
}

impl FastConfig {
    /// Balanced preset, FAST-9 with light suppression
    pub fn balanced_preset() -> Self {
        Self {
            threshold: 20,
            arc_length: 9,
            nms_radius: 3.0,
            max_features: 0,
            exclude_radius: 5.0,
            name: None,
            description: None,
        }
    }

    /// Fewer, stronger corners for tight per-frame budgets
    pub fn ultra_fast_preset() -> Self {
        Self {
            threshold: 35,
            arc_length: 12,
            nms_radius: 5.0,
            max_features: 500,
            exclude_radius: 5.0,
            name: Some("Ultra Fast".to_string()),
            description: Some("Strict FAST-12 with a feature cap".to_string()),
        }
    }

    /// Low threshold, dense corners
    pub fn precision_preset() -> Self {
        Self {
            threshold: 10,
            arc_length: 9,
            nms_radius: 2.0,
            max_features: 0,
            exclude_radius: 3.0,
            name: Some("Precision".to_string()),
            description: Some("Dense FAST-9 for textured scenes".to_string()),
        }
    }

    /// Add metadata to configuration
    pub fn with_metadata(mut self, name: &str, description: &str) -> Self {
        self.name = Some(name.to_string());
        self.description = Some(description.to_string());
        self
    }

    /// Generate human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "FastConfig: threshold={}, FAST-{}, nms={:.1}, max_features={}, exclude_radius={:.1}",
            self.threshold, self.arc_length, self.nms_radius, self.max_features, self.exclude_radius
        )
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> FastResult<()> {
        // 0 would mark every pixel, >127 saturates u8 arithmetic
        if self.threshold == 0 || self.threshold > 127 {
            return Err(FastError::InvalidThreshold(self.threshold));
        }
        if !(9..=12).contains(&self.arc_length) {
            return Err(FastError::InvalidArcLength(self.arc_length));
        }
        if !self.nms_radius.is_finite() || self.nms_radius < 0.0 {
            return Err(FastError::InvalidNmsRadius(self.nms_radius));
        }
        if !self.exclude_radius.is_finite() || self.exclude_radius < 0.0 {
            return Err(FastError::InvalidExcludeRadius(self.exclude_radius));
        }
        Ok(())
    }

    /// Save configuration to JSON file
    #[cfg(feature = "serde")]
    pub fn save_json<P: AsRef<std::path::Path>>(&self, path: P) -> FastResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Load configuration from JSON file
    #[cfg(feature = "serde")]
    pub fn load_json<P: AsRef<std::path::Path>>(path: P) -> FastResult<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Save configuration to TOML file
    #[cfg(feature = "serde")]
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> FastResult<()> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Load configuration from TOML file
    #[cfg(feature = "serde")]
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> FastResult<Self> {
        Self::from_toml(&std::fs::read_to_string(path)?)
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> FastResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> FastResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "serde")]
    pub fn to_toml(&self) -> FastResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    #[cfg(feature = "serde")]
    pub fn from_toml(toml_str: &str) -> FastResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for cfg in [
            FastConfig::default(),
            FastConfig::ultra_fast_preset(),
            FastConfig::precision_preset(),
        ] {
            assert!(cfg.validate().is_ok(), "{}", cfg.summary());
        }
    }

    #[test]
    fn test_invalid_threshold() {
        let mut cfg = FastConfig::default();
        cfg.threshold = 0;
        assert!(matches!(cfg.validate(), Err(FastError::InvalidThreshold(0))));
        cfg.threshold = 200;
        assert!(matches!(cfg.validate(), Err(FastError::InvalidThreshold(200))));
    }

    #[test]
    fn test_invalid_arc_length() {
        let mut cfg = FastConfig::default();
        cfg.arc_length = 8;
        assert!(matches!(cfg.validate(), Err(FastError::InvalidArcLength(8))));
        cfg.arc_length = 13;
        assert!(matches!(cfg.validate(), Err(FastError::InvalidArcLength(13))));
    }

    #[test]
    fn test_invalid_radii() {
        let mut cfg = FastConfig::default();
        cfg.nms_radius = -1.0;
        assert!(matches!(cfg.validate(), Err(FastError::InvalidNmsRadius(_))));

        let mut cfg = FastConfig::default();
        cfg.exclude_radius = f64::NAN;
        assert!(matches!(cfg.validate(), Err(FastError::InvalidExcludeRadius(_))));
    }

    #[test]
    fn test_metadata_and_summary() {
        let cfg = FastConfig::default().with_metadata("Lab", "Indoor sequences");
        assert_eq!(cfg.name.as_deref(), Some("Lab"));
        assert!(cfg.summary().contains("FAST-9"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_and_toml_round_trip() {
        let cfg = FastConfig::precision_preset();
        assert_eq!(FastConfig::from_json(&cfg.to_json().unwrap()).unwrap(), cfg);
        assert_eq!(FastConfig::from_toml(&cfg.to_toml().unwrap()).unwrap(), cfg);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_toml_uses_defaults() {
        let cfg = FastConfig::from_toml("threshold = 40\n").unwrap();
        assert_eq!(cfg.threshold, 40);
        assert_eq!(cfg.arc_length, 9);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_invalid_config_rejected_on_load() {
        assert!(matches!(
            FastConfig::from_toml("threshold = 0\n"),
            Err(FastError::InvalidThreshold(0))
        ));
    }
}
