use std::path::Path;

use dda_describe::{BriefConfig, NccConfig};
use dda_fast::FastConfig;
use serde::{Deserialize, Serialize};

use crate::error::{AdapterError, AdapterResult};

/// Settings owned by the adapter itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectDescribeConfig {
    /// Footprint scale applied to every feature of every frame
    pub scale: f64,
    /// Elements pre-allocated in each output buffer
    pub initial_capacity: usize,
}

impl Default for DetectDescribeConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            initial_capacity: 100,
        }
    }
}

impl DetectDescribeConfig {
    pub fn validate(&self) -> AdapterResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(AdapterError::InvalidScale(self.scale));
        }
        Ok(())
    }
}

/// Which describer a pipeline uses, with its settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DescriberConfig {
    Brief(BriefConfig),
    Ncc(NccConfig),
}

impl Default for DescriberConfig {
    fn default() -> Self {
        DescriberConfig::Brief(BriefConfig::default())
    }
}

impl DescriberConfig {
    pub fn validate(&self) -> AdapterResult<()> {
        match self {
            DescriberConfig::Brief(cfg) => cfg.validate()?,
            DescriberConfig::Ncc(cfg) => cfg.validate()?,
        }
        Ok(())
    }
}

/// FAST detector + describer + adapter settings, as loaded by the CLI
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub fast: FastConfig,
    pub describer: DescriberConfig,
    pub adapter: DetectDescribeConfig,
}

impl PipelineConfig {
    pub fn validate(&self) -> AdapterResult<()> {
        self.fast.validate()?;
        self.describer.validate()?;
        self.adapter.validate()
    }

    /// Generate human-readable summary
    pub fn summary(&self) -> String {
        let describer = match &self.describer {
            DescriberConfig::Brief(c) => format!("BRIEF(radius={}, pairs={})", c.radius, c.num_pairs),
            DescriberConfig::Ncc(c) => format!("NCC({}x{})", c.region_width, c.region_height),
        };
        format!("{} | {} | scale={}", self.fast.summary(), describer, self.adapter.scale)
    }

    /// Load from a `.json` or `.toml` file, chosen by extension
    pub fn load<P: AsRef<Path>>(path: P) -> AdapterResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_toml(&content),
        }
    }

    pub fn to_json(&self) -> AdapterResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> AdapterResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> AdapterResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn from_toml(toml_str: &str) -> AdapterResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }
}
