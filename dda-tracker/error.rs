use dda_describe::DescribeError;
use dda_fast::FastError;
use thiserror::Error;

/// Errors raised while wiring a detector and describer together.
///
/// Per-frame failures are not represented here; they surface as the
/// collaborators' own `FeatureError`.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Invalid scale: {0} (must be finite and > 0)")]
    InvalidScale(f64),
    #[error("FAST error: {0}")]
    Fast(#[from] FastError),
    #[error("Describer error: {0}")]
    Describe(#[from] DescribeError),
    #[error("Config I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid TOML config: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("Could not serialize TOML config: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type AdapterResult<T> = Result<T, AdapterError>;
