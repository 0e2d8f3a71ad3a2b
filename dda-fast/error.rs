use thiserror::Error;

/// Configuration errors raised when a FAST detector is built
#[derive(Debug, Error)]
pub enum FastError {
    #[error("Invalid threshold: {0} (must be 1-127)")]
    InvalidThreshold(u8),
    #[error("Invalid arc length: {0} (must be 9-12)")]
    InvalidArcLength(u8),
    #[error("Invalid NMS radius: {0} (must be finite and >= 0)")]
    InvalidNmsRadius(f32),
    #[error("Invalid exclusion radius: {0} (must be finite and >= 0)")]
    InvalidExcludeRadius(f64),
    #[cfg(feature = "serde")]
    #[error("Config I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "serde")]
    #[error("Invalid TOML config: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[cfg(feature = "serde")]
    #[error("Could not serialize TOML config: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type FastResult<T> = Result<T, FastError>;
