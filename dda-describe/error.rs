use thiserror::Error;

/// Configuration errors raised when a describer is built
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DescribeError {
    #[error("Invalid sampling radius: {0} (must be in 1..=1024)")]
    InvalidRadius(u32),
    #[error("Invalid number of sample pairs: {0} (must be > 0)")]
    InvalidPairCount(usize),
    #[error("Invalid blur sigma: {0} (must be finite and >= 0)")]
    InvalidBlurSigma(f32),
    #[error("Invalid region {width}x{height} (sides must be odd and at most 1023)")]
    InvalidRegion { width: u32, height: u32 },
}

pub type DescribeResult<T> = Result<T, DescribeError>;
