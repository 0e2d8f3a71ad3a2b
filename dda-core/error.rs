use thiserror::Error;

/// Failures raised while a detector or describer processes a frame.
///
/// Configuration problems are reported by each component's own error type when
/// it is built; this type only covers per-call image problems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    #[error("Image has zero area ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    #[error("Image {width}x{height} too small (minimum {min_size}x{min_size})")]
    ImageTooSmall { width: u32, height: u32, min_size: u32 },
}

pub type FeatureResult<T> = Result<T, FeatureError>;

/// Rejects images with no pixels.
pub fn ensure_non_empty(width: u32, height: u32) -> FeatureResult<()> {
    if width == 0 || height == 0 {
        return Err(FeatureError::EmptyImage { width, height });
    }
    Ok(())
}

/// Rejects images smaller than `min_size` along either axis.
pub fn ensure_min_size(width: u32, height: u32, min_size: u32) -> FeatureResult<()> {
    if width < min_size || height < min_size {
        return Err(FeatureError::ImageTooSmall { width, height, min_size });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_image_rejected() {
        assert_eq!(
            ensure_non_empty(0, 10),
            Err(FeatureError::EmptyImage { width: 0, height: 10 })
        );
        assert!(ensure_non_empty(1, 1).is_ok());
    }

    #[test]
    fn test_min_size() {
        assert!(matches!(
            ensure_min_size(6, 20, 7),
            Err(FeatureError::ImageTooSmall { min_size: 7, .. })
        ));
        assert!(ensure_min_size(7, 7, 7).is_ok());
    }

    #[test]
    fn test_display() {
        let err = FeatureError::ImageTooSmall { width: 3, height: 4, min_size: 7 };
        assert_eq!(err.to_string(), "Image 3x4 too small (minimum 7x7)");
    }
}
