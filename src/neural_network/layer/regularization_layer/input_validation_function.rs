use crate::error::LayerError;
use crate::neural_network::VolumeSize;

/// Validates that a rate parameter is between 0.0 and 1.0 (inclusive)
pub(super) fn validate_rate(rate: f32, param_name: &str) -> Result<(), LayerError> {
    if !(0.0..=1.0).contains(&rate) {
        return Err(LayerError::InvalidParameter(format!(
            "{} must be between 0 and 1, got {}",
            param_name, rate
        )));
    }
    Ok(())
}

/// Validates that every component of a volume size is at least 1
pub(super) fn validate_size_not_empty(size: VolumeSize) -> Result<(), LayerError> {
    if size.is_empty() {
        return Err(LayerError::InvalidParameter(format!(
            "Volume size components must be at least 1, got {}",
            size
        )));
    }
    Ok(())
}

/// Validates that a volume handed to a transform has the configured size
pub(super) fn validate_volume_size(
    actual: VolumeSize,
    expected: VolumeSize,
) -> Result<(), LayerError> {
    if actual != expected {
        return Err(LayerError::SizeMismatch {
            expected,
            got: actual,
        });
    }
    Ok(())
}
