use crate::neural_network::VolumeSize;

/// Error types that can occur while building or driving a transform
///
/// # Variants
///
/// - `InvalidParameter` - A construction parameter is outside its allowed range
/// - `SizeMismatch` - A volume handed to a transform does not have the configured size
#[derive(Debug, Clone, PartialEq)]
pub enum LayerError {
    InvalidParameter(String),
    SizeMismatch {
        expected: VolumeSize,
        got: VolumeSize,
    },
}

impl std::fmt::Display for LayerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            LayerError::SizeMismatch { expected, got } => {
                write!(f, "Size mismatch: expected {}, got {}", expected, got)
            }
        }
    }
}

/// Implements the standard error trait for LayerError
impl std::error::Error for LayerError {}
