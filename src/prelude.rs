pub use crate::error::LayerError;
pub use crate::neural_network::layer::regularization_layer::*;
pub use crate::neural_network::layer::{LayerBuffers, TransformLayer};
pub use crate::neural_network::{Mask, Tensor, Transform, Volume, VolumeSize};
