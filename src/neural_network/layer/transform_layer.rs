use crate::error::LayerError;
use crate::neural_network::layer::Dropout;
use crate::neural_network::{Tensor, Transform, VolumeSize};
use std::fmt;

/// Forwards a [`Transform`] method to the transform held by each variant.
macro_rules! dispatch {
    ($self:expr, $layer:ident => $call:expr) => {
        match $self {
            TransformLayer::Dropout($layer) => $call,
        }
    };
}

/// A transform at one position of a pipeline, one variant per transform kind.
///
/// Pipelines hold a `Vec<TransformLayer>` and drive every position through the
/// [`Transform`] implementation, which matches exhaustively over the kinds.
///
/// # Example
/// ```rust
/// use rustycnn::prelude::*;
///
/// let size = VolumeSize::new(3, 3, 1);
/// let mut layer = TransformLayer::from(Dropout::new_with_seed(size, 1.0, 7).unwrap());
///
/// let input = Tensor::from_elem(size, 0.25);
/// layer.activate(&input).unwrap();
///
/// assert_eq!(layer.output(), &input);
/// assert_eq!(layer.to_string(), "dropout activation=1");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum TransformLayer {
    Dropout(Dropout),
}

impl From<Dropout> for TransformLayer {
    fn from(layer: Dropout) -> Self {
        TransformLayer::Dropout(layer)
    }
}

impl Transform for TransformLayer {
    fn in_size(&self) -> VolumeSize {
        dispatch!(self, layer => layer.in_size())
    }

    fn out_size(&self) -> VolumeSize {
        dispatch!(self, layer => layer.out_size())
    }

    fn input(&self) -> &Tensor {
        dispatch!(self, layer => layer.input())
    }

    fn output(&self) -> &Tensor {
        dispatch!(self, layer => layer.output())
    }

    fn input_gradient(&self) -> &Tensor {
        dispatch!(self, layer => layer.input_gradient())
    }

    fn activate(&mut self, input: &Tensor) -> Result<(), LayerError> {
        dispatch!(self, layer => layer.activate(input))
    }

    fn calc_grads(&mut self, grad_next_layer: &Tensor) -> Result<(), LayerError> {
        dispatch!(self, layer => layer.calc_grads(grad_next_layer))
    }

    fn fix_weights(&mut self) {
        dispatch!(self, layer => layer.fix_weights())
    }

    fn kind_str(&self) -> &str {
        dispatch!(self, layer => layer.kind_str())
    }

    fn param_str(&self) -> String {
        dispatch!(self, layer => layer.param_str())
    }

    fn total_memory_size(&self) -> usize {
        dispatch!(self, layer => layer.total_memory_size())
    }
}

impl fmt::Display for TransformLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind_str(), self.param_str())
    }
}
