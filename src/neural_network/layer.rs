/// A macro that implements the buffer accessors of [`Transform`](crate::neural_network::Transform)
/// for a transform storing its buffers in a `buffers: LayerBuffers` field.
macro_rules! layer_buffers_transform_functions {
    () => {
        fn in_size(&self) -> VolumeSize {
            self.buffers.in_size()
        }

        fn out_size(&self) -> VolumeSize {
            self.buffers.out_size()
        }

        fn input(&self) -> &Tensor {
            self.buffers.input()
        }

        fn output(&self) -> &Tensor {
            self.buffers.output()
        }

        fn input_gradient(&self) -> &Tensor {
            self.buffers.input_gradient()
        }
    };
}

/// A macro that implements the weight update of [`Transform`](crate::neural_network::Transform)
/// for transforms without trainable parameters.
macro_rules! no_trainable_parameters_transform_functions {
    () => {
        fn fix_weights(&mut self) {}
    };
}

/// Input, output and gradient buffers shared by every transform kind
pub mod layer_buffers;
/// Regularization transforms
pub mod regularization_layer;
/// Tagged union of all transform kinds
pub mod transform_layer;

pub use layer_buffers::*;
pub use regularization_layer::*;
pub use transform_layer::*;
