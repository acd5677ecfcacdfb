use crate::error::LayerError;
use crate::neural_network::{Tensor, VolumeSize};

/// Buffers owned by every transform: a copy of the last input, the last output and the
/// gradient with respect to the input.
///
/// `input` and `input_gradient` are sized `in_size`, `output` is sized `out_size`.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerBuffers {
    in_size: VolumeSize,
    out_size: VolumeSize,
    input: Tensor,
    output: Tensor,
    input_gradient: Tensor,
}

impl LayerBuffers {
    /// Allocates zero-filled buffers for the given sizes
    pub fn new(in_size: VolumeSize, out_size: VolumeSize) -> Self {
        LayerBuffers {
            in_size,
            out_size,
            input: Tensor::new(in_size),
            output: Tensor::new(out_size),
            input_gradient: Tensor::new(in_size),
        }
    }

    pub fn in_size(&self) -> VolumeSize {
        self.in_size
    }

    pub fn out_size(&self) -> VolumeSize {
        self.out_size
    }

    pub fn input(&self) -> &Tensor {
        &self.input
    }

    pub fn output(&self) -> &Tensor {
        &self.output
    }

    pub fn input_gradient(&self) -> &Tensor {
        &self.input_gradient
    }

    /// Copies `input` into the input buffer, rejecting a volume of the wrong size
    /// without touching the buffer.
    pub fn copy_input(&mut self, input: &Tensor) -> Result<(), LayerError> {
        self.input.assign(input)
    }

    /// Mutable views of `(input, output, input_gradient)` for the transform's own kernels
    pub(crate) fn split_mut(&mut self) -> (&mut Tensor, &mut Tensor, &mut Tensor) {
        (&mut self.input, &mut self.output, &mut self.input_gradient)
    }

    /// Combined memory footprint of the three buffers in bytes
    pub fn total_memory_size(&self) -> usize {
        self.input.total_memory_size()
            + self.output.total_memory_size()
            + self.input_gradient.total_memory_size()
    }
}
