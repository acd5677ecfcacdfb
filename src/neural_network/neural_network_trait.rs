use crate::error::LayerError;
use crate::neural_network::{Tensor, VolumeSize};

/// Defines the interface every transform kind in a pipeline must implement.
///
/// A transform owns its `input`, `output` and `input_gradient` buffers. The pipeline calls
/// [`Transform::activate`] once per batch element, then [`Transform::calc_grads`] with the
/// gradient of the next stage, then [`Transform::fix_weights`], and reads the results back
/// through the buffer accessors.
pub trait Transform {
    /// Size of the volumes accepted by [`Transform::activate`]
    fn in_size(&self) -> VolumeSize;

    /// Size of the volume produced in [`Transform::output`]
    fn out_size(&self) -> VolumeSize;

    /// Copy of the most recent forward input
    fn input(&self) -> &Tensor;

    /// Result of the most recent forward pass
    fn output(&self) -> &Tensor;

    /// Result of the most recent backward pass, to be handed to the previous stage
    fn input_gradient(&self) -> &Tensor;

    /// Performs forward propagation through the transform.
    ///
    /// # Parameters
    ///
    /// * `input` - The input volume, sized [`Transform::in_size`]
    ///
    /// # Returns
    ///
    /// - `Ok(())` - [`Transform::output`] now holds the result
    /// - `Err(LayerError)` - The input was rejected before any buffer was modified
    fn activate(&mut self, input: &Tensor) -> Result<(), LayerError>;

    /// Performs backward propagation through the transform.
    ///
    /// # Parameters
    ///
    /// * `grad_next_layer` - The gradient volume from the next stage, sized [`Transform::out_size`]
    ///
    /// # Returns
    ///
    /// - `Ok(())` - [`Transform::input_gradient`] now holds the result
    /// - `Err(LayerError)` - The gradient was rejected before any buffer was modified
    fn calc_grads(&mut self, grad_next_layer: &Tensor) -> Result<(), LayerError>;

    /// Applies the gradients computed by [`Transform::calc_grads`] to the trainable parameters.
    fn fix_weights(&mut self);

    /// Returns the kind label of the transform (e.g. "dropout").
    fn kind_str(&self) -> &str;

    /// Returns the parameters of the transform rendered as text.
    fn param_str(&self) -> String;

    /// Returns the memory footprint of the transform in bytes.
    fn total_memory_size(&self) -> usize;
}
