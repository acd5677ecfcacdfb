use super::super::input_validation_function::{
    validate_rate, validate_size_not_empty, validate_volume_size,
};
use super::*;
use crate::error::LayerError;
use crate::neural_network::layer::LayerBuffers;
use crate::neural_network::{Transform, VolumeSize};
use rand::distr::StandardUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

/// Dropout transform, which randomly zeroes elements of its input volume and records
/// which elements survived so the backward pass can route gradients through the same mask.
///
/// Each element is kept with probability `p_activation`, independently of every other
/// element. Kept elements are passed through unscaled.
///
/// # Fields
///
/// - `p_activation` - Retention probability, between 0 and 1.
/// - `mask` - Elements retained by the most recent forward pass.
/// - `buffers` - Input copy, output and input gradient, all sized like the mask.
/// - `activated` - Whether a forward pass has run since construction.
/// - `rng` - Generator used by [`Transform::activate`].
///
/// # Example
/// ```rust
/// use rustycnn::prelude::*;
///
/// let size = VolumeSize::new(4, 4, 4);
/// let mut dropout = Dropout::new_with_seed(size, 0.5, 42).unwrap();
///
/// let input = Tensor::from_elem(size, 1.0);
/// dropout.activate(&input).unwrap();
///
/// let grad = Tensor::from_elem(size, 2.0);
/// dropout.calc_grads(&grad).unwrap();
///
/// for i in 0..size.len() {
///     let expected = if dropout.mask()[i] { 2.0 } else { 0.0 };
///     assert_eq!(dropout.input_gradient()[i], expected);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Dropout {
    p_activation: f32,
    mask: Mask,
    buffers: LayerBuffers,
    activated: bool,
    rng: StdRng,
}

impl Dropout {
    /// Creates a new Dropout transform whose generator is seeded from the operating system.
    ///
    /// # Parameters
    ///
    /// - `in_size` - Size of the input and output volumes
    /// - `p_activation` - Probability that an element is retained. Must be between 0 and 1.
    ///
    /// # Returns
    ///
    /// - `Ok(Dropout)` - The new transform
    /// - `Err(LayerError::InvalidParameter)` - `p_activation` is outside `[0, 1]` or `in_size` is empty
    pub fn new(in_size: VolumeSize, p_activation: f32) -> Result<Self, LayerError> {
        Self::with_rng(in_size, p_activation, StdRng::from_os_rng())
    }

    /// Creates a new Dropout transform with a seeded generator, so that two transforms
    /// built with the same seed produce the same masks.
    ///
    /// # Parameters
    ///
    /// - `in_size` - Size of the input and output volumes
    /// - `p_activation` - Probability that an element is retained. Must be between 0 and 1.
    /// - `seed` - Seed of the generator used by [`Transform::activate`]
    pub fn new_with_seed(
        in_size: VolumeSize,
        p_activation: f32,
        seed: u64,
    ) -> Result<Self, LayerError> {
        Self::with_rng(in_size, p_activation, StdRng::seed_from_u64(seed))
    }

    fn with_rng(in_size: VolumeSize, p_activation: f32, rng: StdRng) -> Result<Self, LayerError> {
        validate_rate(p_activation, "Dropout activation probability")?;
        validate_size_not_empty(in_size)?;

        if p_activation == 0.0 {
            warn!(size = %in_size, "dropout activation is 0.0, every output will be zero");
        } else if p_activation == 1.0 {
            warn!(size = %in_size, "dropout activation is 1.0, this transform has no effect");
        }

        Ok(Dropout {
            p_activation,
            mask: Mask::new(in_size),
            buffers: LayerBuffers::new(in_size, in_size),
            activated: false,
            rng,
        })
    }

    pub fn p_activation(&self) -> f32 {
        self.p_activation
    }

    /// Elements retained by the most recent forward pass. All false before the first one.
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Performs the forward pass drawing from a caller-supplied generator instead of the
    /// transform's own.
    ///
    /// One `f32` is drawn per element in linear index order, so the resulting mask only
    /// depends on the state of `rng`.
    ///
    /// # Parameters
    ///
    /// - `input` - Input volume, sized like the transform
    /// - `rng` - Random source for this pass
    ///
    /// # Returns
    ///
    /// - `Ok(())` - `output` and `mask` hold the result of this pass
    /// - `Err(LayerError::SizeMismatch)` - The input has the wrong size; nothing was modified and nothing was drawn
    pub fn activate_with_rng<R: Rng + ?Sized>(
        &mut self,
        input: &Tensor,
        rng: &mut R,
    ) -> Result<(), LayerError> {
        let size = self.buffers.in_size();
        validate_volume_size(input.size(), size)?;

        let draws = Tensor::random_using(size, &StandardUniform, rng);
        self.apply_draws(input, &draws)
    }

    fn apply_draws(&mut self, input: &Tensor, draws: &Tensor) -> Result<(), LayerError> {
        self.buffers.copy_input(input)?;
        threshold_mask(&mut self.mask, draws, self.p_activation);

        let (input, output, _) = self.buffers.split_mut();
        apply_mask(output, input, &self.mask);
        self.activated = true;

        debug!(
            size = %self.mask.size(),
            retained = self.mask.iter().filter(|&&m| m).count(),
            "dropout forward pass"
        );
        Ok(())
    }
}

impl PartialEq for Dropout {
    /// Compares probability, mask and buffers. Generator state is not compared.
    fn eq(&self, other: &Self) -> bool {
        self.p_activation == other.p_activation
            && self.mask == other.mask
            && self.buffers == other.buffers
    }
}

impl Transform for Dropout {
    layer_buffers_transform_functions!();

    fn activate(&mut self, input: &Tensor) -> Result<(), LayerError> {
        let size = self.buffers.in_size();
        validate_volume_size(input.size(), size)?;

        let draws = Tensor::random_using(size, &StandardUniform, &mut self.rng);
        self.apply_draws(input, &draws)
    }

    /// Routes `grad_next_layer` through the mask of the most recent forward pass.
    ///
    /// Called before any forward pass, the mask is all false and the resulting gradient is
    /// all zero.
    fn calc_grads(&mut self, grad_next_layer: &Tensor) -> Result<(), LayerError> {
        validate_volume_size(grad_next_layer.size(), self.buffers.out_size())?;

        if !self.activated {
            warn!("dropout gradient requested before the first forward pass, gradient will be zero");
        }

        let (_, _, input_gradient) = self.buffers.split_mut();
        apply_mask(input_gradient, grad_next_layer, &self.mask);
        Ok(())
    }

    no_trainable_parameters_transform_functions!();

    fn kind_str(&self) -> &str {
        "dropout"
    }

    fn param_str(&self) -> String {
        format!("activation={}", self.p_activation)
    }

    fn total_memory_size(&self) -> usize {
        self.mask.total_memory_size() + self.buffers.total_memory_size()
    }
}
