use crate::neural_network::{Mask, Tensor};
use ndarray::Zip;

/// Threshold for using parallel computation in dropout layers.
/// When the total number of elements >= this threshold, parallel computation is used.
pub const DROPOUT_PARALLEL_THRESHOLD: usize = 10000;

/// Decides whether an element survives the forward pass.
///
/// An element is retained when its draw `u` in `[0, 1)` satisfies `u <= p_activation`.
/// A probability of exactly 0 never retains, even for a draw of exactly 0.
///
/// # Parameters
///
/// - `draw` - Uniform draw in `[0, 1)` for this element
/// - `p_activation` - Retention probability in `[0, 1]`
pub(crate) fn is_retained(draw: f32, p_activation: f32) -> bool {
    p_activation > 0.0 && draw <= p_activation
}

/// Overwrites `mask` with the retention decision for each draw.
///
/// `draws` and `mask` must have the same size.
fn threshold_mask(mask: &mut Mask, draws: &Tensor, p_activation: f32) {
    let zip = Zip::from(mask.data_mut()).and(draws.data());

    if draws.len() >= DROPOUT_PARALLEL_THRESHOLD {
        zip.par_for_each(|m, &u| *m = is_retained(u, p_activation));
    } else {
        zip.for_each(|m, &u| *m = is_retained(u, p_activation));
    }
}

/// Common masking step of the forward and backward passes.
///
/// Writes `source[i]` into `target[i]` where `mask[i]` is set and `0.0` elsewhere.
/// All three volumes must have the same size.
fn apply_mask(target: &mut Tensor, source: &Tensor, mask: &Mask) {
    let zip = Zip::from(target.data_mut())
        .and(source.data())
        .and(mask.data());

    if mask.len() >= DROPOUT_PARALLEL_THRESHOLD {
        zip.par_for_each(|t, &s, &m| *t = if m { s } else { 0.0 });
    } else {
        zip.for_each(|t, &s, &m| *t = if m { s } else { 0.0 });
    }
}

/// Element-wise dropout over a volume
pub mod dropout;

pub use dropout::*;
