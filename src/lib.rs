/// Error types returned by transforms and volumes
///
/// # Variants
///
/// - `InvalidParameter` - A construction parameter is outside its allowed range
/// - `SizeMismatch` - A volume does not have the size a transform was configured with
pub mod error;

/// Module `neural_network` provides volume-based transforms for layered numeric pipelines.
///
/// # Core Components
///
/// - **Volume**: dense 3-dimensional container (`Volume<T>`, `VolumeSize`) with the linear
///   index order `x + y * size_x + z * size_x * size_y`. `Tensor` holds activations and
///   gradients, `Mask` holds booleans.
/// - **Transform**: the trait every transform kind implements: forward activation,
///   gradient computation, weight update and introspection.
/// - **TransformLayer**: tagged union over the transform kinds, for pipelines that drive
///   heterogeneous layers without dynamic dispatch.
/// - **Dropout**: randomly zeroes elements with a recorded mask and routes gradients
///   through the same mask.
///
/// # Example
/// ```rust
/// use rustycnn::prelude::*;
///
/// let size = VolumeSize::new(10, 10, 10);
/// let mut first = Dropout::new_with_seed(size, 0.5, 42).unwrap();
/// let mut second = Dropout::new_with_seed(size, 0.5, 42).unwrap();
///
/// let input = Tensor::from_shape_fn(size, |(x, y, z)| (x + y + z) as f32 + 1.0);
/// first.activate(&input).unwrap();
/// second.activate(&input).unwrap();
///
/// // Same seed, same mask
/// assert_eq!(first, second);
/// ```
pub mod neural_network;

/// A convenience module that re-exports the most commonly used types and traits from this crate.
///
/// # Examples
/// ```rust
/// use rustycnn::prelude::*;
///
/// let layer = Dropout::new(VolumeSize::new(2, 2, 2), 0.8).unwrap();
/// assert_eq!(layer.kind_str(), "dropout");
/// ```
pub mod prelude;
