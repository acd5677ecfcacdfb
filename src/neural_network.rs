/// Module that contains the transform layer implementations
pub mod layer;
/// Module that contains the interface shared by all transform kinds
pub mod neural_network_trait;
/// Module that contains the 3-dimensional volume container
pub mod volume;

pub use layer::*;
pub use neural_network_trait::*;
pub use volume::*;

/// Type alias for volumes of activations and gradients
pub type Tensor = Volume<f32>;

/// Type alias for volumes recording which elements a dropout transform retained
pub type Mask = Volume<bool>;
