use crate::error::LayerError;
use ndarray::Array3;
use ndarray::iter::Iter;
use ndarray::Ix3;
use rand::Rng;
use rand_distr::Distribution;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Size triple `(x, y, z)` of a volume.
///
/// Elements are enumerated in the linear order `x + y * size_x + z * size_x * size_y`,
/// so `x` varies fastest and `z` slowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VolumeSize {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl VolumeSize {
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        VolumeSize { x, y, z }
    }

    /// Total number of elements, `x * y * z`
    pub const fn len(&self) -> usize {
        self.x * self.y * self.z
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts coordinates into a linear index.
    ///
    /// # Parameters
    ///
    /// - `x` - Position along the fastest varying axis
    /// - `y` - Position along the middle axis
    /// - `z` - Position along the slowest varying axis
    ///
    /// # Returns
    ///
    /// * `usize` - `x + y * self.x + z * self.x * self.y`
    pub const fn linear_index(&self, x: usize, y: usize, z: usize) -> usize {
        x + y * self.x + z * self.x * self.y
    }

    /// Inverse of [`VolumeSize::linear_index`]. The size must not be empty.
    pub fn coords(&self, index: usize) -> (usize, usize, usize) {
        let plane = self.x * self.y;
        (index % self.x, (index / self.x) % self.y, index / plane)
    }

    /// ndarray shape with the slowest axis first, which makes the standard
    /// layout match the linear index order
    fn shape(&self) -> (usize, usize, usize) {
        (self.z, self.y, self.x)
    }
}

impl fmt::Display for VolumeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Dense 3-dimensional array of `T` used for activations, gradients and masks.
///
/// The backing store always holds exactly `size.len()` elements. Iteration,
/// `as_slice` and linear indexing all follow the linear index order of
/// [`VolumeSize`].
///
/// # Example
/// ```rust
/// use rustycnn::prelude::*;
///
/// let size = VolumeSize::new(2, 3, 4);
/// let volume = Tensor::from_shape_fn(size, |(x, y, z)| (x + 10 * y + 100 * z) as f32);
///
/// assert_eq!(volume[(1, 2, 3)], 321.0);
/// assert_eq!(volume[size.linear_index(1, 2, 3)], 321.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Volume<T> {
    size: VolumeSize,
    data: Array3<T>,
}

impl<T: Clone + Default> Volume<T> {
    /// Creates a volume filled with `T::default()` (`0.0` for floats, `false` for masks)
    pub fn new(size: VolumeSize) -> Self {
        Self::from_elem(size, T::default())
    }
}

impl<T: Clone> Volume<T> {
    /// Creates a volume with every element set to `elem`
    pub fn from_elem(size: VolumeSize, elem: T) -> Self {
        Volume {
            size,
            data: Array3::from_elem(size.shape(), elem),
        }
    }

    /// Fills every element with `value`
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Copies `other` into this volume element by element.
    ///
    /// # Parameters
    ///
    /// * `other` - Source volume, must have the same size
    ///
    /// # Returns
    ///
    /// - `Ok(())` - The contents were copied
    /// - `Err(LayerError::SizeMismatch)` - The sizes differ; nothing was written
    pub fn assign(&mut self, other: &Volume<T>) -> Result<(), LayerError> {
        if other.size != self.size {
            return Err(LayerError::SizeMismatch {
                expected: self.size,
                got: other.size,
            });
        }
        self.data.assign(&other.data);
        Ok(())
    }
}

impl<T> Volume<T> {
    /// Creates a volume from a function of the `(x, y, z)` coordinates
    pub fn from_shape_fn<F>(size: VolumeSize, mut f: F) -> Self
    where
        F: FnMut((usize, usize, usize)) -> T,
    {
        Volume {
            size,
            data: Array3::from_shape_fn(size.shape(), |(z, y, x)| f((x, y, z))),
        }
    }

    /// Creates a volume from values given in linear index order.
    ///
    /// # Parameters
    ///
    /// - `size` - Size of the volume
    /// - `values` - Exactly `size.len()` values
    ///
    /// # Returns
    ///
    /// - `Ok(Volume<T>)` - The new volume
    /// - `Err(LayerError::InvalidParameter)` - The number of values does not match the size
    pub fn from_vec(size: VolumeSize, values: Vec<T>) -> Result<Self, LayerError> {
        let count = values.len();
        Array3::from_shape_vec(size.shape(), values)
            .map(|data| Volume { size, data })
            .map_err(|e| {
                LayerError::InvalidParameter(format!(
                    "cannot build a volume of size {} from {} values: {}",
                    size, count, e
                ))
            })
    }

    /// Creates a volume by sampling `distribution` once per element, in linear index order
    pub fn random_using<D, R>(size: VolumeSize, distribution: &D, rng: &mut R) -> Self
    where
        D: Distribution<T>,
        R: Rng + ?Sized,
    {
        Volume {
            size,
            data: Array3::from_shape_simple_fn(size.shape(), || distribution.sample(rng)),
        }
    }

    pub fn size(&self) -> VolumeSize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the element at `(x, y, z)`, or `None` when out of range
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<&T> {
        self.data.get((z, y, x))
    }

    /// Iterates over the elements in linear index order
    pub fn iter(&self) -> Iter<'_, T, Ix3> {
        self.data.iter()
    }

    /// Backing store as a slice in linear index order
    pub fn as_slice(&self) -> Option<&[T]> {
        self.data.as_slice()
    }

    /// Underlying array, with axes ordered `(z, y, x)`
    pub fn data(&self) -> &Array3<T> {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut Array3<T> {
        &mut self.data
    }

    /// Memory footprint of the volume in bytes: the struct itself plus its elements
    pub fn total_memory_size(&self) -> usize {
        std::mem::size_of::<Self>() + self.data.len() * std::mem::size_of::<T>()
    }
}

impl<T> Index<(usize, usize, usize)> for Volume<T> {
    type Output = T;

    fn index(&self, (x, y, z): (usize, usize, usize)) -> &T {
        &self.data[[z, y, x]]
    }
}

impl<T> IndexMut<(usize, usize, usize)> for Volume<T> {
    fn index_mut(&mut self, (x, y, z): (usize, usize, usize)) -> &mut T {
        &mut self.data[[z, y, x]]
    }
}

impl<T> Index<usize> for Volume<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let (x, y, z) = self.size.coords(index);
        &self.data[[z, y, x]]
    }
}

impl<T> IndexMut<usize> for Volume<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let (x, y, z) = self.size.coords(index);
        &mut self.data[[z, y, x]]
    }
}
