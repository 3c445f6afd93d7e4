//! Fixed-dimension vectors
//!
//! `Vector<D>` is the linear-algebra primitive used for positions, velocities
//! and accelerations. Every operation returns a new vector: the step
//! algorithm computes all accelerations from one unmodified snapshot of
//! positions, so nothing here mutates its receiver.
//!
//! The dimension is a const generic restricted to 2, 3 and 4 through the
//! sealed [`Dimension`] marker. Combining vectors of different dimension
//! does not compile, and component accessors only exist on the dimensions
//! that have them.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use nalgebra::SVector;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::VectorError;

mod sealed {
    pub trait Sealed {}
}

/// Type-level dimension tag
pub struct Dim<const D: usize>;

/// Marker for the dimensions a simulation may run in
///
/// Implemented for `Dim<2>`, `Dim<3>` and `Dim<4>` only.
pub trait Dimension: sealed::Sealed {}

impl sealed::Sealed for Dim<2> {}
impl sealed::Sealed for Dim<3> {}
impl sealed::Sealed for Dim<4> {}
impl Dimension for Dim<2> {}
impl Dimension for Dim<3> {}
impl Dimension for Dim<4> {}

/// An ordered tuple of `D` real components
///
/// # Examples
///
/// ```
/// use gravitas::vector::Vector;
///
/// let a = Vector::new([0.0, 0.0]);
/// let b = Vector::new([3.0, 4.0]);
///
/// assert_eq!(a.distance_to(&b), 5.0);
/// assert_eq!(a.vector_to(&b), b);
/// assert_eq!(b.scale(2.0).x(), 6.0);
/// ```
///
/// Deserialization is only available for the supported dimensions:
///
/// ```compile_fail
/// use gravitas::vector::Vector;
///
/// let v: Vector<5> = serde_json::from_str("[1.0, 2.0, 3.0, 4.0, 5.0]").unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Vector<const D: usize>(SVector<f64, D>);

impl<const D: usize> Vector<D>
where
    Dim<D>: Dimension,
{
    /// The vector with every component 0
    pub fn zero() -> Self {
        Self(SVector::zeros())
    }

    /// Creates a vector from its components
    pub fn new(components: [f64; D]) -> Self {
        Self(SVector::from(components))
    }
}

impl<const D: usize> Vector<D> {
    /// Number of components
    pub const DIMENSION: usize = D;

    /// Copies the components out into an array
    pub fn components(&self) -> [f64; D] {
        std::array::from_fn(|i| self.0[i])
    }

    /// Components as a slice of length `D`
    pub fn as_slice(&self) -> &[f64] {
        self.0.as_slice()
    }

    /// Iterates over the components in order
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    /// Component at `index`, checked at runtime
    ///
    /// Prefer the named accessors (`x()`, `y()`, ...) when the index is known
    /// statically.
    pub fn component(&self, index: usize) -> Result<f64, VectorError> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or(VectorError::InsufficientDimension {
                index,
                dimension: D,
            })
    }

    /// Multiplies every component by `factor`
    pub fn scale(&self, factor: f64) -> Self {
        Self(self.0 * factor)
    }

    /// Displacement from this point to `other`, i.e. `other - self`
    pub fn vector_to(&self, other: &Self) -> Self {
        Self(other.0 - self.0)
    }

    /// Euclidean distance between two points
    pub fn distance_to(&self, other: &Self) -> f64 {
        (other.0 - self.0).norm()
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> f64 {
        self.0.dot(&other.0)
    }

    /// Euclidean norm
    pub fn magnitude(&self) -> f64 {
        self.0.norm()
    }

    /// Squared Euclidean norm, without the square root
    pub fn magnitude_squared(&self) -> f64 {
        self.0.norm_squared()
    }

    /// Unit vector in the same direction
    ///
    /// Unchecked: a zero vector produces non-finite components. Callers must
    /// guarantee a non-zero magnitude, or use [`Vector::try_normalise`].
    pub fn normalise(&self) -> Self {
        self.scale(1.0 / self.magnitude())
    }

    /// Unit vector in the same direction, or `ZeroMagnitude` for a zero vector
    pub fn try_normalise(&self) -> Result<Self, VectorError> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(VectorError::ZeroMagnitude);
        }
        Ok(self.scale(1.0 / magnitude))
    }

    /// True when no component is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }
}

macro_rules! component_accessors {
    ($dim:literal => $($name:ident: $index:literal),+) => {
        impl Vector<$dim> {
            $(
                #[doc = concat!("The `", stringify!($name), "` component")]
                pub fn $name(&self) -> f64 {
                    self.0[$index]
                }
            )+
        }
    };
}

component_accessors!(2 => x: 0, y: 1);
component_accessors!(3 => x: 0, y: 1, z: 2);
component_accessors!(4 => x: 0, y: 1, z: 2, w: 3);

impl<const D: usize> Default for Vector<D>
where
    Dim<D>: Dimension,
{
    fn default() -> Self {
        Self::zero()
    }
}

impl<const D: usize> From<[f64; D]> for Vector<D>
where
    Dim<D>: Dimension,
{
    fn from(components: [f64; D]) -> Self {
        Self::new(components)
    }
}

impl<const D: usize> TryFrom<&[f64]> for Vector<D>
where
    Dim<D>: Dimension,
{
    type Error = VectorError;

    /// Builds a vector from a runtime-length slice
    ///
    /// The slice must hold exactly `D` components; it is never truncated or
    /// padded.
    fn try_from(components: &[f64]) -> Result<Self, Self::Error> {
        if components.len() != D {
            return Err(VectorError::DimensionMismatch {
                expected: D,
                found: components.len(),
            });
        }
        Ok(Self(SVector::from_column_slice(components)))
    }
}

impl<'de, const D: usize> Deserialize<'de> for Vector<D>
where
    Dim<D>: Dimension,
{
    /// Reads a sequence of exactly `D` numbers
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let components = Vec::<f64>::deserialize(deserializer)?;
        Self::try_from(components.as_slice()).map_err(serde::de::Error::custom)
    }
}

impl<const D: usize> Add for Vector<D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<const D: usize> AddAssign for Vector<D> {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<const D: usize> Sub for Vector<D> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl<const D: usize> Mul<f64> for Vector<D> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl<const D: usize> Neg for Vector<D> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl<const D: usize> fmt::Display for Vector<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}
