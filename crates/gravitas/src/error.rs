//! Error types
//!
//! Most dimension errors are ruled out by the type system: vectors of
//! different dimension cannot be combined, and component accessors only
//! exist where the dimension has that component. The variants below cover
//! the entry points where a dimension or magnitude is only known at runtime.

use thiserror::Error;

/// Failures from runtime-checked vector operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectorError {
    /// A slice of components did not match the vector's dimension
    #[error("dimension mismatch: expected {expected} components, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A component index past the end of the vector was requested
    #[error("component {index} does not exist in a {dimension}-dimensional vector")]
    InsufficientDimension { index: usize, dimension: usize },

    /// Normalising a vector with zero magnitude
    #[error("cannot normalise a zero-magnitude vector")]
    ZeroMagnitude,
}

/// Rejected simulation configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("gravitational constant must be finite, got {0}")]
    NonFiniteGravitationalConstant(f64),
}
