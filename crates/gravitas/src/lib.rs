//! Direct-summation N-body gravity
//!
//! Point masses attract each other under an inverse-square law and are
//! stepped forward in fixed time increments. A driver builds the bodies,
//! hands them to a [`Universe`] and calls [`Universe::update`] in a loop.

pub mod body;
pub mod config;
pub mod error;
pub mod gravity;
mod integrator;
pub mod observer;
pub mod universe;
pub mod vector;

#[cfg(test)]
mod vector_test;

pub use body::Body;
pub use config::SimulationConfig;
pub use error::{ConfigError, VectorError};
pub use observer::{NoopObserver, StepObserver};
pub use universe::Universe;
pub use vector::{Dim, Dimension, Vector};
