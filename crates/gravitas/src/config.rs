//! Simulation configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Gravitational constant in simulation units
///
/// The simulator works in dimensionless units where G is conventionally 1.
pub const DEFAULT_GRAVITATIONAL_CONSTANT: f64 = 1.0;

/// Parameters owned by a [`Universe`](crate::universe::Universe)
///
/// # Examples
///
/// ```
/// use gravitas::config::SimulationConfig;
///
/// let config = SimulationConfig::default();
/// assert_eq!(config.gravitational_constant, 1.0);
///
/// let strong = SimulationConfig::with_gravitational_constant(4.0);
/// assert!(strong.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Coefficient of the inverse-square force law
    pub gravitational_constant: f64,
}

impl SimulationConfig {
    /// Default configuration with a different G
    pub fn with_gravitational_constant(gravitational_constant: f64) -> Self {
        Self {
            gravitational_constant,
        }
    }

    /// Checks that the configuration describes a usable simulation
    ///
    /// Zero and negative values are allowed (no gravity, repulsion);
    /// NaN and infinities are not.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gravitational_constant.is_finite() {
            return Err(ConfigError::NonFiniteGravitationalConstant(
                self.gravitational_constant,
            ));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: DEFAULT_GRAVITATIONAL_CONSTANT,
        }
    }
}
