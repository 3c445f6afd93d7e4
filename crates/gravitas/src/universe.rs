use tracing::{debug, trace};

use crate::body::Body;
use crate::config::SimulationConfig;
use crate::error::ConfigError;
use crate::gravity;
use crate::integrator;
use crate::observer::{NoopObserver, StepObserver};
use crate::vector::{Dim, Dimension, Vector};

/// A closed collection of mutually attracting bodies
///
/// The universe owns its bodies for its whole lifetime. Bodies are mutated
/// only by stepping; the collection itself is never replaced, grown or
/// shrunk. Collection order is kept for iteration but has no effect on the
/// physics.
#[derive(Debug, Clone)]
pub struct Universe<const D: usize> {
    bodies: Vec<Body<D>>,
    config: SimulationConfig,
    /// Elapsed simulation time
    time: f64,
}

impl<const D: usize> Universe<D>
where
    Dim<D>: Dimension,
{
    /// Creates a universe with the default configuration (G = 1)
    ///
    /// # Examples
    ///
    /// ```
    /// use gravitas::body::Body;
    /// use gravitas::universe::Universe;
    /// use gravitas::vector::Vector;
    ///
    /// let mut universe = Universe::new(vec![
    ///     Body::new(1.0).with_position(Vector::new([0.0, 0.0, 0.0])),
    ///     Body::new(1.0).with_position(Vector::new([1.0, 0.0, 0.0])),
    /// ]);
    ///
    /// universe.update(0.1);
    ///
    /// // The bodies drift toward each other
    /// assert!(universe.bodies()[0].velocity.x() > 0.0);
    /// assert!(universe.bodies()[1].velocity.x() < 0.0);
    /// ```
    pub fn new(bodies: Vec<Body<D>>) -> Self {
        Self {
            bodies,
            config: SimulationConfig::default(),
            time: 0.0,
        }
    }

    /// Creates a universe with an explicit configuration
    ///
    /// # Arguments
    ///
    /// * `bodies` - Initial bodies, in iteration order
    /// * `config` - Simulation parameters, validated before use
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the configuration is rejected by
    /// [`SimulationConfig::validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use gravitas::body::Body;
    /// use gravitas::config::SimulationConfig;
    /// use gravitas::universe::Universe;
    ///
    /// let config = SimulationConfig::with_gravitational_constant(2.5);
    /// let universe = Universe::<2>::with_config(vec![Body::new(1.0)], config)?;
    ///
    /// assert_eq!(universe.gravitational_constant(), 2.5);
    /// # Ok::<(), gravitas::error::ConfigError>(())
    /// ```
    pub fn with_config(bodies: Vec<Body<D>>, config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            bodies,
            config,
            time: 0.0,
        })
    }

    /// Net gravitational acceleration at `position` from every body
    ///
    /// Bodies sitting exactly at `position` are ignored, so passing a body's
    /// own position gives the pull of all the other bodies.
    pub fn gravitational_acceleration(&self, position: &Vector<D>) -> Vector<D> {
        gravity::acceleration_at(&self.bodies, position, self.config.gravitational_constant)
    }

    /// Advances the simulation by one step of `timedelta`
    pub fn update(&mut self, timedelta: f64) {
        self.update_observed(timedelta, &mut NoopObserver);
    }

    /// Advances by one step, reporting each body's acceleration to `observer`
    #[tracing::instrument(skip_all, fields(bodies = self.bodies.len(), timedelta = timedelta))]
    pub fn update_observed(&mut self, timedelta: f64, observer: &mut impl StepObserver<D>) {
        // Every acceleration comes from the pre-step snapshot
        let accelerations =
            integrator::accelerations(&self.bodies, self.config.gravitational_constant);

        for (index, accel) in accelerations.iter().enumerate() {
            trace!(index, acceleration = %accel, "computed acceleration");
        }

        integrator::kick(&mut self.bodies, &accelerations, timedelta, observer);
        integrator::drift(&mut self.bodies, timedelta);

        self.time += timedelta;
        debug!(time = self.time, "step complete");
    }

    /// Takes `steps` updates of `timedelta` and returns the final time
    pub fn integrate(&mut self, timedelta: f64, steps: usize) -> f64 {
        debug!(timedelta, steps, "integrating");
        for _ in 0..steps {
            self.update(timedelta);
        }
        self.time
    }

    /// Mass-weighted mean position, or `None` when the total mass is zero
    pub fn center_of_mass(&self) -> Option<Vector<D>> {
        let total = self.total_mass();
        if total == 0.0 {
            return None;
        }
        let weighted = self
            .bodies
            .iter()
            .map(|b| b.position.scale(b.mass))
            .fold(Vector::zero(), |acc, p| acc + p);
        Some(weighted.scale(1.0 / total))
    }

    /// Total momentum of all bodies
    ///
    /// Stays at its initial value for an isolated system, up to
    /// floating-point drift.
    pub fn total_momentum(&self) -> Vector<D> {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(Vector::zero(), |acc, p| acc + p)
    }
}

impl<const D: usize> Universe<D> {
    /// All bodies, in collection order
    pub fn bodies(&self) -> &[Body<D>] {
        &self.bodies
    }

    /// Body at `index`, if there is one
    pub fn body(&self, index: usize) -> Option<&Body<D>> {
        self.bodies.get(index)
    }

    /// Number of bodies
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// True when the universe holds no bodies
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Configuration the universe was built with
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// G used by the force law
    pub fn gravitational_constant(&self) -> f64 {
        self.config.gravitational_constant
    }

    /// Simulation time elapsed across all updates
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Sum of all body masses
    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }

    /// Total kinetic energy of all bodies
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    /// Gravitational potential energy, each pair counted once
    pub fn potential_energy(&self) -> f64 {
        gravity::potential_energy(&self.bodies, self.config.gravitational_constant)
    }

    /// Kinetic plus potential energy
    ///
    /// Useful for checking numerical drift over a run.
    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }
}
