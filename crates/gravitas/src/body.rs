use serde::{Deserialize, Serialize};

use crate::vector::{Dim, Dimension, Vector};

/// A point mass in `D`-dimensional space
///
/// Fields are public for drivers that render or log the simulation.
/// Velocity is written by [`Universe`](crate::universe::Universe) during the
/// force phase; position only moves through [`Body::update`].
///
/// Mass is not validated. A zero mass exerts no pull; a negative one
/// produces repulsion. Choosing physical values is the caller's job.
///
/// Like [`Vector`], bodies only deserialize in 2, 3 or 4 dimensions:
///
/// ```compile_fail
/// use gravitas::body::Body;
///
/// let json = r#"{ "mass": 1.0, "position": [0.0], "velocity": [0.0] }"#;
/// let body: Body<1> = serde_json::from_str(json).unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "Dim<D>: Dimension"))]
pub struct Body<const D: usize> {
    pub mass: f64,
    pub position: Vector<D>,
    pub velocity: Vector<D>,
}

impl<const D: usize> Body<D>
where
    Dim<D>: Dimension,
{
    /// Creates a body at rest at the origin
    ///
    /// # Examples
    ///
    /// ```
    /// use gravitas::body::Body;
    /// use gravitas::vector::Vector;
    ///
    /// let body = Body::<2>::new(1.0).with_position(Vector::new([1.0, 0.0]));
    ///
    /// assert_eq!(body.position.x(), 1.0);
    /// assert_eq!(body.velocity, Vector::zero());
    /// ```
    pub fn new(mass: f64) -> Self {
        Self::with_state(mass, Vector::zero(), Vector::zero())
    }

    /// Creates a body with explicit initial state
    ///
    /// # Arguments
    ///
    /// * `mass` - Body mass in simulation units
    /// * `position` - Initial position
    /// * `velocity` - Initial velocity
    ///
    /// # Examples
    ///
    /// ```
    /// use gravitas::body::Body;
    /// use gravitas::vector::Vector;
    ///
    /// let body = Body::with_state(2.0, Vector::new([1.0, 0.0]), Vector::new([0.0, 0.5]));
    /// assert_eq!(body.momentum(), Vector::new([0.0, 1.0]));
    /// ```
    pub fn with_state(mass: f64, position: Vector<D>, velocity: Vector<D>) -> Self {
        Self {
            mass,
            position,
            velocity,
        }
    }

    /// Replaces the position, keeping mass and velocity
    pub fn with_position(mut self, position: Vector<D>) -> Self {
        self.position = position;
        self
    }

    /// Replaces the velocity, keeping mass and position
    pub fn with_velocity(mut self, velocity: Vector<D>) -> Self {
        self.velocity = velocity;
        self
    }
}

impl<const D: usize> Body<D> {
    /// Advances position by the current velocity over `timedelta`
    pub fn update(&mut self, timedelta: f64) {
        self.position = self.position + self.velocity.scale(timedelta);
    }

    /// Linear momentum, `m * v`
    pub fn momentum(&self) -> Vector<D> {
        self.velocity.scale(self.mass)
    }

    /// Kinetic energy, `0.5 * m * |v|²`
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    /// Magnitude of the velocity
    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    /// Distance between the two bodies' positions
    pub fn distance_to(&self, other: &Body<D>) -> f64 {
        self.position.distance_to(&other.position)
    }
}
