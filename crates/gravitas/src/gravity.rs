//! Direct-summation Newtonian gravity (O(N) per query, O(N²) per step)

use crate::body::Body;
use crate::vector::{Dim, Dimension, Vector};

/// Net gravitational acceleration felt by a test point at `position`
///
/// Sums `g * m / r²` along the unit vector toward each body. A body whose
/// position coincides exactly with `position` is skipped: that is how a body
/// avoids attracting itself, and it keeps the force law away from a division
/// by zero.
///
/// # Examples
///
/// ```
/// use gravitas::body::Body;
/// use gravitas::gravity::acceleration_at;
/// use gravitas::vector::Vector;
///
/// let bodies = [Body::new(4.0).with_position(Vector::new([2.0, 0.0]))];
///
/// let accel = acceleration_at(&bodies, &Vector::zero(), 1.0);
/// assert_eq!(accel, Vector::new([1.0, 0.0]));
///
/// // The body's own position feels nothing from it
/// let own = acceleration_at(&bodies, &bodies[0].position, 1.0);
/// assert_eq!(own, Vector::zero());
/// ```
pub fn acceleration_at<const D: usize>(bodies: &[Body<D>], position: &Vector<D>, g: f64) -> Vector<D>
where
    Dim<D>: Dimension,
{
    bodies
        .iter()
        .filter_map(|body| {
            let distance = body.position.distance_to(position);
            if distance == 0.0 {
                return None;
            }
            let strength = g * body.mass / (distance * distance);
            Some(position.vector_to(&body.position).normalise().scale(strength))
        })
        .fold(Vector::zero(), |acc, a| acc + a)
}

/// Total gravitational potential energy, each pair counted once
///
/// Coincident pairs are skipped under the same rule as [`acceleration_at`].
pub fn potential_energy<const D: usize>(bodies: &[Body<D>], g: f64) -> f64 {
    bodies
        .iter()
        .enumerate()
        .flat_map(|(i, a)| {
            bodies[i + 1..].iter().filter_map(move |b| {
                let r = a.distance_to(b);
                (r != 0.0).then(|| -g * a.mass * b.mass / r)
            })
        })
        .sum()
}
