//! Two-phase time integration
//!
//! A step is split into a force phase and a position phase:
//!
//! 1. Kick: every acceleration is computed against the same frozen position
//!    snapshot, then `v(t + dt) = v(t) + a(t) * dt` for each body.
//! 2. Drift: `x(t + dt) = x(t) + v(t + dt) * dt` for each body.
//!
//! No position moves until every velocity has been updated. Interleaving
//! the phases per body would make the result depend on collection order.

use crate::body::Body;
use crate::gravity;
use crate::observer::StepObserver;
use crate::vector::{Dim, Dimension, Vector};

/// Accelerations of all bodies from the current positions, in collection order
pub(crate) fn accelerations<const D: usize>(bodies: &[Body<D>], g: f64) -> Vec<Vector<D>>
where
    Dim<D>: Dimension,
{
    bodies
        .iter()
        .map(|body| gravity::acceleration_at(bodies, &body.position, g))
        .collect()
}

/// Force phase: applies precomputed accelerations to velocities
///
/// `accelerations` must come from [`accelerations`] over the same bodies.
pub(crate) fn kick<const D: usize>(
    bodies: &mut [Body<D>],
    accelerations: &[Vector<D>],
    dt: f64,
    observer: &mut impl StepObserver<D>,
) {
    debug_assert_eq!(
        bodies.len(),
        accelerations.len(),
        "one acceleration per body"
    );

    bodies
        .iter_mut()
        .zip(accelerations)
        .enumerate()
        .for_each(|(index, (body, accel))| {
            observer.on_acceleration(index, body, accel);
            body.velocity = body.velocity + accel.scale(dt);
        });
}

/// Position phase: integrates every body from its updated velocity
pub(crate) fn drift<const D: usize>(bodies: &mut [Body<D>], dt: f64) {
    bodies.iter_mut().for_each(|body| body.update(dt));
}
