//! Hooks into the force phase of a step

use crate::body::Body;
use crate::vector::Vector;

/// Receives every acceleration computed during a step
///
/// Called once per body, in collection order, after the acceleration is
/// known and before the body's velocity is updated. Observers see the
/// pre-step state and cannot mutate it.
///
/// Any `FnMut(usize, &Body<D>, &Vector<D>)` closure is an observer:
///
/// ```
/// use gravitas::body::Body;
/// use gravitas::universe::Universe;
/// use gravitas::vector::Vector;
///
/// let mut universe = Universe::new(vec![
///     Body::new(1.0),
///     Body::new(1.0).with_position(Vector::new([1.0, 0.0])),
/// ]);
///
/// let mut seen = Vec::new();
/// universe.update_observed(0.1, &mut |index: usize, _: &Body<2>, accel: &Vector<2>| {
///     seen.push((index, accel.magnitude()));
/// });
///
/// assert_eq!(seen.len(), 2);
/// assert_eq!(seen[0].1, seen[1].1);
/// ```
pub trait StepObserver<const D: usize> {
    fn on_acceleration(&mut self, index: usize, body: &Body<D>, acceleration: &Vector<D>);
}

impl<const D: usize, F> StepObserver<D> for F
where
    F: FnMut(usize, &Body<D>, &Vector<D>),
{
    fn on_acceleration(&mut self, index: usize, body: &Body<D>, acceleration: &Vector<D>) {
        self(index, body, acceleration)
    }
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<const D: usize> StepObserver<D> for NoopObserver {
    fn on_acceleration(&mut self, _index: usize, _body: &Body<D>, _acceleration: &Vector<D>) {}
}
