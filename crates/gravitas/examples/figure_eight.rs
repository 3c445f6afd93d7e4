//! Three-body figure-eight choreography
//!
//! Three equal masses chase each other along a figure-eight curve
//! (Chenciner & Montgomery, 2000). The orbit is only marginally stable, so
//! the fixed-step integrator eventually drifts away from it; the printout
//! shows how far each body strays from its starting point after one period.
//!
//! Run with: cargo run --package gravitas --example figure_eight

use gravitas::{Body, StepObserver, Universe, Vector};

/// Records the largest acceleration seen during the run
#[derive(Default)]
struct PeakAcceleration {
    peak: f64,
    body: usize,
}

impl StepObserver<2> for PeakAcceleration {
    fn on_acceleration(&mut self, index: usize, _body: &Body<2>, acceleration: &Vector<2>) {
        let magnitude = acceleration.magnitude();
        if magnitude > self.peak {
            self.peak = magnitude;
            self.body = index;
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let x1 = Vector::new([0.97000436, -0.24308753]);
    let v3 = Vector::new([-0.93240737, -0.86473146]);
    let v1 = v3.scale(-0.5);

    let mut universe = Universe::new(vec![
        Body::with_state(1.0, x1, v1),
        Body::with_state(1.0, -x1, v1),
        Body::with_state(1.0, Vector::zero(), v3),
    ]);
    let start: Vec<_> = universe.bodies().to_vec();
    let initial_energy = universe.total_energy();

    let period = 6.32591398;
    let steps = 20_000;
    let dt = period / steps as f64;

    let mut observer = PeakAcceleration::default();
    for _ in 0..steps {
        universe.update_observed(dt, &mut observer);
    }

    println!("Figure-eight after one period (t = {:.5})", universe.time());
    for (i, (body, initial)) in universe.bodies().iter().zip(&start).enumerate() {
        println!(
            "  Body {i}: {} (offset {:.3e})",
            body.position,
            body.position.distance_to(&initial.position)
        );
    }

    let energy_error = ((universe.total_energy() - initial_energy) / initial_energy).abs();
    println!("  Energy error: {energy_error:.2e}");
    println!(
        "  Peak acceleration: {:.4} on body {}",
        observer.peak, observer.body
    );
}
