//! Circular binary example
//!
//! Two equal masses orbit their common centre. Prints energy and momentum
//! drift once per orbit.
//!
//! Run with: cargo run --package gravitas --example binary_orbit
//! Set RUST_LOG=gravitas=debug to see per-step logging.

use gravitas::{Body, Universe, Vector};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Direct N-body: circular binary\n");
    println!("{}", "=".repeat(60));

    // Separation d = 1, each body at r = 0.5 from the centre.
    // Circular speed: v² / r = G m / d²
    let mass: f64 = 1.0;
    let separation = 1.0;
    let r = separation / 2.0;
    let v = (mass * r / (separation * separation)).sqrt();

    let mut universe = Universe::new(vec![
        Body::with_state(mass, Vector::new([-r, 0.0]), Vector::new([0.0, -v])),
        Body::with_state(mass, Vector::new([r, 0.0]), Vector::new([0.0, v])),
    ]);

    let initial_energy = universe.total_energy();
    let initial_momentum = universe.total_momentum();

    println!("Initial conditions:");
    println!("  Masses: {mass} each, separation {separation}");
    println!("  Orbital speed: {v:.6}");
    println!("  Total energy: {initial_energy:.6e}");

    let period = 2.0 * std::f64::consts::PI * r / v;
    let steps_per_orbit = 2000;
    let dt = period / steps_per_orbit as f64;
    let n_orbits = 5;

    println!("\nIntegration parameters:");
    println!("  Period: {period:.6}");
    println!("  Timestep: {dt:.6e} ({steps_per_orbit} steps/orbit)");
    println!("  Orbits: {n_orbits}\n");

    for orbit in 1..=n_orbits {
        universe.integrate(dt, steps_per_orbit);

        let energy_error = ((universe.total_energy() - initial_energy) / initial_energy).abs();
        let momentum_drift = (universe.total_momentum() - initial_momentum).magnitude();
        let d = universe.bodies()[0].distance_to(&universe.bodies()[1]);

        println!(
            "Orbit {orbit}: t={:.4}, d={d:.6}, ΔE={energy_error:.2e}, Δp={momentum_drift:.2e}",
            universe.time()
        );
    }

    println!("\n{}", "=".repeat(60));
    for (i, body) in universe.bodies().iter().enumerate() {
        println!("Body {i}: position {} velocity {}", body.position, body.velocity);
    }
}
