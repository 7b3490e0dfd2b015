#![allow(dead_code)]
pub mod systems;

use nbody::Axes;

/// Total mechanical energy of a packed state
pub fn total_energy(gravitational_constant: f64, masses: &[f64], positions: &[Axes], velocities: &[Axes]) -> f64 {
    let mut e_kin = 0.;
    let mut e_pot = 0.;
    for (mass, velocity) in masses.iter().zip(velocities.iter()) {
        e_kin += 0.5 * mass * velocity.norm_2();
    }
    for i in 0..masses.len() {
        for j in i+1..masses.len() {
            e_pot -= gravitational_constant * masses[i] * masses[j] / positions[i].sub(positions[j]).norm();
        }
    }
    e_kin + e_pot
}

/// Norm of the total angular momentum of a packed state
pub fn total_angular_momentum(masses: &[f64], positions: &[Axes], velocities: &[Axes]) -> f64 {
    let mut total = Axes::zero();
    for ((mass, position), velocity) in masses.iter().zip(positions.iter()).zip(velocities.iter()) {
        total = total.add(position.cross(*velocity).scale(*mass));
    }
    total.norm()
}

pub fn relative_error(value: f64, reference: f64) -> f64 {
    ((value - reference) / reference).abs()
}
