use serde_json::Value;
use super::super::constants::G_SI;
use super::super::error::{Error, Result};
use super::super::gravity::Gravity;
use super::super::integrator::{Method, Quantity};
use super::record::bodies_from_records;
use super::{Axes, Body};

/// Ordered set of bodies interacting under gravity.
///
/// The order of the bodies is the index used in the packed state and never
/// changes after construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct System {
    bodies: Vec<Body>,
    n_bodies: usize,
    gravity: Gravity,
}

impl System {
    pub fn new(bodies: Vec<Body>) -> System {
        System::with_gravitational_constant(bodies, G_SI)
    }

    pub fn with_gravitational_constant(bodies: Vec<Body>, gravitational_constant: f64) -> System {
        let n_bodies = bodies.len();
        System {
            bodies: bodies,
            n_bodies: n_bodies,
            gravity: Gravity::new(gravitational_constant),
        }
    }

    /// Validate an ordered `name -> {mass, pos, vel, colour}` mapping and build the system
    pub fn from_records(records: &Value) -> Result<System> {
        System::from_records_with_gravitational_constant(records, G_SI)
    }

    pub fn from_records_with_gravitational_constant(records: &Value, gravitational_constant: f64) -> Result<System> {
        let bodies = bodies_from_records(records)?;
        Ok(System::with_gravitational_constant(bodies, gravitational_constant))
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn n_bodies(&self) -> usize {
        self.n_bodies
    }

    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    pub fn gravitational_constant(&self) -> f64 {
        self.gravity.gravitational_constant
    }

    pub fn masses(&self) -> Vec<f64> {
        self.bodies.iter().map(|body| body.mass()).collect()
    }

    pub fn positions(&self) -> Vec<Axes> {
        self.bodies.iter().map(|body| body.position()).collect()
    }

    pub fn velocities(&self) -> Vec<Axes> {
        self.bodies.iter().map(|body| body.velocity()).collect()
    }

    /// Integrate `n_steps` steps of `time_step` with the chosen method.
    ///
    /// Afterwards every body holds its state at the last step and a trajectory of
    /// `n_steps` positions (steps 1 to `n_steps`), replacing any previous one. A new
    /// solve continues from the current state. If the state cannot be allocated the
    /// system is left untouched.
    pub fn solve(&mut self, time_step: f64, n_steps: usize, method: Method) -> Result<()> {
        let masses = self.masses();
        let positions = self.positions();
        let velocities = self.velocities();

        let state = method.integrate(&self.gravity, &masses, &positions, &velocities, time_step, n_steps)?;
        let final_velocities = state.block(n_steps, Quantity::Velocity).to_vec();
        let history = state.into_positions();

        let mut trajectories = Vec::with_capacity(self.n_bodies);
        for _ in 0..self.n_bodies {
            let mut trajectory = Vec::new();
            trajectory.try_reserve_exact(n_steps)
                      .map_err(|_| Error::StateTooLarge { n_steps: n_steps, n_bodies: self.n_bodies })?;
            trajectories.push(trajectory);
        }
        if self.n_bodies > 0 {
            for step_positions in history.chunks_exact(self.n_bodies).skip(1) {
                for (trajectory, position) in trajectories.iter_mut().zip(step_positions.iter()) {
                    trajectory.push(*position);
                }
            }
        }
        let final_positions = history[n_steps*self.n_bodies..].to_vec();
        drop(history);

        for (((body, trajectory), position), velocity) in self.bodies.iter_mut()
                                                            .zip(trajectories.into_iter())
                                                            .zip(final_positions.into_iter())
                                                            .zip(final_velocities.into_iter()) {
            body.set_state(position, velocity, trajectory);
        }
        Ok(())
    }

    pub fn compute_total_energy(&self) -> f64 {
        let mut e_kin = 0.;
        let mut e_pot = 0.;

        // Kinetic energy
        for body in self.bodies.iter() {
            e_kin += 0.5 * body.mass() * body.velocity().norm_2();
        }
        // Gravitational potential energy
        for (i, body_a) in self.bodies.iter().enumerate() {
            for body_b in self.bodies[i+1..].iter() {
                let distance = body_a.position().sub(body_b.position()).norm();
                e_pot -= self.gravity.gravitational_constant * body_a.mass() * body_b.mass() / distance;
            }
        }

        e_kin + e_pot
    }

    /// Norm of the total angular momentum around the origin
    pub fn compute_total_angular_momentum(&self) -> f64 {
        let mut total_angular_momentum = Axes::zero(); // L
        for body in self.bodies.iter() {
            total_angular_momentum = total_angular_momentum.add(body.position().cross(body.velocity()).scale(body.mass()));
        }
        total_angular_momentum.norm()
    }

    pub fn calculate_center_of_mass(&self) -> (Axes, Axes) {
        calculate_center_of_mass(&self.masses(), &self.positions(), &self.velocities())
    }

    /// Trajectories expressed relative to the centre of mass at every step.
    pub fn barycentric_trajectories(&self) -> Vec<Vec<Axes>> {
        let masses = self.masses();
        let total_mass: f64 = masses.iter().sum();
        let n_steps = self.bodies.iter().map(|body| body.trajectory().len()).min().unwrap_or(0);

        let mut centers = Vec::with_capacity(n_steps);
        for step in 0..n_steps {
            let mut center = Axes::zero();
            for (body, mass) in self.bodies.iter().zip(masses.iter()) {
                center = center.add(body.trajectory()[step].scale(*mass));
            }
            centers.push(center.scale(1. / total_mass));
        }

        self.bodies.iter()
            .map(|body| body.trajectory()[..n_steps].iter()
                            .zip(centers.iter())
                            .map(|(position, center)| position.sub(*center))
                            .collect())
            .collect()
    }
}

pub fn calculate_center_of_mass(masses: &[f64], positions: &[Axes], velocities: &[Axes]) -> (Axes, Axes) {
    let mut center_of_mass_position = Axes::zero();
    let mut center_of_mass_velocity = Axes::zero();
    let mut center_of_mass_mass = 0.;

    for ((mass, position), velocity) in masses.iter().zip(positions.iter()).zip(velocities.iter()) {
        center_of_mass_position = center_of_mass_position.add(position.scale(*mass));
        center_of_mass_velocity = center_of_mass_velocity.add(velocity.scale(*mass));
        center_of_mass_mass += mass;
    }
    if center_of_mass_mass > 0. {
        center_of_mass_position = center_of_mass_position.scale(1. / center_of_mass_mass);
        center_of_mass_velocity = center_of_mass_velocity.scale(1. / center_of_mass_mass);
    }

    (center_of_mass_position, center_of_mass_velocity)
}
