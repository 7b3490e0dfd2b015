mod state;
mod forward_euler;
mod leapfrog;
pub mod output;

pub use self::state::{StateTensor, Quantity};
pub use self::forward_euler::ForwardEuler;
pub use self::leapfrog::LeapFrog;

use std::fmt;
use std::str::FromStr;
use super::bodies::Axes;
use super::gravity::Gravity;
use super::error::{Error, Result};


pub trait Integrator {
    fn get_time_step(&self) -> f64;
    /// Called once before the first step, with the initial positions
    fn initialize(&mut self, gravity: &Gravity, masses: &[f64], positions: &[Axes]);
    /// Advance positions and velocities by one time step, in place
    fn step(&mut self, gravity: &Gravity, masses: &[f64], positions: &mut [Axes], velocities: &mut [Axes]);
}

/// Run `n_steps` steps of `integrator` from the given initial state.
///
/// The returned tensor holds the initial state at step 0 and the state after each
/// step at the following indices. The loop itself does no I/O and cannot be
/// interrupted: the only failure is a tensor that cannot be allocated, reported
/// before the first step.
pub fn integrate<I: Integrator>(integrator: &mut I, gravity: &Gravity, masses: &[f64], initial_positions: &[Axes], initial_velocities: &[Axes], n_steps: usize) -> Result<StateTensor> {
    let n_bodies = masses.len();
    assert_eq!(initial_positions.len(), n_bodies, "One position per body is required");
    assert_eq!(initial_velocities.len(), n_bodies, "One velocity per body is required");

    let mut state = StateTensor::new(n_steps, n_bodies)?;
    let mut positions = initial_positions.to_vec();
    let mut velocities = initial_velocities.to_vec();
    state.store(0, &positions, &velocities);

    integrator.initialize(gravity, masses, &positions);
    for step in 1..=n_steps {
        integrator.step(gravity, masses, &mut positions, &mut velocities);
        state.store(step, &positions, &velocities);
    }
    Ok(state)
}

/// Supported time-stepping schemes.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Method {
    ForwardEuler,
    LeapFrog,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::ForwardEuler, Method::LeapFrog];

    pub fn label(&self) -> &'static str {
        match self {
            Method::ForwardEuler => "forward_euler",
            Method::LeapFrog => "leapfrog",
        }
    }

    pub fn integrate(self, gravity: &Gravity, masses: &[f64], initial_positions: &[Axes], initial_velocities: &[Axes], time_step: f64, n_steps: usize) -> Result<StateTensor> {
        match self {
            Method::ForwardEuler => integrate(&mut ForwardEuler::new(time_step), gravity, masses, initial_positions, initial_velocities, n_steps),
            Method::LeapFrog => integrate(&mut LeapFrog::new(time_step), gravity, masses, initial_positions, initial_velocities, n_steps),
        }
    }
}

impl Default for Method {
    fn default() -> Method {
        Method::LeapFrog
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(label: &str) -> Result<Method> {
        Method::ALL.iter()
            .find(|method| method.label() == label)
            .copied()
            .ok_or_else(|| Error::UnsupportedMethod(label.to_string()))
    }
}
