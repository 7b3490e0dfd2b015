use super::Integrator;
use super::super::bodies::Axes;
use super::super::gravity::Gravity;

/// First order integrator, velocities are updated before positions:
///
/// ```text
/// a  = F(x_n)
/// v_{n+1} = v_n + dt * a
/// x_{n+1} = x_n + dt * v_{n+1}
/// ```
///
/// Cheap, one force evaluation per step, but its truncation error is O(dt) and it
/// should not be used for long runs where energy accuracy matters.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardEuler {
    time_step: f64,
    accelerations: Vec<Axes>,
}

impl ForwardEuler {
    pub fn new(time_step: f64) -> ForwardEuler {
        ForwardEuler {
            time_step: time_step,
            accelerations: Vec::new(),
        }
    }
}

impl Integrator for ForwardEuler {

    fn get_time_step(&self) -> f64 {
        self.time_step
    }

    fn initialize(&mut self, _gravity: &Gravity, masses: &[f64], _positions: &[Axes]) {
        self.accelerations = vec![Axes::zero(); masses.len()];
    }

    fn step(&mut self, gravity: &Gravity, masses: &[f64], positions: &mut [Axes], velocities: &mut [Axes]) {
        gravity.calculate_accelerations(masses, positions, &mut self.accelerations);
        for ((position, velocity), acceleration) in positions.iter_mut().zip(velocities.iter_mut()).zip(self.accelerations.iter()) {
            velocity.x += self.time_step * acceleration.x;
            velocity.y += self.time_step * acceleration.y;
            velocity.z += self.time_step * acceleration.z;
            position.x += self.time_step * velocity.x;
            position.y += self.time_step * velocity.y;
            position.z += self.time_step * velocity.z;
        }
    }
}
