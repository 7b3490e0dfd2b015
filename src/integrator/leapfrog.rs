use super::Integrator;
use super::super::bodies::Axes;
use super::super::gravity::Gravity;

/// LeapFrog is a second order symplectic integrator
/// http://adsabs.harvard.edu/cgi-bin/bib_query?arXiv:astro-ph/9710043
///
/// Kick-Drift-Kick form: the velocities are advanced for half a time-step with the
/// current accelerations, then the positions for a full time-step with the
/// half-step velocities, and finally the velocities again for half a time-step with
/// the accelerations at the new positions. The accelerations at the end of a step
/// are reused at the start of the next one, so after the initial evaluation there
/// is a single force evaluation per step.
///
/// Being time-reversible and symplectic, the energy error oscillates instead of
/// drifting, which is what long runs (millions of steps) need.
#[derive(Debug, Clone, PartialEq)]
pub struct LeapFrog {
    time_step: f64,
    half_time_step: f64,
    accelerations: Vec<Axes>,
}

impl LeapFrog {
    pub fn new(time_step: f64) -> LeapFrog {
        LeapFrog {
            time_step: time_step,
            half_time_step: 0.5*time_step,
            accelerations: Vec::new(),
        }
    }

    fn kick(&self, velocities: &mut [Axes]) {
        for (velocity, acceleration) in velocities.iter_mut().zip(self.accelerations.iter()) {
            velocity.x += self.half_time_step * acceleration.x;
            velocity.y += self.half_time_step * acceleration.y;
            velocity.z += self.half_time_step * acceleration.z;
        }
    }

    fn drift(&self, positions: &mut [Axes], velocities: &[Axes]) {
        for (position, velocity) in positions.iter_mut().zip(velocities.iter()) {
            position.x += self.time_step * velocity.x;
            position.y += self.time_step * velocity.y;
            position.z += self.time_step * velocity.z;
        }
    }
}

impl Integrator for LeapFrog {

    fn get_time_step(&self) -> f64 {
        self.time_step
    }

    fn initialize(&mut self, gravity: &Gravity, masses: &[f64], positions: &[Axes]) {
        self.accelerations = vec![Axes::zero(); masses.len()];
        gravity.calculate_accelerations(masses, positions, &mut self.accelerations);
    }

    fn step(&mut self, gravity: &Gravity, masses: &[f64], positions: &mut [Axes], velocities: &mut [Axes]) {
        self.kick(velocities);
        self.drift(positions, velocities);
        gravity.calculate_accelerations(masses, positions, &mut self.accelerations);
        self.kick(velocities);
    }
}
