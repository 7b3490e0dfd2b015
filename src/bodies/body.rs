use super::Axes;

/// Point mass with its current state and the positions it went through during the
/// last solve.
///
/// The trajectory holds one position per completed integration step (the
/// initial position is not included), so after a solve of `n_steps` steps it has
/// exactly `n_steps` entries and its last entry is the current position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Body {
    mass: f64,
    position: Axes,
    velocity: Axes,
    colour: String, // Display tag, physically inert
    trajectory: Vec<Axes>,
}

impl Body {
    /// Build a body with an empty trajectory.
    ///
    /// # Panics
    ///
    /// If `mass` is not strictly positive. Records read through
    /// [`crate::record`] are validated first and report an error instead.
    pub fn new<S: Into<String>>(mass: f64, position: Axes, velocity: Axes, colour: S) -> Body {
        assert!(mass > 0., "Body mass must be strictly positive (got {})", mass);
        Body {
            mass: mass,
            position: position,
            velocity: velocity,
            colour: colour.into(),
            trajectory: Vec::new(),
        }
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn position(&self) -> Axes {
        self.position
    }

    pub fn velocity(&self) -> Axes {
        self.velocity
    }

    pub fn colour(&self) -> &str {
        &self.colour
    }

    pub fn trajectory(&self) -> &[Axes] {
        &self.trajectory
    }

    // Only the system writes back the integrated state
    pub(crate) fn set_state(&mut self, position: Axes, velocity: Axes, trajectory: Vec<Axes>) {
        self.position = position;
        self.velocity = velocity;
        self.trajectory = trajectory;
    }
}
