use super::constants::G_SI;
use super::bodies::Axes;

/// Newtonian point-mass gravity, all pairs.
///
/// The acceleration on body `i` is
///
/// ```text
/// a_i = G * sum_j m_j * (x_j - x_i) / |x_j - x_i|^3
/// ```
///
/// where the self term (`i == j`) is forced to exactly zero instead of being
/// evaluated. Two distinct bodies sharing the same position are not guarded
/// against: their contribution is `0 * inf` and the resulting NaN propagates.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct Gravity {
    pub gravitational_constant: f64,
}

impl Default for Gravity {
    fn default() -> Gravity {
        Gravity::new(G_SI)
    }
}

impl Gravity {
    pub fn new(gravitational_constant: f64) -> Gravity {
        Gravity { gravitational_constant: gravitational_constant }
    }

    /// Inverse cube of the distance between `i` and `j`, zero on the diagonal.
    #[inline]
    fn inverse_distance_3(displacement: Axes, i: usize, j: usize) -> f64 {
        if i == j {
            return 0.;
        }
        let distance_2 = displacement.x*displacement.x + displacement.y*displacement.y + displacement.z*displacement.z;
        let distance = distance_2.sqrt();
        1. / (distance_2 * distance)
    }

    /// Net acceleration on every body. `accelerations` is overwritten.
    ///
    /// Each row is summed in ascending `j`, which makes the result reproducible
    /// bit by bit for identical input.
    pub fn calculate_accelerations(&self, masses: &[f64], positions: &[Axes], accelerations: &mut [Axes]) {
        let n_bodies = masses.len();
        debug_assert_eq!(positions.len(), n_bodies);
        debug_assert_eq!(accelerations.len(), n_bodies);

        for (i, (acceleration, position_a)) in accelerations.iter_mut().zip(positions.iter()).enumerate() {
            let mut ax = 0.;
            let mut ay = 0.;
            let mut az = 0.;
            for (j, (position_b, mass_b)) in positions.iter().zip(masses.iter()).enumerate() {
                let dx = position_b.x - position_a.x;
                let dy = position_b.y - position_a.y;
                let dz = position_b.z - position_a.z;
                let prefact = self.gravitational_constant * mass_b * Gravity::inverse_distance_3(Axes{x: dx, y: dy, z: dz}, i, j);
                ax += prefact * dx;
                ay += prefact * dy;
                az += prefact * dz;
            }
            acceleration.x = ax;
            acceleration.y = ay;
            acceleration.z = az;
        }
    }

    /// Acceleration on body `i` caused by body `j` for every pair, as a row-major
    /// `n x n` tensor (entry `i*n + j`). The diagonal is exactly zero.
    ///
    /// The sum of row `i` in ascending `j` is what [`Gravity::calculate_accelerations`]
    /// returns for body `i`.
    pub fn pairwise_accelerations(&self, masses: &[f64], positions: &[Axes]) -> Vec<Axes> {
        let n_bodies = masses.len();
        let mut pairwise = vec![Axes::zero(); n_bodies*n_bodies];
        for (i, position_a) in positions.iter().enumerate() {
            for (j, (position_b, mass_b)) in positions.iter().zip(masses.iter()).enumerate() {
                let displacement = position_b.sub(*position_a);
                let prefact = self.gravitational_constant * mass_b * Gravity::inverse_distance_3(displacement, i, j);
                pairwise[i*n_bodies + j] = displacement.scale(prefact);
            }
        }
        pairwise
    }
}
