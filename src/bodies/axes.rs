#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Axes {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Axes {
    pub fn new(x: f64, y: f64, z: f64) -> Axes {
        Axes{x: x, y: y, z: z}
    }

    pub fn zero() -> Axes {
        Axes{x: 0., y: 0., z: 0.}
    }

    pub fn add(&self, other: Axes) -> Axes {
        Axes{x: self.x + other.x, y: self.y + other.y, z: self.z + other.z}
    }

    pub fn sub(&self, other: Axes) -> Axes {
        Axes{x: self.x - other.x, y: self.y - other.y, z: self.z - other.z}
    }

    pub fn scale(&self, factor: f64) -> Axes {
        Axes{x: factor * self.x, y: factor * self.y, z: factor * self.z}
    }

    pub fn dot(&self, other: Axes) -> f64 {
        self.x*other.x + self.y*other.y + self.z*other.z
    }

    pub fn cross(&self, other: Axes) -> Axes {
        Axes{
            x: self.y*other.z - self.z*other.y,
            y: self.z*other.x - self.x*other.z,
            z: self.x*other.y - self.y*other.x,
        }
    }

    /// Squared norm
    pub fn norm_2(&self) -> f64 {
        self.x.powi(2) + self.y.powi(2) + self.z.powi(2)
    }

    pub fn norm(&self) -> f64 {
        self.norm_2().sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Axes {
    fn from(components: [f64; 3]) -> Axes {
        Axes{x: components[0], y: components[1], z: components[2]}
    }
}

impl From<Axes> for [f64; 3] {
    fn from(axes: Axes) -> [f64; 3] {
        [axes.x, axes.y, axes.z]
    }
}
