use nbody::{Axes, Body, System};

/// Two equal unit masses at unit distance, G = 1, with the tangential velocity of a
/// circular orbit around their centre of mass: v = sqrt(G*2m/(4r)).
pub fn two_body_circular_orbit() -> System {
    let gravitational_constant: f64 = 1.;
    let mass = 1.;
    let distance = 1.;
    let velocity = (gravitational_constant * 2. * mass / (4. * distance)).sqrt();
    let bodies = vec![
        Body::new(mass, Axes::new(-0.5*distance, 0., 0.), Axes::new(0., -velocity, 0.), "black"),
        Body::new(mass, Axes::new(0.5*distance, 0., 0.), Axes::new(0., velocity, 0.), "white"),
    ];
    System::with_gravitational_constant(bodies, gravitational_constant)
}

/// Two unit masses at rest one metre apart, S.I. gravitational constant
pub fn two_bodies_at_rest() -> System {
    let bodies = vec![
        Body::new(1., Axes::new(0., 0., 0.), Axes::zero(), "black"),
        Body::new(1., Axes::new(1., 0., 0.), Axes::zero(), "white"),
    ];
    System::new(bodies)
}

/// Four bodies with different masses in a loosely bound configuration, G = 1
pub fn four_bodies() -> System {
    let bodies = vec![
        Body::new(10., Axes::new(0., 0., 0.), Axes::new(0., 0., 0.), "y"),
        Body::new(1., Axes::new(3., 0.5, -0.2), Axes::new(0.1, 1.7, 0.), "b"),
        Body::new(0.5, Axes::new(-2., 4., 1.), Axes::new(-1.2, -0.4, 0.05), "r"),
        Body::new(2.5, Axes::new(0.7, -6., 0.3), Axes::new(1.1, 0.2, -0.1), "g"),
    ];
    System::with_gravitational_constant(bodies, 1.)
}
