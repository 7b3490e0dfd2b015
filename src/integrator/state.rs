use super::super::bodies::Axes;
use super::super::error::{Error, Result};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Quantity {
    Position = 0,
    Velocity = 1,
}

/// Packed positions and velocities of all bodies at every step.
///
/// Logical shape is `[n_steps+1][2][n_bodies][3]`: step, quantity (positions then
/// velocities), body, axis. It is backed by a single buffer sized once from the
/// number of steps, step 0 being the initial condition.
#[derive(Debug, Clone, PartialEq)]
pub struct StateTensor {
    n_steps: usize,
    n_bodies: usize,
    data: Vec<Axes>,
}

impl StateTensor {
    /// Allocate the whole tensor up front. Fails instead of aborting when the
    /// number of entries overflows or the allocation is refused.
    pub fn new(n_steps: usize, n_bodies: usize) -> Result<StateTensor> {
        let too_large = || Error::StateTooLarge { n_steps: n_steps, n_bodies: n_bodies };
        let n_entries = n_steps.checked_add(1)
                            .and_then(|n| n.checked_mul(2))
                            .and_then(|n| n.checked_mul(n_bodies))
                            .ok_or_else(too_large)?;
        let mut data = Vec::new();
        data.try_reserve_exact(n_entries).map_err(|_| too_large())?;
        data.resize(n_entries, Axes::zero());
        Ok(StateTensor {
            n_steps: n_steps,
            n_bodies: n_bodies,
            data: data,
        })
    }

    /// Number of integration steps (the tensor holds one more entry along the step axis)
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    pub fn n_bodies(&self) -> usize {
        self.n_bodies
    }

    #[inline]
    fn offset(&self, step: usize, quantity: Quantity) -> usize {
        assert!(step <= self.n_steps, "Step {} is out of range (0..={})", step, self.n_steps);
        (step*2 + quantity as usize)*self.n_bodies
    }

    pub fn get(&self, step: usize, quantity: Quantity, body: usize) -> Axes {
        self.block(step, quantity)[body]
    }

    /// All bodies' positions or velocities at one step
    pub fn block(&self, step: usize, quantity: Quantity) -> &[Axes] {
        let offset = self.offset(step, quantity);
        &self.data[offset..offset+self.n_bodies]
    }

    pub fn store(&mut self, step: usize, positions: &[Axes], velocities: &[Axes]) {
        let offset = self.offset(step, Quantity::Position);
        self.data[offset..offset+self.n_bodies].copy_from_slice(positions);
        let offset = self.offset(step, Quantity::Velocity);
        self.data[offset..offset+self.n_bodies].copy_from_slice(velocities);
    }

    /// Drop the velocities and keep the positions as `[n_steps+1][n_bodies]`,
    /// reusing the same buffer.
    pub fn into_positions(mut self) -> Vec<Axes> {
        let n_bodies = self.n_bodies;
        for step in 0..=self.n_steps {
            let offset = self.offset(step, Quantity::Position);
            self.data.copy_within(offset..offset+n_bodies, step*n_bodies);
        }
        self.data.truncate((self.n_steps+1)*n_bodies);
        self.data.shrink_to_fit();
        self.data
    }
}
