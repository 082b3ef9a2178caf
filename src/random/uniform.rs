use rand::{Rng, RngCore};

/// Source of independent Uniform[0, 1) draws.
///
/// Every `rand` generator is one; seeding and sharing policy belong to the
/// caller.
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

impl<R: RngCore> UniformSource for R {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }
}
