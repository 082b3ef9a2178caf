pub mod diffusion;
pub mod normal;
pub mod uniform;
pub mod von_mises;

pub use self::diffusion::{sample_circular_diffusion, DiffusionSimulator};
pub use self::normal::StandardNormal;
pub use self::uniform::UniformSource;
pub use self::von_mises::{
    sample_von_mises, sample_von_mises_n, Regime, VonMises, VonMisesSampler,
};

#[cfg(test)]
mod __test__;
