//! Circular drift-diffusion model primitives.
//!
//! * [`ops`]: the series log-density of a (choice, response time) pair for a
//!   2-D Brownian motion with drift absorbed on a circle, under Cartesian or
//!   polar drift parameters, plus batched likelihoods.
//! * [`random`]: Box–Muller normals, a three-regime von Mises sampler and a
//!   random-walk simulator for the same process.
//!
//! Uniform randomness is injected: any `rand::RngCore` works. Nothing here
//! holds global state, and the library only emits `tracing` events without
//! installing a subscriber.

pub mod config;
pub mod error;
pub mod ops;
pub mod random;

pub use config::{SamplerConfig, SimulationConfig};
pub use error::{CddmError, CddmResult};
pub use ops::{
    cartesian_to_polar, density, log_density, log_density_batch, log_likelihood,
    polar_to_cartesian, CartesianParams, Observation, Parameterization, PolarParams,
};
pub use random::{
    sample_circular_diffusion, sample_von_mises, sample_von_mises_n, DiffusionSimulator,
    StandardNormal, UniformSource, VonMises, VonMisesSampler,
};
