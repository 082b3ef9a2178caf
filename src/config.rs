//! Sampler and simulator settings.
//!
//! Both structs deserialize with `#[serde(default)]`, so a partial document
//! only overrides the fields it names.

use serde::{Deserialize, Serialize};

use crate::error::{CddmError, CddmResult};

/// Von Mises rejection sampler settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Hard cap on Best–Fisher proposals per draw.
    /// The expected count is close to 1 for every concentration.
    pub max_rejection_iterations: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            max_rejection_iterations: 10_000,
        }
    }
}

impl SamplerConfig {
    pub fn validate(&self) -> CddmResult<()> {
        if self.max_rejection_iterations == 0 {
            return Err(CddmError::InvalidParameter {
                name: "max_rejection_iterations",
                value: 0.0,
            });
        }
        Ok(())
    }
}

/// Euler–Maruyama settings for the circular diffusion simulator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Time increment per step, in the same unit as response times.
    /// Range: `(0, inf)`, smaller is slower but less biased.
    pub step_size: f64,

    /// Steps after which a walk is abandoned with `StepLimit`.
    pub max_steps: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            step_size: 1e-3,
            max_steps: 10_000_000,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> CddmResult<()> {
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(CddmError::InvalidParameter {
                name: "step_size",
                value: self.step_size,
            });
        }
        if self.max_steps == 0 {
            return Err(CddmError::InvalidParameter {
                name: "max_steps",
                value: 0.0,
            });
        }
        Ok(())
    }
}
