//! # 폰 미제스 샘플러
//!
//! Three regimes keyed on the concentration `κ`:
//!
//! * `κ < 1e-8`: uniform on the circle,
//! * `1e-8 <= κ <= 1e6`: Best & Fisher (1979) wrapped-Cauchy envelope with a
//!   squeeze test,
//! * `κ > 1e6`: wrapped normal with variance `1/κ`.
//!
//! The mean direction is added in every regime and the result wrapped to
//! `[-π, π)`. A NaN concentration yields NaN.

use ndarray::Array1;
use std::f64::consts::PI;
use tracing::{debug, warn};

use crate::config::SamplerConfig;
use crate::error::{CddmError, CddmResult};
use crate::ops::utils::wrap_angle;
use crate::random::normal::StandardNormal;
use crate::random::uniform::UniformSource;

pub const NEAR_UNIFORM_KAPPA: f64 = 1e-8;
pub const WRAPPED_NORMAL_KAPPA: f64 = 1e6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    Undefined,
    NearUniform,
    BestFisher,
    WrappedNormal,
}

impl Regime {
    pub fn for_kappa(kappa: f64) -> Self {
        if kappa.is_nan() {
            Regime::Undefined
        } else if kappa < NEAR_UNIFORM_KAPPA {
            Regime::NearUniform
        } else if kappa <= WRAPPED_NORMAL_KAPPA {
            Regime::BestFisher
        } else {
            Regime::WrappedNormal
        }
    }
}

/// Von Mises distribution with mean direction `mu` and concentration `kappa`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VonMises {
    mu: f64,
    kappa: f64,
}

impl VonMises {
    /// Fails for `kappa < 0`. A NaN `kappa` is accepted and samples as NaN.
    pub fn new(mu: f64, kappa: f64) -> CddmResult<Self> {
        if kappa < 0.0 {
            return Err(CddmError::InvalidParameter { name: "kappa", value: kappa });
        }
        Ok(Self { mu, kappa })
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn kappa(&self) -> f64 {
        self.kappa
    }

    pub fn regime(&self) -> Regime {
        Regime::for_kappa(self.kappa)
    }
}

/// Envelope parameter `s = (1 + ρ²) / (2ρ)` of the Best–Fisher sampler.
///
/// `ρ` is computed in a cancellation-free form of
/// `(r - sqrt(2r)) / (2κ)` with `r = 1 + sqrt(1 + 4κ²)`; the textbook form
/// loses every digit below `κ ≈ 1e-7`.
fn best_fisher_envelope(kappa: f64) -> f64 {
    let q = (1.0 + 4.0 * kappa * kappa).sqrt();
    let r = 1.0 + q;
    let rho = 2.0 * kappa * r / ((q + 1.0) * (r + (2.0 * r).sqrt()));
    (1.0 + rho * rho) / (2.0 * rho)
}

/// A von Mises draw stream: owns the normal generator used by the
/// wrapped-normal regime.
#[derive(Debug, Clone, Default)]
pub struct VonMisesSampler {
    normal: StandardNormal,
    config: SamplerConfig,
}

impl VonMisesSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SamplerConfig) -> CddmResult<Self> {
        config.validate()?;
        Ok(Self {
            normal: StandardNormal::new(),
            config,
        })
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    pub fn sample<U: UniformSource + ?Sized>(
        &mut self,
        dist: &VonMises,
        rng: &mut U,
    ) -> CddmResult<f64> {
        let envelope = match dist.regime() {
            Regime::BestFisher => best_fisher_envelope(dist.kappa),
            _ => f64::NAN,
        };
        self.draw(dist, envelope, rng)
    }

    /// `n` independent draws from `dist`.
    pub fn sample_n<U: UniformSource + ?Sized>(
        &mut self,
        dist: &VonMises,
        n: usize,
        rng: &mut U,
    ) -> CddmResult<Array1<f64>> {
        let regime = dist.regime();
        debug!(n, mu = dist.mu, kappa = dist.kappa, ?regime, "sampling von Mises batch");

        if regime == Regime::Undefined {
            return Ok(Array1::from_elem(n, f64::NAN));
        }
        let envelope = match regime {
            Regime::BestFisher => best_fisher_envelope(dist.kappa),
            _ => f64::NAN,
        };
        let mut out = Array1::zeros(n);
        for x in out.iter_mut() {
            *x = self.draw(dist, envelope, rng)?;
        }
        Ok(out)
    }

    fn draw<U: UniformSource + ?Sized>(
        &mut self,
        dist: &VonMises,
        envelope: f64,
        rng: &mut U,
    ) -> CddmResult<f64> {
        let offset = match dist.regime() {
            Regime::Undefined => return Ok(f64::NAN),
            Regime::NearUniform => PI * (2.0 * rng.next_uniform() - 1.0),
            Regime::BestFisher => self.best_fisher(dist.kappa, envelope, rng)?,
            Regime::WrappedNormal => (1.0 / dist.kappa).sqrt() * self.normal.sample(rng),
        };
        Ok(wrap_angle(offset + dist.mu))
    }

    /// One accepted Best–Fisher angle around zero.
    fn best_fisher<U: UniformSource + ?Sized>(
        &self,
        kappa: f64,
        s: f64,
        rng: &mut U,
    ) -> CddmResult<f64> {
        let limit = self.config.max_rejection_iterations;

        for _ in 0..limit {
            let z = (PI * rng.next_uniform()).cos();
            let w = (1.0 + s * z) / (s + z);
            let y = kappa * (s - w);
            let v = rng.next_uniform();

            // squeeze first, exact test only when it fails
            if y * (2.0 - y) - v >= 0.0 || (y / v).ln() + 1.0 - y >= 0.0 {
                let magnitude = w.clamp(-1.0, 1.0).acos();
                return Ok(if rng.next_uniform() < 0.5 { -magnitude } else { magnitude });
            }
        }

        warn!(kappa, limit, "von Mises rejection loop hit its iteration cap");
        Err(CddmError::RejectionLimit { limit })
    }
}

/// One draw from von Mises(`mu`, `kappa`) on a fresh draw stream.
pub fn sample_von_mises<U: UniformSource + ?Sized>(
    mu: f64,
    kappa: f64,
    rng: &mut U,
) -> CddmResult<f64> {
    let dist = VonMises::new(mu, kappa)?;
    VonMisesSampler::new().sample(&dist, rng)
}

/// `n` draws from von Mises(`mu`, `kappa`) sharing one draw stream.
pub fn sample_von_mises_n<U: UniformSource + ?Sized>(
    n: usize,
    mu: f64,
    kappa: f64,
    rng: &mut U,
) -> CddmResult<Array1<f64>> {
    let dist = VonMises::new(mu, kappa)?;
    VonMisesSampler::new().sample_n(&dist, n, rng)
}
