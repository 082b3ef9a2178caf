//! Cartesian ↔ polar drift conversion.
//!
//! Both parameter forms validate and reduce to `PolarParams`; density and
//! simulation code only ever sees the polar form.

use crate::error::{ensure_non_negative, CddmResult};
use crate::ops::density::log_density_kernel;
use crate::ops::types::{CartesianParams, Observation, PolarParams};

pub fn polar_to_cartesian(drift_length: f64, drift_angle: f64) -> (f64, f64) {
    let (sin, cos) = drift_angle.sin_cos();
    (drift_length * cos, drift_length * sin)
}

pub fn cartesian_to_polar(drift_x: f64, drift_y: f64) -> (f64, f64) {
    (drift_x.hypot(drift_y), drift_y.atan2(drift_x))
}

/// A parameter form the evaluator can consume after validation.
pub trait Parameterization {
    /// Validated canonical parameters. Fails with `InvalidParameter` for a
    /// negative (or NaN) boundary, non-decision time or drift length.
    fn canonical(&self) -> CddmResult<PolarParams>;
}

impl Parameterization for PolarParams {
    fn canonical(&self) -> CddmResult<PolarParams> {
        ensure_non_negative("drift_length", self.drift_length)?;
        ensure_non_negative("boundary", self.boundary)?;
        ensure_non_negative("non_decision_time", self.non_decision_time)?;
        Ok(*self)
    }
}

impl Parameterization for CartesianParams {
    fn canonical(&self) -> CddmResult<PolarParams> {
        ensure_non_negative("boundary", self.boundary)?;
        ensure_non_negative("non_decision_time", self.non_decision_time)?;
        let (drift_length, drift_angle) = cartesian_to_polar(self.drift_x, self.drift_y);
        Ok(PolarParams {
            drift_length,
            drift_angle,
            boundary: self.boundary,
            non_decision_time: self.non_decision_time,
        })
    }
}

impl From<PolarParams> for CartesianParams {
    fn from(p: PolarParams) -> Self {
        let (drift_x, drift_y) = polar_to_cartesian(p.drift_length, p.drift_angle);
        CartesianParams::new(drift_x, drift_y, p.boundary, p.non_decision_time)
    }
}

impl From<CartesianParams> for PolarParams {
    fn from(p: CartesianParams) -> Self {
        let (drift_length, drift_angle) = cartesian_to_polar(p.drift_x, p.drift_y);
        PolarParams::new(drift_length, drift_angle, p.boundary, p.non_decision_time)
    }
}

/// Log-density of `observation` under either parameter form.
///
/// Returns `-inf` for impossible observations (time at or before the
/// non-decision time, zero boundary, cancelled series).
pub fn log_density<P: Parameterization + ?Sized>(
    observation: Observation,
    params: &P,
) -> CddmResult<f64> {
    let p = params.canonical()?;
    Ok(log_density_kernel(
        observation.choice,
        observation.time,
        p.drift_length,
        p.drift_angle,
        p.boundary,
        p.non_decision_time,
    ))
}

pub fn density<P: Parameterization + ?Sized>(observation: Observation, params: &P) -> CddmResult<f64> {
    log_density(observation, params).map(f64::exp)
}

impl PolarParams {
    pub fn log_density(&self, observation: Observation) -> CddmResult<f64> {
        log_density(observation, self)
    }
}

impl CartesianParams {
    pub fn log_density(&self, observation: Observation) -> CddmResult<f64> {
        log_density(observation, self)
    }
}
