//! Random-walk simulator for the circular drift-diffusion process.
//!
//! Euler–Maruyama steps of size `dt` until the walk leaves the disk. The
//! exit point is placed where the last step crosses the circle, and the
//! exit time is interpolated along that step.
//!
//! Checking only the step end points misses paths that leave and come back
//! within one step, which biases exit times upward by `O(√dt)`. A step that
//! ends inside is therefore also absorbed with the probability that a
//! Brownian bridge between its end points touches the boundary, taken
//! against the tangent line at the circle (`exp(-2 d0 d1 / dt)` for
//! distances `d0`, `d1` to the boundary).

use ndarray::Array1;
use tracing::{trace, warn};

use crate::config::SimulationConfig;
use crate::error::{CddmError, CddmResult};
use crate::ops::params::{polar_to_cartesian, Parameterization};
use crate::ops::types::Observation;
use crate::random::normal::StandardNormal;
use crate::random::uniform::UniformSource;

/// Fraction `f` in `(0, 1]` at which `start + f * step` meets the circle of
/// squared radius `radius_sq`. `start` must be strictly inside.
fn crossing_fraction(start: (f64, f64), step: (f64, f64), radius_sq: f64) -> f64 {
    let qa = step.0 * step.0 + step.1 * step.1;
    let qb = 2.0 * (start.0 * step.0 + start.1 * step.1);
    let qc = start.0 * start.0 + start.1 * start.1 - radius_sq;
    let root = (qb * qb - 4.0 * qa * qc).sqrt();
    // qc < 0, so the positive root is the one we want
    let f = if qb >= 0.0 {
        -2.0 * qc / (qb + root)
    } else {
        (root - qb) / (2.0 * qa)
    };
    f.clamp(0.0, 1.0)
}

/// Chance that a Brownian bridge of duration `dt` between two interior
/// points at distances `d0`, `d1` from the boundary reaches it.
fn bridge_crossing_probability(d0: f64, d1: f64, dt: f64) -> f64 {
    if d0 <= 0.0 || d1 <= 0.0 {
        return 1.0;
    }
    (-2.0 * d0 * d1 / dt).exp()
}

#[derive(Debug, Clone, Default)]
pub struct DiffusionSimulator {
    normal: StandardNormal,
    config: SimulationConfig,
}

impl DiffusionSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SimulationConfig) -> CddmResult<Self> {
        config.validate()?;
        Ok(Self {
            normal: StandardNormal::new(),
            config,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// One `(choice, time)` draw. The choice comes from `atan2`, so it lies
    /// in `(-π, π]`; a zero boundary returns the drift angle unchanged.
    pub fn simulate<P, U>(&mut self, params: &P, rng: &mut U) -> CddmResult<Observation>
    where
        P: Parameterization + ?Sized,
        U: UniformSource + ?Sized,
    {
        let p = params.canonical()?;
        if p.boundary == 0.0 {
            return Ok(Observation::new(p.drift_angle, p.non_decision_time));
        }

        let (mu_x, mu_y) = polar_to_cartesian(p.drift_length, p.drift_angle);
        let dt = self.config.step_size;
        let sd = dt.sqrt();
        let radius_sq = p.boundary * p.boundary;

        let (mut x, mut y) = (0.0, 0.0);
        for step in 0..self.config.max_steps {
            let dx = mu_x * dt + sd * self.normal.sample(rng);
            let dy = mu_y * dt + sd * self.normal.sample(rng);
            let (nx, ny) = (x + dx, y + dy);

            let r1_sq = nx * nx + ny * ny;
            if r1_sq >= radius_sq {
                let f = crossing_fraction((x, y), (dx, dy), radius_sq);
                let (ex, ey) = (x + f * dx, y + f * dy);
                let decision_time = (step as f64 + f) * dt;
                trace!(step, decision_time, "walk absorbed");
                return Ok(Observation::new(
                    ey.atan2(ex),
                    decision_time + p.non_decision_time,
                ));
            }

            let d0 = p.boundary - x.hypot(y);
            let d1 = p.boundary - r1_sq.sqrt();
            let hit = bridge_crossing_probability(d0, d1, dt);
            // far from the circle the chance underflows to zero; skip the draw
            if hit > 0.0 && rng.next_uniform() < hit {
                let (mx, my) = (x + 0.5 * dx, y + 0.5 * dy);
                let decision_time = (step as f64 + 0.5) * dt;
                trace!(step, decision_time, "walk absorbed between steps");
                return Ok(Observation::new(
                    my.atan2(mx),
                    decision_time + p.non_decision_time,
                ));
            }
            x = nx;
            y = ny;
        }

        let limit = self.config.max_steps;
        warn!(limit, boundary = p.boundary, drift_length = p.drift_length, "diffusion walk hit its step cap");
        Err(CddmError::StepLimit { limit })
    }

    /// `n` independent draws as `(choices, times)`.
    pub fn simulate_n<P, U>(
        &mut self,
        params: &P,
        n: usize,
        rng: &mut U,
    ) -> CddmResult<(Array1<f64>, Array1<f64>)>
    where
        P: Parameterization + ?Sized,
        U: UniformSource + ?Sized,
    {
        let mut choices = Array1::zeros(n);
        let mut times = Array1::zeros(n);
        for i in 0..n {
            let observation = self.simulate(params, rng)?;
            choices[i] = observation.choice;
            times[i] = observation.time;
        }
        Ok((choices, times))
    }
}

/// One `(choice, time)` draw with the default step size.
pub fn sample_circular_diffusion<P, U>(params: &P, rng: &mut U) -> CddmResult<Observation>
where
    P: Parameterization + ?Sized,
    U: UniformSource + ?Sized,
{
    DiffusionSimulator::new().simulate(params, rng)
}
