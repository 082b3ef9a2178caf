use std::f64::consts::TAU;

use crate::random::uniform::UniformSource;

/// Draws of `u1` at or below this are redrawn to keep `ln(u1)` finite.
pub const MIN_RADIUS_UNIFORM: f64 = 1e-7;

/// Box–Muller standard normal generator.
///
/// Each transform yields two variates; the second is cached and returned by
/// the next call. One instance belongs to one draw stream: share it across
/// threads only behind a lock, or give each stream its own.
#[derive(Debug, Clone, Default)]
pub struct StandardNormal {
    cached: Option<f64>,
}

impl StandardNormal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample<U: UniformSource + ?Sized>(&mut self, rng: &mut U) -> f64 {
        if let Some(z1) = self.cached.take() {
            return z1;
        }

        let (u1, u2) = loop {
            let u1 = rng.next_uniform();
            let u2 = rng.next_uniform();
            if u1 > MIN_RADIUS_UNIFORM {
                break (u1, u2);
            }
        };

        let radius = (-2.0 * u1.ln()).sqrt();
        let (sin, cos) = (TAU * u2).sin_cos();
        self.cached = Some(radius * sin);
        radius * cos
    }

    pub fn has_cached(&self) -> bool {
        self.cached.is_some()
    }

    /// Drops a pending cached variate, e.g. after reseeding the source.
    pub fn reset(&mut self) {
        self.cached = None;
    }
}
