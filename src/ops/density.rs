//! Series evaluator for the circular drift-diffusion log-density.
//!
//! By Girsanov, the joint density of exit angle `c` and decision time `Δt`
//! factors into the zero-drift exit-time density and a drift tilt:
//!
//! ```text
//! p(c, t) = 1/(2π a²) · S(Δt/a²) · exp(ℓ a cos(c - θ) - ℓ² Δt / 2)
//! ```
//!
//! where `S` is the truncated Bessel series from [`crate::ops::tables`].

use tracing::trace;

use crate::ops::tables::{asymptotic_weight_magnitude, asymptotic_zero, COEFFICIENTS, SERIES_TERMS};
use crate::ops::utils::LN_2PI;

/// Smallest `Δt / a²` at which the 50-term series is accurate to 1e-6
/// (absolute, in `S`). Below it the true density is under `e^-200` of its
/// mode, while the truncated series can swing negative.
pub const SERIES_ACCURACY_THRESHOLD: f64 = 0.002;

const MAX_TAIL_TERMS: usize = 1_000_000;

/// Truncated kernel `S(s) = Σ w_i exp(-j_i² s / 2)` at scaled time
/// `s = Δt / a²`, summed in ascending order.
pub fn series_sum(scaled_time: f64) -> f64 {
    let half = -0.5 * scaled_time;
    let mut sum = 0.0;
    for term in COEFFICIENTS.terms() {
        sum += term.weight * (term.zero_squared * half).exp();
    }
    sum
}

/// Upper bound on `|S(s) - S_50(s)|`, the contribution of every omitted term.
///
/// Sums the asymptotic envelope `|w_k| exp(-j_k² s / 2)` from the 51st zero
/// until terms stop mattering. Infinite for `s <= 0`, where the series
/// diverges.
pub fn truncation_error_bound(scaled_time: f64) -> f64 {
    if !(scaled_time > 0.0) {
        return f64::INFINITY;
    }
    let mut bound = 0.0;
    let mut k = SERIES_TERMS + 1;
    loop {
        let zero = asymptotic_zero(k);
        let term = asymptotic_weight_magnitude(zero) * (-0.5 * zero * zero * scaled_time).exp();
        bound += term;
        if term <= 1e-3 * f64::EPSILON * bound {
            return bound;
        }
        if k >= MAX_TAIL_TERMS {
            return f64::INFINITY;
        }
        k += 1;
    }
}

/// Whether an observation's decision time is inside the documented
/// accuracy range of the truncated series. A non-positive boundary has no
/// series to speak of, so it is never accurate.
pub fn is_series_accurate(delta_t: f64, boundary: f64) -> bool {
    boundary > 0.0 && delta_t / (boundary * boundary) >= SERIES_ACCURACY_THRESHOLD
}

/// Zero-drift exit-time density `f0(Δt) = S(Δt/a²) / a²`.
pub fn first_passage_density(delta_t: f64, boundary: f64) -> f64 {
    if !(delta_t > 0.0) {
        return 0.0;
    }
    let inv_a2 = 1.0 / (boundary * boundary);
    series_sum(delta_t * inv_a2) * inv_a2
}

/// `ln p(choice, time | drift_length, drift_angle, boundary, non_decision_time)`.
///
/// Parameters are taken as already validated. Never returns NaN: every
/// degenerate case (`time <= non_decision_time`, zero boundary, a
/// non-positive series sum) comes back as `-inf`.
pub fn log_density_kernel(
    choice: f64,
    time: f64,
    drift_length: f64,
    drift_angle: f64,
    boundary: f64,
    non_decision_time: f64,
) -> f64 {
    let delta_t = time - non_decision_time;
    if !(delta_t > 0.0) {
        return f64::NEG_INFINITY;
    }

    let inv_a2 = 1.0 / (boundary * boundary);
    let scaled_time = delta_t * inv_a2;
    if scaled_time < SERIES_ACCURACY_THRESHOLD {
        trace!(delta_t, boundary, scaled_time, "decision time below series accuracy range");
    }
    let sum = series_sum(scaled_time);

    let log_pdf = -LN_2PI - 2.0 * boundary.ln()
        + drift_length * boundary * (choice - drift_angle).cos()
        - 0.5 * drift_length * drift_length * delta_t
        + sum.ln();

    if log_pdf.is_nan() {
        f64::NEG_INFINITY
    } else {
        log_pdf
    }
}
