use ndarray::{Array1, ArrayView1};
use rayon::prelude::*;
use tracing::debug;

use crate::error::{CddmError, CddmResult};
use crate::ops::density::log_density_kernel;
use crate::ops::params::Parameterization;

/// Log-density of each `(choices[i], times[i])` pair under one parameter set.
/// Evaluated in parallel; the parameters are validated once up front.
pub fn log_density_batch<P: Parameterization + ?Sized>(
    choices: &ArrayView1<f64>,
    times: &ArrayView1<f64>,
    params: &P,
) -> CddmResult<Array1<f64>> {
    if choices.len() != times.len() {
        return Err(CddmError::ShapeMismatch {
            choices: choices.len(),
            times: times.len(),
        });
    }
    let p = params.canonical()?;

    let values: Vec<f64> = (0..choices.len())
        .into_par_iter()
        .map(|i| {
            log_density_kernel(
                choices[i],
                times[i],
                p.drift_length,
                p.drift_angle,
                p.boundary,
                p.non_decision_time,
            )
        })
        .collect();

    Ok(Array1::from_vec(values))
}

/// Total log-likelihood of a data set; `-inf` as soon as one observation is
/// impossible under `params`.
pub fn log_likelihood<P: Parameterization + ?Sized>(
    choices: &ArrayView1<f64>,
    times: &ArrayView1<f64>,
    params: &P,
) -> CddmResult<f64> {
    let densities = log_density_batch(choices, times, params)?;
    let total = densities.sum();
    if total == f64::NEG_INFINITY {
        let impossible = densities.iter().filter(|d| **d == f64::NEG_INFINITY).count();
        debug!(impossible, n = densities.len(), "log-likelihood is -inf");
    }
    Ok(total)
}
