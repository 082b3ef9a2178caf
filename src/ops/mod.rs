pub mod batch;
pub mod density;
pub mod params;
pub mod tables;
pub mod types;
pub mod utils;

pub use self::batch::{log_density_batch, log_likelihood};
pub use self::density::{
    first_passage_density, is_series_accurate, log_density_kernel, series_sum,
    truncation_error_bound, SERIES_ACCURACY_THRESHOLD,
};
pub use self::params::{
    cartesian_to_polar, density, log_density, polar_to_cartesian, Parameterization,
};
pub use self::tables::{CoefficientTable, SeriesTerm, COEFFICIENTS, SERIES_TERMS};
pub use self::types::{CartesianParams, Observation, PolarParams};
pub use self::utils::{dispersion_about, wrap_angle, CircularSummary, LN_2PI};
