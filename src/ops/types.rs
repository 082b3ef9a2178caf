use serde::{Deserialize, Serialize};

/// One absorbed walk: the exit angle and the exit time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Radians, read modulo 2π.
    pub choice: f64,
    /// Response time, including the non-decision time.
    pub time: f64,
}

impl Observation {
    pub fn new(choice: f64, time: f64) -> Self {
        Self { choice, time }
    }

    /// Support bounds as `([choice_lo, time_lo], [choice_hi, time_hi])`.
    pub fn support() -> ([f64; 2], [f64; 2]) {
        (
            [f64::NEG_INFINITY, 0.0],
            [f64::INFINITY, f64::INFINITY],
        )
    }

    /// Starting value handed to samplers that need one.
    pub fn typical() -> Self {
        Self::new(0.0, 0.5)
    }
}

/// Drift given as a vector `(drift_x, drift_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartesianParams {
    pub drift_x: f64,
    pub drift_y: f64,
    /// Radius of the absorbing circle.
    pub boundary: f64,
    pub non_decision_time: f64,
}

/// Drift given as a length and a direction. This is the form the series
/// evaluator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarParams {
    pub drift_length: f64,
    pub drift_angle: f64,
    /// Radius of the absorbing circle.
    pub boundary: f64,
    pub non_decision_time: f64,
}

impl CartesianParams {
    pub fn new(drift_x: f64, drift_y: f64, boundary: f64, non_decision_time: f64) -> Self {
        Self { drift_x, drift_y, boundary, non_decision_time }
    }
}

impl PolarParams {
    pub fn new(drift_length: f64, drift_angle: f64, boundary: f64, non_decision_time: f64) -> Self {
        Self { drift_length, drift_angle, boundary, non_decision_time }
    }
}
