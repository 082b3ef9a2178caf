//! Series coefficients for the first-passage kernel of a disk.
//!
//! The zero-drift exit-time density of a 2-D Brownian motion started at the
//! centre of a disk of radius `a` is
//!
//! ```text
//! f0(t) = 1/a² · Σ_k  j_k / J1(j_k) · exp(-j_k² t / (2a²))
//! ```
//!
//! where `j_k` are the positive zeros of J0. The table stores `j_k²` and the
//! weight `j_k / J1(j_k)` for the first 50 zeros, both to full f64
//! precision. Seven-digit weights leave ~1e-4 of rounding in the sum at
//! short times, far above the truncation error.

use std::f64::consts::PI;

/// Number of series terms kept.
pub const SERIES_TERMS: usize = 50;

/// One term of the kernel series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesTerm {
    /// Squared zero of J0.
    pub zero_squared: f64,
    /// `j / J1(j)` at that zero. Signs alternate, magnitudes grow like `j^1.5`.
    pub weight: f64,
}

/// Read-only table shared by every density evaluation.
#[derive(Debug)]
pub struct CoefficientTable {
    zeros_squared: [f64; SERIES_TERMS],
    weights: [f64; SERIES_TERMS],
}

pub static COEFFICIENTS: CoefficientTable = CoefficientTable {
    zeros_squared: J0_ZEROS_SQUARED,
    weights: J0_OVER_J1_WEIGHTS,
};

impl CoefficientTable {
    pub const fn len(&self) -> usize {
        SERIES_TERMS
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn term(&self, i: usize) -> Option<SeriesTerm> {
        if i >= SERIES_TERMS {
            return None;
        }
        Some(SeriesTerm {
            zero_squared: self.zeros_squared[i],
            weight: self.weights[i],
        })
    }

    /// Terms in ascending order, which is also the summation order.
    pub fn terms(&self) -> impl Iterator<Item = SeriesTerm> + '_ {
        self.zeros_squared
            .iter()
            .zip(self.weights.iter())
            .map(|(&zero_squared, &weight)| SeriesTerm { zero_squared, weight })
    }
}

/// McMahon's expansion of the `k`-th positive zero of J0 (1-based).
///
/// Accurate to better than 1e-6 from k = 3 on; used for bounding the
/// omitted tail of the series.
pub fn asymptotic_zero(k: usize) -> f64 {
    let beta = (k as f64 - 0.25) * PI;
    let eight_beta = 8.0 * beta;
    beta + 1.0 / eight_beta - 124.0 / (3.0 * eight_beta.powi(3))
        + 120_928.0 / (15.0 * eight_beta.powi(5))
        - 401_743_168.0 / (105.0 * eight_beta.powi(7))
}

/// Upper envelope of `|j / J1(j)|` at a zero of J0, from
/// `|J1(j)| ≈ sqrt(2 / (π j))`. Carries a 1% margin.
pub fn asymptotic_weight_magnitude(zero: f64) -> f64 {
    1.01 * (0.5 * PI * zero).sqrt() * zero
}

#[allow(clippy::excessive_precision)]
const J0_OVER_J1_WEIGHTS: [f64; SERIES_TERMS] = [
         4.6322587901351043,      -16.22288877336308,      31.879368549075294,     -50.725040837329019,      72.288431642145936,
        -96.261541517516417,      122.42245783129353,     -150.60134814383241,      180.66276678201082,      -212.4953956548349,
         246.00562383300508,      -281.1132937526325,      317.74875507108014,      -355.8507503227455,      395.36485259304342,
        -436.24228257294713,      478.43899411949722,     -521.91495466977806,      566.63357014851123,     -612.56121906392997,
          659.6668704934371,     -707.92176747781976,      757.29916208929609,     -807.77409180810382,      859.32318927618943,
        -911.92451928240347,      965.55743816276254,     -1020.2024718015002,      1075.8412091832647,     -1132.4562090366218,
         1190.0309175685554,     -1248.5495956510482,      1307.9972541074827,     -1368.3595959758228,         1429.6229648102,
        -1491.7742982323381,      1554.8010860665926,     -1618.6913324928943,      1683.4335217349643,     -1749.0165868701896,
         1815.4298814052038,     -1882.6631533096094,      1950.7065212410753,     -2019.5504527296026,      2089.1857441181335,
        -2159.6035020817707,       2230.795126569375,     -2302.7522950298012,      2375.4669478009958,     -2448.9312745539968,
];

#[allow(clippy::excessive_precision)]
const J0_ZEROS_SQUARED: [f64; SERIES_TERMS] = [
         5.7831859629467845,      30.471262343662086,      74.887006790695183,      139.04028442645985,      222.93230361763416,
         326.56335293232846,      449.93352851803553,      593.04286965595529,      755.89139478393296,      938.47911347569421,
         1140.8060310996449,      1362.8721508541045,      1604.6774747402315,      1866.2220040618529,      2147.5057396978441,
         2448.5286822580524,      2769.2908321763586,       3109.792189768249,      3470.0327552675585,      3850.0125288505703,
         4249.7315106522095,      4669.1897007771603,      5108.3870993076482,       5567.323706308982,      6045.9995218335641,
         6544.4145459238341,      7062.5687786144576,      7600.4622199339746,      8158.0948699060536,      8735.4667285504563,
         9332.5777958837868,      9949.4280719200778,      10586.017556671254,      11242.346250147502,      11918.414152357564,
         12614.221263308978,       13329.76758300827,      14065.053111461116,      14820.077848672467,      15594.841794646662,
         16389.344949387511,      17203.587312898377,      18037.568885182231,      18891.289666241713,      19764.749656079167,
         20657.948854696686,      21570.887262096141,      22503.564878279211,        23455.9817032474,      24428.137737002069,
];
