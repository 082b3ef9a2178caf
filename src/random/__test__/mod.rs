//! 샘플러 통계 검증

use crate::config::{SamplerConfig, SimulationConfig};
use crate::error::CddmError;
use crate::ops::types::PolarParams;
use crate::ops::utils::{dispersion_about, wrap_angle, CircularSummary};
use crate::random::diffusion::DiffusionSimulator;
use crate::random::von_mises::{
    sample_von_mises, sample_von_mises_n, Regime, VonMises, VonMisesSampler,
};
use approx::assert_abs_diff_eq;
use ndarray::Array1;
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::PI;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Kolmogorov–Smirnov distance between a sample and Uniform[-π, π).
fn ks_uniform_circle(samples: &Array1<f64>) -> f64 {
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len() as f64;
    sorted
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let cdf = (x + PI) / (2.0 * PI);
            let above = (i as f64 + 1.0) / n - cdf;
            let below = cdf - i as f64 / n;
            above.max(below)
        })
        .fold(0.0, f64::max)
}

/// I1(κ) / I0(κ) from the power series; fine for κ up to ~10.
fn bessel_ratio(kappa: f64) -> f64 {
    let x = 0.25 * kappa * kappa;
    let (mut i0, mut i1) = (0.0, 0.0);
    let mut term = 1.0;
    for m in 0..60 {
        let m = m as f64;
        if m > 0.0 {
            term *= x / (m * m);
        }
        i0 += term;
        i1 += term * 0.5 * kappa / (m + 1.0);
    }
    i1 / i0
}

#[test]
fn test_uniform_regime_passes_ks() -> anyhow::Result<()> {
    let n = 100_000;
    // p = 0.01 임계값 1.628 / sqrt(n)
    let critical = 1.628 / (n as f64).sqrt();
    let mut rng = StdRng::seed_from_u64(17);
    let samples = sample_von_mises_n(n, 0.0, 0.0, &mut rng)?;
    let d = ks_uniform_circle(&samples);
    assert!(d < critical, "D = {} >= {}", d, critical);
    Ok(())
}

#[test]
fn test_large_kappa_circular_variance() -> anyhow::Result<()> {
    let kappa = 1e7;
    let mu = 0.75;
    let mut rng = StdRng::seed_from_u64(8);
    let samples = sample_von_mises_n(100_000, mu, kappa, &mut rng)?;
    let dispersion = dispersion_about(&samples.view(), mu);
    let expected = 1.0 / (2.0 * kappa);
    assert!((dispersion - expected).abs() < 0.05 * expected, "{} vs {}", dispersion, expected);
    Ok(())
}

#[test]
fn test_high_kappa_rejection_dispersion() -> anyhow::Result<()> {
    // 1 - I1/I0 ≈ 1/(2κ) + 1/(8κ²), 상대 표준오차 ≈ sqrt(2/n)
    let mu = -2.2;
    let mut rng = StdRng::seed_from_u64(31);
    for &kappa in &[1e3f64, 1e5, 1e6] {
        assert_eq!(VonMises::new(mu, kappa)?.regime(), Regime::BestFisher);
        let samples = sample_von_mises_n(50_000, mu, kappa, &mut rng)?;
        let dispersion = dispersion_about(&samples.view(), mu);
        let expected = 0.5 / kappa + 0.125 / (kappa * kappa);
        assert!(
            (dispersion - expected).abs() < 0.05 * expected,
            "kappa={}: {} vs {}",
            kappa,
            dispersion,
            expected
        );
    }
    Ok(())
}

#[test]
fn test_moderate_kappa_moments() -> anyhow::Result<()> {
    let kappa = 2.0;
    let mu = -2.5;
    let mut rng = StdRng::seed_from_u64(31);
    let samples = sample_von_mises_n(50_000, mu, kappa, &mut rng)?;
    let summary = CircularSummary::from_angles(&samples.view());
    assert_abs_diff_eq!(summary.resultant_length, bessel_ratio(kappa), epsilon = 0.015);
    assert_abs_diff_eq!(wrap_angle(summary.mean_direction - mu), 0.0, epsilon = 0.03);
    Ok(())
}

#[test]
fn test_tiny_kappa_in_rejection_regime() -> anyhow::Result<()> {
    // κ = 1e-8 은 Best–Fisher 경로이지만 사실상 균일
    let mut rng = StdRng::seed_from_u64(12);
    let samples = sample_von_mises_n(20_000, 0.0, 1e-8, &mut rng)?;
    assert!(samples.iter().all(|x| x.is_finite()));
    let summary = CircularSummary::from_angles(&samples.view());
    assert!(summary.resultant_length < 0.03);
    Ok(())
}

#[test]
fn test_samples_stay_wrapped() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(77);
    for &(mu, kappa) in &[(3.0, 0.0), (-3.0, 0.5), (3.1, 40.0), (PI, 5e6), (12.0, 1.0)] {
        let samples = sample_von_mises_n(2_000, mu, kappa, &mut rng)?;
        assert!(samples.iter().all(|x| (-PI..=PI).contains(x)), "mu={}, kappa={}", mu, kappa);
    }
    Ok(())
}

#[test]
fn test_mean_offset_applied_near_uniform() -> anyhow::Result<()> {
    let mut a = StdRng::seed_from_u64(40);
    let mut b = StdRng::seed_from_u64(40);
    for _ in 0..100 {
        let base = sample_von_mises(0.0, 0.0, &mut a)?;
        let shifted = sample_von_mises(1.0, 0.0, &mut b)?;
        assert_abs_diff_eq!(shifted, wrap_angle(base + 1.0), epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn test_nan_kappa_propagates() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(sample_von_mises(0.3, f64::NAN, &mut rng)?.is_nan());
    let batch = sample_von_mises_n(25, 0.3, f64::NAN, &mut rng)?;
    assert_eq!(batch.len(), 25);
    assert!(batch.iter().all(|x| x.is_nan()));
    Ok(())
}

#[test]
fn test_negative_kappa_fails() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(matches!(
        sample_von_mises(0.0, -0.1, &mut rng),
        Err(CddmError::InvalidParameter { name: "kappa", .. })
    ));
    assert!(sample_von_mises_n(3, 0.0, -2.0, &mut rng).is_err());
}

#[test]
fn test_rejection_cap() {
    init_tracing();
    // 항상 1 - 2^-53 을 내는 소스: Z = -1, Y = κ(s + 1) 이라 매번 기각
    let mut rng = StepRng::new(u64::MAX, 0);
    let config = SamplerConfig { max_rejection_iterations: 16 };
    let mut sampler = VonMisesSampler::with_config(config).unwrap();
    let dist = VonMises::new(0.0, 1.0).unwrap();
    assert_eq!(sampler.sample(&dist, &mut rng), Err(CddmError::RejectionLimit { limit: 16 }));
}

#[test]
fn test_zero_drift_mean_response_time() -> anyhow::Result<()> {
    init_tracing();
    // E[T] = a²/2, Var[T] = a⁴/8
    let mut rng = StdRng::seed_from_u64(5);
    let config = SimulationConfig { step_size: 2e-4, ..Default::default() };
    let mut simulator = DiffusionSimulator::with_config(config)?;
    let params = PolarParams::new(0.0, 0.0, 1.0, 0.2);
    let (_, times) = simulator.simulate_n(&params, 2_000, &mut rng)?;
    let mean = times.mean().unwrap_or(f64::NAN);
    assert_abs_diff_eq!(mean, 0.2 + 0.5, epsilon = 0.05);
    Ok(())
}

#[test]
fn test_default_step_mean_response_time() -> anyhow::Result<()> {
    // 기본 dt = 1e-3 에서도 E[T] = a²/2; SE = sqrt(1/8 / 4000) ≈ 0.0056
    let mut rng = StdRng::seed_from_u64(9);
    let mut simulator = DiffusionSimulator::new();
    assert_eq!(simulator.config().step_size, 1e-3);
    let params = PolarParams::new(0.0, 0.0, 1.0, 0.0);
    let (_, times) = simulator.simulate_n(&params, 4_000, &mut rng)?;
    let mean = times.mean().unwrap_or(f64::NAN);
    assert_abs_diff_eq!(mean, 0.5, epsilon = 0.018);
    Ok(())
}

#[test]
fn test_simulated_choices_follow_von_mises_marginal() -> anyhow::Result<()> {
    // 선택 주변분포 = von Mises(θ, ℓa)
    let mut rng = StdRng::seed_from_u64(6);
    let config = SimulationConfig { step_size: 5e-4, ..Default::default() };
    let mut simulator = DiffusionSimulator::with_config(config)?;
    let params = PolarParams::new(3.0, 1.0, 1.0, 0.0);
    let (choices, _) = simulator.simulate_n(&params, 1_000, &mut rng)?;
    let simulated = CircularSummary::from_angles(&choices.view());

    let direct = sample_von_mises_n(20_000, 1.0, 3.0, &mut rng)?;
    let direct = CircularSummary::from_angles(&direct.view());

    assert_abs_diff_eq!(simulated.mean_direction, 1.0, epsilon = 0.1);
    assert_abs_diff_eq!(simulated.resultant_length, bessel_ratio(3.0), epsilon = 0.05);
    assert_abs_diff_eq!(direct.resultant_length, bessel_ratio(3.0), epsilon = 0.02);
    Ok(())
}
