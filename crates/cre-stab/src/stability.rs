//! Stability boundaries in the Crocco (n, τ) plane.

use std::f64::consts::PI;

use cre_core::{CreError, ErrorInfo, StabilitySweepResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::damping::CombustionGas;

/// Upper bound of the critical interaction index.
pub const N_CRIT_MAX: f64 = 20.0;

/// Environment labels of [`stability_boundary_sweep`] rows.
pub const SWEEP_ENVIRONMENTS: [&str; 2] = ["earth_sl", "lunar_vacuum"];

fn stability_error(code: &str, message: &str) -> CreError {
    CreError::InvalidInput(ErrorInfo::new(code, message))
}

/// Grid settings of a stability sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepOptions {
    /// Number of τ samples, endpoints included.
    pub n_tau: usize,
    /// Coupling gain G.
    pub g_coupling: f64,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            n_tau: 500,
            g_coupling: 1.0,
        }
    }
}

/// Critical interaction index `α / (ω |sin ωτ| G)` at a single lag, clipped
/// to `[0, 20]`.
///
/// A vanishing denominator maps to the bound the quotient diverges towards:
/// `20` for non-negative absorption and `0` for negative absorption. The
/// result is always finite.
pub fn n_critical_at(tau: f64, alpha_total: f64, omega: f64, g_coupling: f64) -> f64 {
    let denominator = omega * (omega * tau).sin().abs() * g_coupling;
    let raw = alpha_total / denominator;
    if raw.is_nan() || denominator == 0.0 {
        trace!(tau, omega, alpha_total, "n_crit clipped at singularity");
        return if alpha_total < 0.0 { 0.0 } else { N_CRIT_MAX };
    }
    raw.clamp(0.0, N_CRIT_MAX)
}

/// [`n_critical_at`] over a set of lags.
pub fn n_critical(tau: &[f64], alpha_total: f64, omega: f64, g_coupling: f64) -> Vec<f64> {
    tau.iter()
        .map(|&t| n_critical_at(t, alpha_total, omega, g_coupling))
        .collect()
}

/// `n_tau` evenly spaced points from `lo` to `hi` with exact endpoints.
pub fn linspace(lo: f64, hi: f64, n_tau: usize) -> Vec<f64> {
    match n_tau {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let last = n_tau - 1;
            (0..n_tau)
                .map(|i| {
                    if i == last {
                        hi
                    } else {
                        lo + (hi - lo) * i as f64 / last as f64
                    }
                })
                .collect()
        }
    }
}

/// Sweeps `n_crit` over a τ grid for every frequency in Earth and vacuum.
///
/// The result is indexed `n_crit[env][freq][tau]` with environments
/// `["earth_sl", "lunar_vacuum"]`. Rows are evaluated in parallel.
pub fn stability_boundary_sweep(
    tau_range: (f64, f64),
    frequencies: &[f64],
    alpha_earth: f64,
    alpha_vacuum: f64,
    opts: &SweepOptions,
) -> Result<StabilitySweepResult, CreError> {
    let (tau_min, tau_max) = tau_range;
    if !(tau_min.is_finite() && tau_max.is_finite()) || tau_max < tau_min {
        return Err(CreError::InvalidInput(
            ErrorInfo::new("sweep_tau_range", "tau range must be finite and ordered")
                .with_context("tau_min", tau_min)
                .with_context("tau_max", tau_max),
        ));
    }
    if opts.n_tau == 0 {
        return Err(stability_error("sweep_n_tau", "n_tau must be at least one"));
    }
    if frequencies.is_empty() {
        return Err(stability_error("sweep_frequencies", "at least one frequency is required"));
    }
    if let Some(bad) = frequencies.iter().find(|f| !f.is_finite()) {
        return Err(CreError::InvalidInput(
            ErrorInfo::new("sweep_frequencies", "frequencies must be finite")
                .with_context("frequency", bad),
        ));
    }
    debug!(
        n_tau = opts.n_tau,
        frequencies = frequencies.len(),
        tau_min,
        tau_max,
        "stability boundary sweep"
    );

    let tau = linspace(tau_min, tau_max, opts.n_tau);
    let alphas = [alpha_earth, alpha_vacuum];
    let jobs: Vec<(usize, usize)> = (0..alphas.len())
        .flat_map(|env| (0..frequencies.len()).map(move |freq| (env, freq)))
        .collect();

    let mut rows: Vec<(usize, Vec<f64>)> = jobs
        .par_iter()
        .enumerate()
        .map(|(index, &(env, freq))| {
            let omega = 2.0 * PI * frequencies[freq];
            (index, n_critical(&tau, alphas[env], omega, opts.g_coupling))
        })
        .collect();
    rows.sort_by_key(|(index, _)| *index);

    let mut n_crit = vec![Vec::with_capacity(frequencies.len()); alphas.len()];
    for ((env, _), (_, row)) in jobs.iter().zip(rows) {
        n_crit[*env].push(row);
    }

    Ok(StabilitySweepResult::new(
        tau,
        n_crit,
        frequencies.to_vec(),
        SWEEP_ENVIRONMENTS.iter().map(|name| name.to_string()).collect(),
    ))
}

/// Whether the operating point lies below the stability boundary.
pub fn is_stable(n: f64, tau: f64, alpha_total: f64, omega: f64, g_coupling: f64) -> bool {
    n < n_critical_at(tau, alpha_total, omega, g_coupling)
}

/// Distance `n_crit − n`; positive means stable.
pub fn stability_margin(n: f64, tau: f64, alpha_total: f64, omega: f64, g_coupling: f64) -> f64 {
    n_critical_at(tau, alpha_total, omega, g_coupling) - n
}

/// Minimum damping ratio for stability at driving frequency `omega`.
///
/// `n ω |sin(ωτ)| / (2 ω_n²) · (γ−1)/γ · p̄/ρc²`, exactly zero when
/// `sin(ωτ) = 0`.
pub fn zeta_minimum(
    n: f64,
    omega: f64,
    tau: f64,
    omega_n: f64,
    gas: &CombustionGas,
) -> Result<f64, CreError> {
    if !(omega_n.is_finite() && omega_n > 0.0) {
        return Err(CreError::InvalidInput(
            ErrorInfo::new("zeta_mode_frequency", "mode frequency must be strictly positive")
                .with_context("omega_n", omega_n),
        ));
    }
    let sin_term = (omega * tau).sin().abs();
    if sin_term == 0.0 {
        return Ok(0.0);
    }
    Ok(n * omega * sin_term / (2.0 * omega_n * omega_n) * gas.gain())
}
