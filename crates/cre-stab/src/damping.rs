//! Per-mode damping of a ring and the damping a mode needs to stay stable.
//!
//! Every mode shares the internal, nozzle, feed and atmospheric damping.
//! Inter-engine coupling adds `ζ_cmax (1 − cos(2πn/N))` on top, which is
//! zero for the breathing mode `n = 0`: in-phase oscillation gets no help
//! from its neighbours.

use cre_core::errors::require_engine_count;
use cre_core::{CreError, DampingParameters, DampingSpectrumResult, Environment, ErrorInfo};
use cre_phys::mode_shape_factor;
use serde::{Deserialize, Serialize};
use tracing::debug;

fn default_gamma() -> f64 {
    1.25
}

fn default_pressure_ratio() -> f64 {
    0.5
}

/// Thermodynamic state entering the damping threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombustionGas {
    /// Ratio of specific heats.
    #[serde(default = "default_gamma")]
    pub gamma: f64,
    /// Normalised mean pressure `p̄ / (ρ c²)`.
    #[serde(default = "default_pressure_ratio")]
    pub p_bar_over_rho_c2: f64,
}

impl Default for CombustionGas {
    fn default() -> Self {
        Self {
            gamma: default_gamma(),
            p_bar_over_rho_c2: default_pressure_ratio(),
        }
    }
}

impl CombustionGas {
    /// Thermodynamic gain `(γ − 1)/γ · p̄/ρc²`.
    pub fn gain(&self) -> f64 {
        (self.gamma - 1.0) / self.gamma * self.p_bar_over_rho_c2
    }
}

/// Crocco operating point `(n, τ)` of the combustion response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingPoint {
    /// Interaction index n.
    pub n: f64,
    /// Sensitive time lag τ [s].
    pub tau: f64,
}

/// Total damping ratio of every mode `n = 0..N` of an N-engine ring.
pub fn damping_spectrum(
    n_engines: usize,
    params: &DampingParameters,
    environment: &Environment,
) -> Result<Vec<f64>, CreError> {
    require_engine_count("damping_engine_count", n_engines)?;
    let shared = breathing_mode_damping(params, environment);
    Ok((0..n_engines)
        .map(|n| shared + params.zeta_coupling_max * mode_shape_factor(n, n_engines))
        .collect())
}

/// [`damping_spectrum`] for several environments, one row each.
pub fn damping_spectrum_multi_env(
    n_engines: usize,
    params: &DampingParameters,
    environments: &[Environment],
) -> Result<DampingSpectrumResult, CreError> {
    require_engine_count("damping_engine_count", n_engines)?;
    debug!(n_engines, environments = environments.len(), "damping spectrum");
    let rows = environments
        .iter()
        .map(|env| damping_spectrum(n_engines, params, env))
        .collect::<Result<Vec<_>, _>>()?;
    let names = environments.iter().map(|env| env.name.clone()).collect();
    Ok(DampingSpectrumResult::new(n_engines, rows, names))
}

/// Damping of the breathing mode: the shared terms only.
pub fn breathing_mode_damping(params: &DampingParameters, environment: &Environment) -> f64 {
    params.base() + environment.zeta_atmospheric
}

/// Damping ratio a mode of angular frequency `omega_n` needs at `(n, τ)`.
///
/// `n ω_n |sin(ω_n τ)| / (2 ω_n²) · (γ−1)/γ · p̄/ρc²`
pub fn critical_damping_threshold(
    point: OperatingPoint,
    omega_n: f64,
    gas: &CombustionGas,
) -> Result<f64, CreError> {
    if !(omega_n.is_finite() && omega_n > 0.0) {
        return Err(CreError::InvalidInput(
            ErrorInfo::new("damping_mode_frequency", "mode frequency must be strictly positive")
                .with_context("omega_n", omega_n),
        ));
    }
    let sin_term = (omega_n * point.tau).sin().abs();
    Ok(point.n * omega_n * sin_term / (2.0 * omega_n * omega_n) * gas.gain())
}

/// Whether mode `mode` of the ring carries more damping than it needs.
pub fn is_mode_stable(
    mode: usize,
    n_engines: usize,
    params: &DampingParameters,
    environment: &Environment,
    point: OperatingPoint,
    omega_n: f64,
    gas: &CombustionGas,
) -> Result<bool, CreError> {
    if mode >= n_engines {
        return Err(CreError::InvalidInput(
            ErrorInfo::new("damping_mode_index", "mode index must be below the engine count")
                .with_context("mode", mode)
                .with_context("n_engines", n_engines),
        ));
    }
    let spectrum = damping_spectrum(n_engines, params, environment)?;
    let threshold = critical_damping_threshold(point, omega_n, gas)?;
    Ok(spectrum[mode] > threshold)
}
