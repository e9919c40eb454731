//! Normal modes of a ring of identical, nearest-neighbour coupled engines.
//!
//! Mode `n` of an N-engine ring has eigenfrequency
//! `ω_n² = k0/m + (2κ/m)(1 − cos(2πn/N))`. Mode 0 is the in-phase
//! breathing mode, which coupling cannot stiffen.

use std::f64::consts::PI;

use cre_core::errors::require_engine_count;
use cre_core::{CreError, ErrorInfo};

fn mode_error(code: &str, message: &str) -> CreError {
    CreError::InvalidInput(ErrorInfo::new(code, message))
}

/// Shape factor `1 − cos(2πn/N)` of mode `n` in an N-engine ring.
///
/// Evaluated on the folded index `min(n, N − n)` so that modes `n` and
/// `N − n` are bit-identical, and returns exactly zero for the breathing
/// mode. `n_engines` must be at least one.
pub fn mode_shape_factor(n: usize, n_engines: usize) -> f64 {
    if n_engines == 0 {
        return 0.0;
    }
    let n = n % n_engines;
    let folded = n.min(n_engines - n);
    if folded == 0 {
        return 0.0;
    }
    1.0 - (2.0 * PI * folded as f64 / n_engines as f64).cos()
}

/// Squared eigenfrequencies `ω_n²` for `n = 0..N`.
pub fn normal_mode_frequencies_squared(
    k0: f64,
    mass: f64,
    kappa: f64,
    n_engines: usize,
) -> Result<Vec<f64>, CreError> {
    require_engine_count("modes_engine_count", n_engines)?;
    if !(k0.is_finite() && k0 >= 0.0) {
        return Err(CreError::InvalidInput(
            ErrorInfo::new("modes_stiffness", "engine stiffness must be non-negative")
                .with_context("k0", k0),
        ));
    }
    if !(mass.is_finite() && mass > 0.0) {
        return Err(CreError::InvalidInput(
            ErrorInfo::new("modes_mass", "effective mass must be strictly positive")
                .with_context("mass", mass),
        ));
    }
    let base = k0 / mass;
    let coupling = 2.0 * kappa / mass;
    Ok((0..n_engines)
        .map(|n| {
            let factor = mode_shape_factor(n, n_engines);
            if factor == 0.0 {
                base
            } else {
                base + coupling * factor
            }
        })
        .collect())
}

/// Eigenfrequencies `ω_n` [rad/s] for `n = 0..N`.
pub fn normal_mode_frequencies(
    k0: f64,
    mass: f64,
    kappa: f64,
    n_engines: usize,
) -> Result<Vec<f64>, CreError> {
    Ok(normal_mode_frequencies_squared(k0, mass, kappa, n_engines)?
        .into_iter()
        .map(f64::sqrt)
        .collect())
}

/// Frequency ratios `ω_n / ω_0 = sqrt(1 + (2κ/k0)(1 − cos(2πn/N)))`.
pub fn mode_frequency_ratios(kappa: f64, k0: f64, n_engines: usize) -> Result<Vec<f64>, CreError> {
    require_engine_count("modes_engine_count", n_engines)?;
    if !(k0.is_finite() && k0 > 0.0) {
        return Err(mode_error("modes_stiffness", "engine stiffness must be strictly positive"));
    }
    let coupling = 2.0 * kappa / k0;
    Ok((0..n_engines)
        .map(|n| (1.0 + coupling * mode_shape_factor(n, n_engines)).sqrt())
        .collect())
}
