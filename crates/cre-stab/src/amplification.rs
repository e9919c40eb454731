//! Coherent versus incoherent thrust-oscillation amplification.
//!
//! In the breathing mode all N engines oscillate in phase and their thrust
//! perturbations add linearly; with random phases they add in RMS.

use cre_core::{AmplificationResult, CreError, DampingParameters, ErrorInfo};
use tracing::debug;

/// Per-engine feed complexity penalty on the vacuum damping margin.
pub const FEED_COMPLEXITY_FACTOR: f64 = 0.002;

/// Coherent amplification `N`.
pub fn coherent_amplification(n_engines: usize) -> f64 {
    n_engines as f64
}

/// Incoherent amplification `√N`.
pub fn incoherent_amplification(n_engines: usize) -> f64 {
    (n_engines as f64).sqrt()
}

/// Coherent over incoherent, `√N`.
pub fn amplification_ratio(n_engines: usize) -> f64 {
    (n_engines as f64).sqrt()
}

/// Vacuum-to-Earth breathing-mode damping in percent, degraded by
/// `1 + 0.002 (N − 1)`.
pub fn damping_margin_ratio(n_engines: usize, params: &DampingParameters) -> Result<f64, CreError> {
    let zeta_vacuum = params.base();
    let zeta_earth = zeta_vacuum + params.zeta_atmospheric;
    if !(zeta_earth.is_finite() && zeta_earth > 0.0) {
        return Err(CreError::InvalidInput(
            ErrorInfo::new("margin_earth_damping", "earth breathing-mode damping must be positive")
                .with_context("zeta_earth", zeta_earth),
        ));
    }
    let degradation = 1.0 + FEED_COMPLEXITY_FACTOR * (n_engines as f64 - 1.0);
    Ok(zeta_vacuum / zeta_earth * 100.0 / degradation)
}

/// Amplification factors for every engine count in `n_min..=n_max`.
pub fn amplification_sweep(
    n_range: (usize, usize),
    params: &DampingParameters,
) -> Result<AmplificationResult, CreError> {
    let (n_min, n_max) = n_range;
    if n_min < 1 || n_max < n_min {
        return Err(CreError::InvalidInput(
            ErrorInfo::new("amplification_range", "engine range must satisfy 1 <= n_min <= n_max")
                .with_context("n_min", n_min)
                .with_context("n_max", n_max),
        ));
    }
    debug!(n_min, n_max, "amplification sweep");
    let counts: Vec<usize> = (n_min..=n_max).collect();
    let margin = counts
        .iter()
        .map(|&n| damping_margin_ratio(n, params))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(AmplificationResult::new(
        counts.clone(),
        counts.iter().map(|&n| coherent_amplification(n)).collect(),
        counts.iter().map(|&n| incoherent_amplification(n)).collect(),
        counts.iter().map(|&n| amplification_ratio(n)).collect(),
        Some(margin),
    ))
}
