//! Base-cavity acoustics of the vehicle aft end.

use std::f64::consts::PI;

use cre_core::{CreError, ErrorInfo};
use num_complex::Complex64;

/// Bessel derivative zeros α'ₘₙ of the tabulated cylindrical modes `(m, n)`.
pub const CAVITY_MODES: [((u32, u32), f64); 5] = [
    ((1, 1), 1.8412),
    ((2, 1), 3.0542),
    ((0, 1), 3.8317),
    ((3, 1), 4.2012),
    ((1, 2), 5.3314),
];

/// First tangential cavity mode, the usual default.
pub const FIRST_TANGENTIAL: (u32, u32) = (1, 1);

fn cavity_error(code: &str, message: &str) -> CreError {
    CreError::InvalidInput(ErrorInfo::new(code, message))
}

/// Resonance frequency `α'ₘₙ c / (2π R)` [Hz] of cavity mode `(m, n)`.
pub fn cavity_mode_frequency(sound_speed: f64, radius: f64, mode: (u32, u32)) -> Result<f64, CreError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(cavity_error("cavity_radius", "cavity radius must be strictly positive"));
    }
    let alpha = CAVITY_MODES
        .iter()
        .find(|(key, _)| *key == mode)
        .map(|(_, alpha)| *alpha)
        .ok_or_else(|| {
            let available = CAVITY_MODES
                .iter()
                .map(|((m, n), _)| format!("({m}, {n})"))
                .collect::<Vec<_>>()
                .join(", ");
            CreError::InvalidInput(
                ErrorInfo::new("cavity_mode", format!("mode {mode:?} is not tabulated"))
                    .with_context("m", mode.0)
                    .with_context("n", mode.1)
                    .with_hint(format!("available modes: {available}")),
            )
        })?;
    Ok(alpha * sound_speed / (2.0 * PI * radius))
}

/// Single-mode transfer function `g_i g_j / (ω_mn² − ω² + i ω ω_mn / Q)`.
pub fn acoustic_transfer_function(
    omega: &[f64],
    g_i: f64,
    g_j: f64,
    omega_mn: f64,
    quality: f64,
) -> Result<Vec<Complex64>, CreError> {
    if !(quality.is_finite() && quality > 0.0) {
        return Err(CreError::InvalidInput(
            ErrorInfo::new("cavity_quality", "quality factor must be strictly positive")
                .with_context("quality", quality),
        ));
    }
    let numerator = Complex64::new(g_i * g_j, 0.0);
    Ok(omega
        .iter()
        .map(|&w| numerator / Complex64::new(omega_mn * omega_mn - w * w, w * omega_mn / quality))
        .collect())
}
