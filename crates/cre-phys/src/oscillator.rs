//! Single-engine chamber acoustics and energy balance.

use std::f64::consts::PI;

use cre_core::errors::require_positive;
use cre_core::{AcousticModes, CreError, Engine, ErrorInfo};

/// Bessel derivative zero of the first tangential mode.
pub const BESSEL_1T: f64 = 1.8412;
/// Bessel derivative zero of the second tangential mode.
pub const BESSEL_2T: f64 = 3.0542;
/// Bessel derivative zero of the first radial mode.
pub const BESSEL_1R: f64 = 3.8317;

/// Mach number assumed at the nozzle entrance.
pub const NOZZLE_ENTRANCE_MACH: f64 = 0.4;

/// Chamber acoustic mode frequencies of `engine`.
///
/// Transverse modes use `f = j' c / (2π R)`. The longitudinal mode takes
/// the chamber length equal to its diameter, `f_1L = c / (2 D)`.
pub fn chamber_acoustic_modes(engine: &Engine) -> Result<AcousticModes, CreError> {
    require_positive("engine_chamber_diameter", "chamber_diameter", engine.chamber_diameter)?;
    require_positive("engine_sound_speed", "sound_speed", engine.sound_speed)?;
    let c = engine.sound_speed;
    let radius = engine.chamber_radius();
    let transverse = |zero: f64| zero * c / (2.0 * PI * radius);
    Ok(AcousticModes {
        f_1t: transverse(BESSEL_1T),
        f_1l: c / (2.0 * engine.chamber_diameter),
        f_2t: transverse(BESSEL_2T),
    })
}

/// Natural angular frequency ω₀ = 2π f_1T [rad/s].
pub fn engine_natural_frequency(engine: &Engine) -> Result<f64, CreError> {
    Ok(2.0 * PI * chamber_acoustic_modes(engine)?.f_1t)
}

/// Nozzle acoustic admittance `((γ+1)/2) M / (ρ c)` with `ρ = γ Pc / c²`.
///
/// Always strictly positive for a valid engine; the nozzle only removes
/// acoustic energy.
pub fn nozzle_admittance(engine: &Engine) -> Result<f64, CreError> {
    require_positive("engine_chamber_pressure", "chamber_pressure", engine.chamber_pressure)?;
    require_positive("engine_sound_speed", "sound_speed", engine.sound_speed)?;
    require_positive("engine_gamma", "gamma", engine.gamma)?;
    let gamma = engine.gamma;
    let c = engine.sound_speed;
    let rho = gamma * engine.chamber_pressure / (c * c);
    Ok(((gamma + 1.0) / 2.0) * NOZZLE_ENTRANCE_MACH / (rho * c))
}

/// Rayleigh integral of `p'·Q'` by the trapezoidal rule with unit spacing.
///
/// Positive values drive the instability.
pub fn rayleigh_criterion(p_prime: &[f64], q_prime: &[f64]) -> Result<f64, CreError> {
    if p_prime.len() != q_prime.len() {
        return Err(CreError::InvalidInput(
            ErrorInfo::new("rayleigh_length", "pressure and heat release series differ in length")
                .with_context("p_len", p_prime.len())
                .with_context("q_len", q_prime.len()),
        ));
    }
    let products: Vec<f64> = p_prime.iter().zip(q_prime).map(|(p, q)| p * q).collect();
    Ok(products
        .windows(2)
        .map(|pair| 0.5 * (pair[0] + pair[1]))
        .sum())
}
