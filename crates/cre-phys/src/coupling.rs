//! Inter-engine coupling pathways.
//!
//! Three independent paths connect neighbouring engines of a ring: acoustic
//! coupling through the surrounding atmosphere (absent in vacuum),
//! structural coupling through the thrust frame and pogo-type coupling
//! through shared feed manifolds. All coefficients are in N/m.

use std::f64::consts::PI;

use cre_core::{CombustionCycle, CreError, Engine, Environment, ErrorInfo};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::oscillator::BESSEL_1T;

/// Fraction of acoustic energy transferred through the atmosphere.
pub const ATMOSPHERIC_EFFICIENCY: f64 = 0.005;
/// Fraction of engine stiffness transmitted through the thrust frame.
pub const STRUCTURAL_FRACTION: f64 = 0.02;
/// Feed coupling fraction of full-flow staged combustion engines.
pub const FEED_FRACTION_FFSC: f64 = 0.015;
/// Feed coupling fraction of every other cycle.
pub const FEED_FRACTION_OTHER: f64 = 0.008;
/// Smallest inter-engine spacing used in coupling denominators [m].
pub const MIN_SPACING: f64 = 0.01;
/// Engine count at which feed coupling reaches its nominal fraction.
pub const FEED_REFERENCE_ENGINES: f64 = 33.0;

fn coupling_error(code: &str, message: &str) -> CreError {
    CreError::InvalidInput(ErrorInfo::new(code, message))
}

/// Per-pathway coupling coefficients of one ring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CouplingBreakdown {
    /// Atmospheric acoustic coupling.
    pub atmospheric: f64,
    /// Thrust-frame coupling.
    pub structural: f64,
    /// Feed-system coupling.
    pub feed: f64,
}

impl CouplingBreakdown {
    /// Sum of the three pathways.
    pub fn total(&self) -> f64 {
        self.atmospheric + self.structural + self.feed
    }
}

/// Chord between neighbouring engines of a ring, `2 r sin(π/N)` [m].
pub fn ring_spacing(radius: f64, n_engines: usize) -> f64 {
    if n_engines <= 1 {
        return 0.0;
    }
    2.0 * radius * (PI / n_engines as f64).sin()
}

fn floored_spacing(radius: f64, n_engines: usize) -> f64 {
    let spacing = ring_spacing(radius, n_engines);
    if spacing < MIN_SPACING {
        trace!(spacing, floor = MIN_SPACING, "inter-engine spacing floored");
        MIN_SPACING
    } else {
        spacing
    }
}

/// Stiffness proxy `k = m ω₀²` with `ω₀ = j'_11 c / D`.
pub fn engine_stiffness(engine: &Engine) -> f64 {
    let omega_0 = BESSEL_1T * engine.sound_speed / engine.chamber_diameter;
    engine.mass * omega_0 * omega_0
}

/// Atmospheric coupling `0.005 Z A_e / max(spacing, 0.01)`.
///
/// Exactly zero in vacuum and for single-engine rings.
pub fn coupling_atmospheric(
    environment: &Environment,
    engine: &Engine,
    ring_radius: f64,
    n_engines: usize,
) -> f64 {
    if environment.ambient_pressure <= 0.0 || n_engines <= 1 {
        return 0.0;
    }
    ATMOSPHERIC_EFFICIENCY * environment.acoustic_impedance * engine.nozzle_exit_area()
        / floored_spacing(ring_radius, n_engines)
}

/// Structural coupling `0.02 k De / max(spacing, 0.01)`.
pub fn coupling_structural(engine: &Engine, ring_radius: f64, n_engines: usize) -> f64 {
    if n_engines <= 1 {
        return 0.0;
    }
    STRUCTURAL_FRACTION * engine_stiffness(engine) * engine.nozzle_exit_diameter
        / floored_spacing(ring_radius, n_engines)
}

/// Feed-system coupling `f k ln N / ln 33`.
///
/// Full-flow staged combustion engines couple more tightly through their
/// manifolds than the other cycles.
pub fn coupling_feed(engine: &Engine, n_engines: usize) -> f64 {
    if n_engines <= 1 {
        return 0.0;
    }
    let fraction = match engine.cycle {
        CombustionCycle::Ffscc => FEED_FRACTION_FFSC,
        CombustionCycle::GasGenerator => FEED_FRACTION_OTHER,
    };
    fraction * engine_stiffness(engine) * (n_engines as f64).ln() / FEED_REFERENCE_ENGINES.ln()
}

/// The three pathways for one ring.
pub fn coupling_breakdown(
    environment: &Environment,
    engine: &Engine,
    ring_radius: f64,
    n_engines: usize,
) -> CouplingBreakdown {
    CouplingBreakdown {
        atmospheric: coupling_atmospheric(environment, engine, ring_radius, n_engines),
        structural: coupling_structural(engine, ring_radius, n_engines),
        feed: coupling_feed(engine, n_engines),
    }
}

/// Total coupling `κ_atm + κ_struct + κ_feed`.
pub fn total_coupling(
    environment: &Environment,
    engine: &Engine,
    ring_radius: f64,
    n_engines: usize,
) -> f64 {
    coupling_breakdown(environment, engine, ring_radius, n_engines).total()
}

/// Plume penetration Knudsen number at angle `theta` from the plume axis.
///
/// `Kn_p = ½ Kn0 A_pl (D / 2 r_n) / (sin²θ (1 + cos θ))`, where `D` is the
/// half-distance between nozzle centres and `r_n` the nozzle exit radius.
pub fn penetration_knudsen(
    kn_0: f64,
    a_pl: f64,
    half_distance: f64,
    nozzle_radius: f64,
    theta: f64,
) -> Result<f64, CreError> {
    if !(nozzle_radius.is_finite() && nozzle_radius > 0.0) {
        return Err(coupling_error("knudsen_nozzle_radius", "nozzle radius must be strictly positive"));
    }
    if !(theta.is_finite() && theta > 0.0 && theta < PI) {
        return Err(CreError::InvalidInput(
            ErrorInfo::new("knudsen_angle", "plume angle must lie in (0, π)")
                .with_context("theta", theta),
        ));
    }
    let sin_theta = theta.sin();
    let f_theta = 1.0 + theta.cos();
    Ok(0.5 * kn_0 * a_pl * (half_distance / (2.0 * nozzle_radius)) / (sin_theta * sin_theta * f_theta))
}

/// [`penetration_knudsen`] over a set of angles.
pub fn penetration_knudsen_profile(
    kn_0: f64,
    a_pl: f64,
    half_distance: f64,
    nozzle_radius: f64,
    thetas: &[f64],
) -> Result<Vec<f64>, CreError> {
    thetas
        .iter()
        .map(|&theta| penetration_knudsen(kn_0, a_pl, half_distance, nozzle_radius, theta))
        .collect()
}
