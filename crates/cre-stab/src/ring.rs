//! Composition of the physics for one ring of a cluster.
//!
//! Rings are analysed independently; there is no coupling between the rings
//! of a cluster.

use cre_core::{
    AcousticModes, ClusterGeometry, CreError, DampingParameters, Engine, Environment, Ring,
    DISCLAIMER,
};
use cre_phys::coupling::engine_stiffness;
use cre_phys::{
    chamber_acoustic_modes, coupling_breakdown, mode_frequency_ratios, normal_mode_frequencies,
    CouplingBreakdown,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::damping::{breathing_mode_damping, damping_spectrum};

/// Modes, coupling and damping of a single ring in one environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingAnalysis {
    /// Position of the ring in its cluster, innermost first.
    pub ring_index: usize,
    /// Engine count N.
    pub n_engines: usize,
    /// Ring radius [m].
    pub radius: f64,
    /// Symmetry label of the ring.
    pub symmetry_group: String,
    /// Environment the analysis was run in.
    pub environment: String,
    /// Chamber acoustic modes of the engine [Hz].
    pub chamber_modes: AcousticModes,
    /// Coupling pathways [N/m].
    pub coupling: CouplingBreakdown,
    /// Uncoupled angular frequency `sqrt(k0/m)` [rad/s].
    pub omega_0: f64,
    /// Coupled eigenfrequencies [rad/s].
    pub mode_frequencies: Vec<f64>,
    /// `ω_n / ω_0` per mode.
    pub frequency_ratios: Vec<f64>,
    /// Total damping ratio per mode.
    pub zeta_total: Vec<f64>,
    /// Damping of the breathing mode.
    pub breathing_zeta: f64,
    /// Always false.
    pub validated: bool,
    /// Always [`DISCLAIMER`].
    pub disclaimer: String,
}

/// Analyses `ring` fitted with `engine`.
///
/// The engine stiffness proxy `k0 = m ω₀²` is the one the structural and
/// feed coupling pathways are scaled by, so `frequency_ratios` compare the
/// coupling against the same stiffness.
pub fn analyze_ring(
    engine: &Engine,
    ring: &Ring,
    ring_index: usize,
    environment: &Environment,
    params: &DampingParameters,
) -> Result<RingAnalysis, CreError> {
    engine.validate()?;
    ring.validate()?;
    environment.validate()?;
    params.validate()?;

    let n = ring.n_engines;
    let chamber_modes = chamber_acoustic_modes(engine)?;
    let coupling = coupling_breakdown(environment, engine, ring.radius, n);
    let kappa = coupling.total();
    let k0 = engine_stiffness(engine);
    let mode_frequencies = normal_mode_frequencies(k0, engine.mass, kappa, n)?;
    let frequency_ratios = mode_frequency_ratios(kappa, k0, n)?;
    let zeta_total = damping_spectrum(n, params, environment)?;
    debug!(
        ring_index,
        n_engines = n,
        environment = %environment.name,
        kappa,
        "ring analysed"
    );

    Ok(RingAnalysis {
        ring_index,
        n_engines: n,
        radius: ring.radius,
        symmetry_group: ring.symmetry_group.clone(),
        environment: environment.name.clone(),
        chamber_modes,
        coupling,
        omega_0: mode_frequencies[0],
        mode_frequencies,
        frequency_ratios,
        zeta_total,
        breathing_zeta: breathing_mode_damping(params, environment),
        validated: false,
        disclaimer: DISCLAIMER.to_string(),
    })
}

/// Analyses every ring of `cluster` independently.
pub fn analyze_cluster(
    cluster: &ClusterGeometry,
    engine: &Engine,
    environment: &Environment,
    params: &DampingParameters,
) -> Result<Vec<RingAnalysis>, CreError> {
    cluster.validate()?;
    cluster
        .rings
        .iter()
        .enumerate()
        .map(|(index, ring)| analyze_ring(engine, ring, index, environment, params))
        .collect()
}
