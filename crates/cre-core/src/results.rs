//! Output records produced by the analysis crates.
//!
//! Every record is created fresh per call and carries `validated = false`
//! together with [`DISCLAIMER`].

use serde::{Deserialize, Serialize};

/// Disclaimer attached to every analytical result.
pub const DISCLAIMER: &str = "Analytical model — not experimentally validated.";

fn default_validated() -> bool {
    false
}

fn default_disclaimer() -> String {
    DISCLAIMER.to_string()
}

/// Chamber acoustic mode frequencies [Hz].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcousticModes {
    /// First tangential.
    pub f_1t: f64,
    /// First longitudinal.
    pub f_1l: f64,
    /// Second tangential.
    pub f_2t: f64,
}

/// Critical interaction index over a (τ, frequency, environment) grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilitySweepResult {
    /// Sensitive time lag grid [s].
    pub tau: Vec<f64>,
    /// `n_crit[env][freq][tau]`, clipped to `[0, 20]`.
    pub n_crit: Vec<Vec<Vec<f64>>>,
    /// Swept frequencies [Hz].
    pub frequencies: Vec<f64>,
    /// Environment labels matching the first axis of `n_crit`.
    pub environments: Vec<String>,
    /// Always false.
    #[serde(default = "default_validated")]
    pub validated: bool,
    /// Always [`DISCLAIMER`].
    #[serde(default = "default_disclaimer")]
    pub disclaimer: String,
}

impl StabilitySweepResult {
    /// Wraps sweep arrays with the unvalidated flag and disclaimer.
    pub fn new(
        tau: Vec<f64>,
        n_crit: Vec<Vec<Vec<f64>>>,
        frequencies: Vec<f64>,
        environments: Vec<String>,
    ) -> Self {
        Self {
            tau,
            n_crit,
            frequencies,
            environments,
            validated: false,
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}

/// Per-mode total damping ratio for one ring across environments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DampingSpectrumResult {
    /// Mode indices `0..N`.
    pub mode_indices: Vec<usize>,
    /// `zeta_total[env][mode]`.
    pub zeta_total: Vec<Vec<f64>>,
    /// Engine count N of the ring.
    pub n_engines: usize,
    /// Environment names matching the first axis of `zeta_total`.
    pub environments: Vec<String>,
    /// Always false.
    #[serde(default = "default_validated")]
    pub validated: bool,
    /// Always [`DISCLAIMER`].
    #[serde(default = "default_disclaimer")]
    pub disclaimer: String,
}

impl DampingSpectrumResult {
    /// Wraps spectrum rows with the unvalidated flag and disclaimer.
    pub fn new(n_engines: usize, zeta_total: Vec<Vec<f64>>, environments: Vec<String>) -> Self {
        Self {
            mode_indices: (0..n_engines).collect(),
            zeta_total,
            n_engines,
            environments,
            validated: false,
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}

/// Coherent versus incoherent thrust-oscillation growth with engine count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmplificationResult {
    /// Engine counts of the sweep.
    pub n_engines: Vec<usize>,
    /// `N` per engine count.
    pub coherent: Vec<f64>,
    /// `√N` per engine count.
    pub incoherent: Vec<f64>,
    /// `coherent / incoherent`.
    pub ratio: Vec<f64>,
    /// Vacuum-to-Earth breathing-mode damping ratio [%], when computed.
    #[serde(default)]
    pub damping_margin_ratio: Option<Vec<f64>>,
    /// Always false.
    #[serde(default = "default_validated")]
    pub validated: bool,
    /// Always [`DISCLAIMER`].
    #[serde(default = "default_disclaimer")]
    pub disclaimer: String,
}

impl AmplificationResult {
    /// Wraps amplification arrays with the unvalidated flag and disclaimer.
    pub fn new(
        n_engines: Vec<usize>,
        coherent: Vec<f64>,
        incoherent: Vec<f64>,
        ratio: Vec<f64>,
        damping_margin_ratio: Option<Vec<f64>>,
    ) -> Self {
        Self {
            n_engines,
            coherent,
            incoherent,
            ratio,
            damping_margin_ratio,
            validated: false,
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}
