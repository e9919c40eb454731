//! Rocket engine specification records.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{require_non_negative, require_positive, CreError, ErrorInfo};

fn default_gamma() -> f64 {
    1.25
}

/// Injector architecture of the combustion chamber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InjectorType {
    /// Single central pintle injector.
    Pintle,
    /// Coaxial swirl elements.
    CoaxialSwirl,
}

impl InjectorType {
    /// Returns the serialized label.
    pub fn as_str(&self) -> &'static str {
        match self {
            InjectorType::Pintle => "pintle",
            InjectorType::CoaxialSwirl => "coaxial_swirl",
        }
    }
}

/// Power cycle of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombustionCycle {
    /// Open gas-generator cycle.
    GasGenerator,
    /// Full-flow staged combustion cycle.
    Ffscc,
}

impl CombustionCycle {
    /// Returns the serialized label.
    pub fn as_str(&self) -> &'static str {
        match self {
            CombustionCycle::GasGenerator => "gas_generator",
            CombustionCycle::Ffscc => "ffscc",
        }
    }
}

/// Rocket engine specification used by the coupled resonance analysis.
///
/// Records are built once (either as built-in constants or from a study
/// file), validated, and afterwards only shared by reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engine {
    /// Display name, e.g. `"Merlin 1D"`.
    pub name: String,
    /// Sea-level thrust [N].
    #[serde(default)]
    pub thrust_sl: Option<f64>,
    /// Vacuum thrust [N].
    #[serde(default)]
    pub thrust_vac: Option<f64>,
    /// Chamber pressure [Pa].
    pub chamber_pressure: f64,
    /// Chamber diameter [m], used for the acoustic mode estimate.
    pub chamber_diameter: f64,
    /// Nozzle exit diameter [m].
    pub nozzle_exit_diameter: f64,
    /// Nozzle area ratio Ae/At.
    pub expansion_ratio: f64,
    /// Engine dry mass [kg].
    pub mass: f64,
    /// Sea-level specific impulse [s].
    #[serde(default)]
    pub isp_sl: Option<f64>,
    /// Vacuum specific impulse [s].
    #[serde(default)]
    pub isp_vac: Option<f64>,
    /// Ratio of specific heats of the combustion products.
    #[serde(default = "default_gamma")]
    pub gamma: f64,
    /// Speed of sound in the chamber [m/s].
    pub sound_speed: f64,
    /// Injector architecture.
    pub injector_type: InjectorType,
    /// Power cycle.
    pub cycle: CombustionCycle,
    /// Valid range of the Crocco interaction index n.
    pub n_range: (f64, f64),
    /// Valid range of the sensitive time lag τ [s].
    pub tau_range: (f64, f64),
}

impl Engine {
    /// Checks the physical invariants of the record.
    pub fn validate(&self) -> Result<(), CreError> {
        require_positive("engine_chamber_pressure", "chamber_pressure", self.chamber_pressure)?;
        require_positive("engine_chamber_diameter", "chamber_diameter", self.chamber_diameter)?;
        require_positive("engine_sound_speed", "sound_speed", self.sound_speed)?;
        require_non_negative(
            "engine_nozzle_exit",
            "nozzle_exit_diameter",
            self.nozzle_exit_diameter,
        )?;
        require_positive("engine_mass", "mass", self.mass)?;
        if !(self.gamma.is_finite() && self.gamma > 1.0) {
            return Err(CreError::InvalidInput(
                ErrorInfo::new("engine_gamma", "ratio of specific heats must exceed one")
                    .with_context("engine", &self.name)
                    .with_context("gamma", self.gamma),
            ));
        }
        check_range(&self.name, "n_range", self.n_range)?;
        check_range(&self.name, "tau_range", self.tau_range)?;
        Ok(())
    }

    /// Chamber radius [m].
    pub fn chamber_radius(&self) -> f64 {
        self.chamber_diameter / 2.0
    }

    /// Nozzle exit area [m²].
    pub fn nozzle_exit_area(&self) -> f64 {
        PI * (self.nozzle_exit_diameter / 2.0).powi(2)
    }
}

fn check_range(engine: &str, field: &str, range: (f64, f64)) -> Result<(), CreError> {
    let (lo, hi) = range;
    if lo.is_finite() && hi.is_finite() && lo >= 0.0 && lo <= hi {
        Ok(())
    } else {
        Err(CreError::InvalidInput(
            ErrorInfo::new("engine_range", format!("{field} must be an ordered non-negative pair"))
                .with_context("engine", engine)
                .with_context("min", lo)
                .with_context("max", hi),
        ))
    }
}
