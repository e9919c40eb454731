//! Operating environments and damping coefficients.

use serde::{Deserialize, Serialize};

use crate::errors::{require_non_negative, CreError, ErrorInfo};

/// Ambient conditions that control atmospheric coupling and damping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Registry key, e.g. `"earth_sl"`.
    pub name: String,
    /// Ambient static pressure [Pa].
    pub ambient_pressure: f64,
    /// Characteristic acoustic impedance of the ambient gas [rayl].
    pub acoustic_impedance: f64,
    /// Atmospheric contribution to the damping ratio.
    pub zeta_atmospheric: f64,
}

impl Environment {
    /// Creates a validated environment.
    pub fn new(
        name: impl Into<String>,
        ambient_pressure: f64,
        acoustic_impedance: f64,
        zeta_atmospheric: f64,
    ) -> Result<Self, CreError> {
        let env = Self {
            name: name.into(),
            ambient_pressure,
            acoustic_impedance,
            zeta_atmospheric,
        };
        env.validate()?;
        Ok(env)
    }

    /// Checks non-negativity and the vacuum consistency invariant.
    ///
    /// A vacuum (zero ambient pressure) has neither acoustic impedance nor
    /// atmospheric damping, and vice versa.
    pub fn validate(&self) -> Result<(), CreError> {
        require_non_negative("environment_pressure", "ambient_pressure", self.ambient_pressure)?;
        require_non_negative(
            "environment_impedance",
            "acoustic_impedance",
            self.acoustic_impedance,
        )?;
        require_non_negative(
            "environment_damping",
            "zeta_atmospheric",
            self.zeta_atmospheric,
        )?;
        let vacuum_flags = [
            self.ambient_pressure == 0.0,
            self.acoustic_impedance == 0.0,
            self.zeta_atmospheric == 0.0,
        ];
        if vacuum_flags.iter().all(|flag| *flag) || vacuum_flags.iter().all(|flag| !*flag) {
            Ok(())
        } else {
            Err(CreError::InvalidInput(
                ErrorInfo::new(
                    "environment_vacuum_mismatch",
                    "ambient pressure, acoustic impedance and atmospheric damping must be zero together",
                )
                .with_context("environment", &self.name)
                .with_context("ambient_pressure", self.ambient_pressure)
                .with_context("acoustic_impedance", self.acoustic_impedance)
                .with_context("zeta_atmospheric", self.zeta_atmospheric),
            ))
        }
    }

    /// Returns true when there is no ambient atmosphere.
    pub fn is_vacuum(&self) -> bool {
        self.ambient_pressure <= 0.0
    }
}

fn default_zeta_internal() -> f64 {
    0.015
}

fn default_zeta_nozzle() -> f64 {
    0.020
}

fn default_zeta_feed() -> f64 {
    0.005
}

fn default_zeta_coupling_max() -> f64 {
    0.022
}

fn default_zeta_atmospheric() -> f64 {
    0.028
}

/// Damping ratio coefficients used by the stability analysis.
///
/// Unlike the other records this one is meant to be tweaked: start from
/// [`DampingParameters::default`] and override individual fields, e.g.
/// `DampingParameters { zeta_internal: 0.025, ..Default::default() }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DampingParameters {
    /// Internal combustion damping.
    #[serde(default = "default_zeta_internal")]
    pub zeta_internal: f64,
    /// Nozzle admittance damping.
    #[serde(default = "default_zeta_nozzle")]
    pub zeta_nozzle: f64,
    /// Feed system dissipation.
    #[serde(default = "default_zeta_feed")]
    pub zeta_feed: f64,
    /// Maximum inter-engine coupling damping (reached by the alternating mode).
    #[serde(default = "default_zeta_coupling_max")]
    pub zeta_coupling_max: f64,
    /// Atmospheric damping used by the Earth/vacuum margin ratio.
    #[serde(default = "default_zeta_atmospheric")]
    pub zeta_atmospheric: f64,
}

impl Default for DampingParameters {
    fn default() -> Self {
        Self {
            zeta_internal: default_zeta_internal(),
            zeta_nozzle: default_zeta_nozzle(),
            zeta_feed: default_zeta_feed(),
            zeta_coupling_max: default_zeta_coupling_max(),
            zeta_atmospheric: default_zeta_atmospheric(),
        }
    }
}

impl DampingParameters {
    /// Rejects negative or non-finite coefficients.
    pub fn validate(&self) -> Result<(), CreError> {
        require_non_negative("damping_coefficient", "zeta_internal", self.zeta_internal)?;
        require_non_negative("damping_coefficient", "zeta_nozzle", self.zeta_nozzle)?;
        require_non_negative("damping_coefficient", "zeta_feed", self.zeta_feed)?;
        require_non_negative(
            "damping_coefficient",
            "zeta_coupling_max",
            self.zeta_coupling_max,
        )?;
        require_non_negative(
            "damping_coefficient",
            "zeta_atmospheric",
            self.zeta_atmospheric,
        )?;
        Ok(())
    }

    /// Mode-independent damping shared by every mode in every environment.
    pub fn base(&self) -> f64 {
        self.zeta_internal + self.zeta_nozzle + self.zeta_feed
    }
}
