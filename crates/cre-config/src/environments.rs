//! Built-in environments and damping defaults.

use cre_core::{DampingParameters, Environment};

/// Earth sea level: 1 atm, ~420 rayl.
pub fn earth_sl() -> Environment {
    Environment {
        name: "earth_sl".to_string(),
        ambient_pressure: 101_325.0,
        acoustic_impedance: 420.0,
        zeta_atmospheric: 0.028,
    }
}

/// Lunar surface vacuum.
pub fn lunar_vacuum() -> Environment {
    Environment {
        name: "lunar_vacuum".to_string(),
        ambient_pressure: 0.0,
        acoustic_impedance: 0.0,
        zeta_atmospheric: 0.0,
    }
}

/// Default damping coefficients.
pub fn default_damping() -> DampingParameters {
    DampingParameters::default()
}

pub(crate) fn builtin() -> Vec<(&'static str, Environment)> {
    vec![("earth_sl", earth_sl()), ("lunar_vacuum", lunar_vacuum())]
}
