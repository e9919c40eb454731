//! Built-in engine records.

use cre_core::{CombustionCycle, Engine, InjectorType};

/// SpaceX Merlin 1D (sea-level, gas generator, pintle injector).
pub fn merlin_1d() -> Engine {
    Engine {
        name: "Merlin 1D".to_string(),
        thrust_sl: Some(845e3),
        thrust_vac: Some(914e3),
        chamber_pressure: 97e5,
        chamber_diameter: 0.36,
        nozzle_exit_diameter: 0.92,
        expansion_ratio: 16.0,
        mass: 470.0,
        isp_sl: Some(282.0),
        isp_vac: Some(311.0),
        gamma: 1.25,
        sound_speed: 1240.0,
        injector_type: InjectorType::Pintle,
        cycle: CombustionCycle::GasGenerator,
        n_range: (0.5, 3.0),
        tau_range: (0.5e-3, 5e-3),
    }
}

fn raptor_family(
    name: &str,
    thrust_sl: Option<f64>,
    thrust_vac: Option<f64>,
    chamber_pressure: f64,
) -> Engine {
    Engine {
        name: name.to_string(),
        thrust_sl,
        thrust_vac,
        chamber_pressure,
        chamber_diameter: 0.42,
        nozzle_exit_diameter: 1.3,
        expansion_ratio: 33.0,
        mass: 1630.0,
        isp_sl: Some(327.0),
        isp_vac: Some(347.0),
        gamma: 1.25,
        sound_speed: 1310.0,
        injector_type: InjectorType::CoaxialSwirl,
        cycle: CombustionCycle::Ffscc,
        n_range: (0.3, 2.0),
        tau_range: (0.2e-3, 2e-3),
    }
}

/// SpaceX Raptor 2 (sea-level, full-flow staged combustion).
pub fn raptor_2() -> Engine {
    raptor_family("Raptor 2", Some(2_256_000.0), None, 300e5)
}

/// SpaceX Raptor 3.
pub fn raptor_3() -> Engine {
    Engine {
        expansion_ratio: 36.0,
        mass: 1525.0,
        isp_sl: Some(330.0),
        isp_vac: Some(350.0),
        ..raptor_family("Raptor 3", Some(2_747_000.0), None, 350e5)
    }
}

/// SpaceX Raptor Vacuum 2.
pub fn rvac_2() -> Engine {
    Engine {
        nozzle_exit_diameter: 2.4,
        expansion_ratio: 85.0,
        mass: 1700.0,
        isp_sl: None,
        isp_vac: Some(363.0),
        ..raptor_family("RVac 2", None, Some(2_530_000.0), 300e5)
    }
}

pub(crate) fn builtin() -> Vec<(&'static str, Engine)> {
    vec![
        ("merlin_1d", merlin_1d()),
        ("raptor_2", raptor_2()),
        ("raptor_3", raptor_3()),
        ("rvac_2", rvac_2()),
    ]
}
