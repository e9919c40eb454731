//! Built-in cluster layouts.

use cre_core::{ClusterGeometry, Ring};

fn ring(n_engines: usize, radius: f64, symmetry_group: &str, gimbaling: bool) -> Ring {
    Ring {
        n_engines,
        radius,
        symmetry_group: symmetry_group.to_string(),
        gimbaling,
    }
}

/// Falcon 9 first stage: one center engine plus the octaweb ring.
pub fn falcon_9() -> ClusterGeometry {
    ClusterGeometry {
        name: "Falcon 9".to_string(),
        engine_name: "merlin_1d".to_string(),
        total_engines: 9,
        rings: vec![ring(1, 0.0, "C1", true), ring(8, 1.35, "D8", true)],
        base_diameter: 3.66,
    }
}

/// Falcon Heavy: three Falcon 9 cores.
///
/// The rings list the center engine once and one octaweb per core (25
/// engines) while `total_engines` counts all 27.
pub fn falcon_heavy() -> ClusterGeometry {
    ClusterGeometry {
        name: "Falcon Heavy".to_string(),
        engine_name: "merlin_1d".to_string(),
        total_engines: 27,
        rings: vec![
            ring(1, 0.0, "C1", true),
            ring(8, 1.35, "D8", true),
            ring(8, 1.35, "D8", true),
            ring(8, 1.35, "D8", true),
        ],
        base_diameter: 12.2,
    }
}

/// Super Heavy booster: 3 + 10 + 20 Raptors.
pub fn super_heavy() -> ClusterGeometry {
    ClusterGeometry {
        name: "Super Heavy".to_string(),
        engine_name: "raptor_2".to_string(),
        total_engines: 33,
        rings: vec![
            ring(3, 1.0, "C3", true),
            ring(10, 2.8, "C10", true),
            ring(20, 4.0, "C20", false),
        ],
        base_diameter: 9.0,
    }
}

/// Starship upper stage: three sea-level plus three vacuum Raptors.
pub fn starship() -> ClusterGeometry {
    ClusterGeometry {
        name: "Starship".to_string(),
        engine_name: "raptor_2".to_string(),
        total_engines: 6,
        rings: vec![ring(3, 1.5, "C3", true), ring(3, 3.5, "C3", false)],
        base_diameter: 9.0,
    }
}

pub(crate) fn builtin() -> Vec<(&'static str, ClusterGeometry)> {
    vec![
        ("falcon_9", falcon_9()),
        ("falcon_heavy", falcon_heavy()),
        ("super_heavy", super_heavy()),
        ("starship", starship()),
    ]
}
