use cre_config::{cluster, default_damping, engine, environment};
use cre_stab::{analyze_cluster, analyze_ring, damping_spectrum};

#[test]
fn super_heavy_outer_ring_in_vacuum() {
    let sh = cluster("super_heavy").expect("cluster");
    let raptor = engine(&sh.engine_name).expect("engine");
    let vacuum = environment("lunar_vacuum").expect("vacuum");
    let params = default_damping();
    let outer = sh.ring(2).expect("outer ring");

    let analysis = analyze_ring(raptor, outer, 2, vacuum, &params).expect("analysis");
    assert_eq!(analysis.n_engines, 20);
    assert_eq!(analysis.coupling.atmospheric, 0.0);
    assert!(analysis.coupling.structural > 0.0);
    assert_eq!(analysis.mode_frequencies.len(), 20);
    assert_eq!(analysis.frequency_ratios[0], 1.0);
    assert_eq!(analysis.omega_0, analysis.mode_frequencies[0]);
    assert_eq!(analysis.zeta_total, damping_spectrum(20, &params, vacuum).expect("spectrum"));
    assert_eq!(analysis.breathing_zeta, analysis.zeta_total[0]);
    assert!(analysis.mode_frequencies[10] >= analysis.mode_frequencies[1]);
    assert!(!analysis.validated);
}

#[test]
fn cluster_rings_are_independent() {
    let f9 = cluster("falcon_9").expect("cluster");
    let merlin = engine("merlin_1d").expect("engine");
    let earth = environment("earth_sl").expect("earth");
    let params = default_damping();

    let rings = analyze_cluster(f9, merlin, earth, &params).expect("cluster");
    assert_eq!(rings.len(), 2);
    assert_eq!(rings[0].n_engines, 1);
    assert_eq!(rings[0].coupling.total(), 0.0);
    assert_eq!(rings[0].mode_frequencies.len(), 1);

    let alone = analyze_ring(merlin, &f9.rings[1], 1, earth, &params).expect("ring");
    assert_eq!(rings[1], alone);
}

#[test]
fn analysis_serializes() {
    let sh = cluster("starship").expect("cluster");
    let raptor = engine("raptor_2").expect("engine");
    let earth = environment("earth_sl").expect("earth");
    let rings = analyze_cluster(sh, raptor, earth, &default_damping()).expect("cluster");
    let json = serde_json::to_string(&rings).expect("json");
    let decoded: Vec<cre_stab::RingAnalysis> = serde_json::from_str(&json).expect("decode");
    assert_eq!(decoded, rings);
}

#[test]
fn massless_engine_fails_validation_first() {
    let f9 = cluster("falcon_9").expect("cluster");
    let mut merlin = engine("merlin_1d").expect("engine").clone();
    merlin.mass = 0.0;
    let earth = environment("earth_sl").expect("earth");
    match analyze_ring(&merlin, &f9.rings[1], 1, earth, &default_damping()) {
        Err(cre_core::CreError::InvalidInput(info)) => assert_eq!(info.code, "engine_mass"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}
