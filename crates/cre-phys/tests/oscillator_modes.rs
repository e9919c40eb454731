use cre_config::engine;
use cre_core::CreError;
use cre_phys::{
    cavity_mode_frequency, chamber_acoustic_modes, engine_natural_frequency, nozzle_admittance,
    rayleigh_criterion,
};

#[test]
fn merlin_first_tangential_near_2020_hz() {
    let merlin = engine("merlin_1d").expect("merlin");
    let modes = chamber_acoustic_modes(merlin).expect("modes");
    assert!((modes.f_1t - 2020.0).abs() < 50.0, "f_1T = {}", modes.f_1t);
    assert!(modes.f_2t > modes.f_1t);
    let omega = engine_natural_frequency(merlin).expect("omega");
    assert!((omega - 2.0 * std::f64::consts::PI * modes.f_1t).abs() < 1e-9);
}

#[test]
fn longitudinal_mode_uses_diameter_as_length() {
    let merlin = engine("merlin_1d").expect("merlin");
    let modes = chamber_acoustic_modes(merlin).expect("modes");
    // c / 2D with D = 0.36 m; the chamber-length approximation is coarse.
    assert!((modes.f_1l - 1722.2).abs() < 200.0);
}

#[test]
fn zero_diameter_engine_rejected() {
    let mut broken = engine("raptor_2").expect("raptor").clone();
    broken.chamber_diameter = 0.0;
    match chamber_acoustic_modes(&broken) {
        Err(CreError::InvalidInput(info)) => assert_eq!(info.code, "engine_chamber_diameter"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
    assert!(engine_natural_frequency(&broken).is_err());
}

#[test]
fn nozzle_admittance_is_positive() {
    for name in ["merlin_1d", "raptor_2", "raptor_3", "rvac_2"] {
        let y = nozzle_admittance(engine(name).expect("engine")).expect("admittance");
        assert!(y > 0.0, "{name}: {y}");
    }
}

#[test]
fn falcon_class_base_cavity_near_135_hz() {
    let f = cavity_mode_frequency(843.0, 1.83, (1, 1)).expect("cavity");
    assert!((f - 135.0).abs() < 10.0, "f = {f}");
}

#[test]
fn untabulated_cavity_mode_lists_available() {
    match cavity_mode_frequency(343.0, 1.0, (4, 4)) {
        Err(CreError::InvalidInput(info)) => {
            assert_eq!(info.code, "cavity_mode");
            let hint = info.hint.expect("hint");
            assert!(hint.contains("(1, 1)"));
            assert!(hint.contains("(1, 2)"));
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
    assert!(cavity_mode_frequency(343.0, 0.0, (1, 1)).is_err());
}

#[test]
fn rayleigh_sign_follows_phase() {
    let samples = 1000;
    let phase: Vec<f64> = (0..samples)
        .map(|i| 2.0 * std::f64::consts::PI * i as f64 / (samples - 1) as f64)
        .collect();
    let p: Vec<f64> = phase.iter().map(|t| t.sin()).collect();
    let in_phase = p.clone();
    let quadrature: Vec<f64> = phase.iter().map(|t| t.cos()).collect();
    let anti_phase: Vec<f64> = p.iter().map(|v| -v).collect();

    let driving = rayleigh_criterion(&p, &in_phase).expect("in phase");
    let neutral = rayleigh_criterion(&p, &quadrature).expect("quadrature");
    let damping = rayleigh_criterion(&p, &anti_phase).expect("anti phase");

    assert!(driving > 0.0);
    assert!((driving - 499.5).abs() < 1.0, "in phase = {driving}");
    assert!(neutral.abs() < 1e-9, "quadrature = {neutral}");
    assert!(damping < 0.0);
    assert!(driving > neutral && driving > damping);
}
