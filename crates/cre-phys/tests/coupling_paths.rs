use cre_config::{engine, environment};
use cre_core::CreError;
use cre_phys::coupling::{engine_stiffness, MIN_SPACING};
use cre_phys::{
    coupling_atmospheric, coupling_breakdown, coupling_feed, coupling_structural,
    penetration_knudsen, penetration_knudsen_profile, ring_spacing, total_coupling,
};

#[test]
fn vacuum_total_is_structural_plus_feed() {
    let vacuum = environment("lunar_vacuum").expect("vacuum");
    let raptor = engine("raptor_2").expect("raptor");
    let total = total_coupling(vacuum, raptor, 4.0, 20);
    assert_eq!(coupling_atmospheric(vacuum, raptor, 4.0, 20), 0.0);
    assert_eq!(
        total,
        coupling_structural(raptor, 4.0, 20) + coupling_feed(raptor, 20)
    );
}

#[test]
fn single_engine_ring_has_no_coupling() {
    let earth = environment("earth_sl").expect("earth");
    let merlin = engine("merlin_1d").expect("merlin");
    let breakdown = coupling_breakdown(earth, merlin, 0.0, 1);
    assert_eq!(breakdown.atmospheric, 0.0);
    assert_eq!(breakdown.structural, 0.0);
    assert_eq!(breakdown.feed, 0.0);
    assert_eq!(breakdown.total(), 0.0);
}

#[test]
fn atmosphere_adds_coupling() {
    let earth = environment("earth_sl").expect("earth");
    let vacuum = environment("lunar_vacuum").expect("vacuum");
    let merlin = engine("merlin_1d").expect("merlin");
    let atm = coupling_atmospheric(earth, merlin, 1.35, 8);
    assert!(atm > 0.0);
    assert!(total_coupling(earth, merlin, 1.35, 8) > total_coupling(vacuum, merlin, 1.35, 8));
}

#[test]
fn zero_radius_uses_spacing_floor() {
    let raptor = engine("raptor_2").expect("raptor");
    assert_eq!(ring_spacing(0.0, 3), 0.0);
    let expected = 0.02 * engine_stiffness(raptor) * raptor.nozzle_exit_diameter / MIN_SPACING;
    assert_eq!(coupling_structural(raptor, 0.0, 3), expected);
    assert!(coupling_structural(raptor, 0.0, 3).is_finite());
}

#[test]
fn feed_coupling_depends_on_cycle() {
    let merlin = engine("merlin_1d").expect("merlin");
    let mut ffsc = merlin.clone();
    ffsc.cycle = cre_core::CombustionCycle::Ffscc;
    let ratio = coupling_feed(&ffsc, 9) / coupling_feed(merlin, 9);
    assert!((ratio - 0.015 / 0.008).abs() < 1e-12);
}

#[test]
fn feed_coupling_reaches_nominal_fraction_at_33() {
    let raptor = engine("raptor_2").expect("raptor");
    let expected = 0.015 * engine_stiffness(raptor);
    assert!((coupling_feed(raptor, 33) - expected).abs() <= expected * 1e-12);
}

#[test]
fn knudsen_profile_and_domain() {
    let quarter = std::f64::consts::FRAC_PI_2;
    let kn = penetration_knudsen(0.1, 2.0, 1.0, 0.5, quarter).expect("kn");
    assert!((kn - 0.1).abs() < 1e-12);
    let profile = penetration_knudsen_profile(0.1, 2.0, 1.0, 0.5, &[0.5, quarter, 2.0]).expect("profile");
    assert_eq!(profile.len(), 3);
    assert_eq!(profile[1], kn);

    match penetration_knudsen(0.1, 2.0, 1.0, 0.5, 0.0) {
        Err(CreError::InvalidInput(info)) => assert_eq!(info.code, "knudsen_angle"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
    assert!(penetration_knudsen(0.1, 2.0, 1.0, 0.0, quarter).is_err());
    assert!(penetration_knudsen_profile(0.1, 2.0, 1.0, 0.5, &[quarter, -1.0]).is_err());
}

#[test]
fn knudsen_falls_as_angle_opens() {
    let thetas: Vec<f64> = (0..24).map(|i| 0.05 + 0.05 * i as f64).collect();
    assert!(*thetas.last().expect("angles") <= 1.2 + 1e-12);
    let profile = penetration_knudsen_profile(0.1, 2.0, 1.0, 0.5, &thetas).expect("profile");
    for pair in profile.windows(2) {
        assert!(pair[1] < pair[0], "{} !< {}", pair[1], pair[0]);
    }
}

#[test]
fn hexagon_spacing_equals_radius() {
    assert!((ring_spacing(2.0, 6) - 2.0).abs() < 1e-12);
    assert_eq!(ring_spacing(2.0, 1), 0.0);
}
