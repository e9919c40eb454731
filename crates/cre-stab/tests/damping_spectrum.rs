use cre_config::{default_damping, environment};
use cre_core::{CreError, DampingParameters, Environment};
use cre_stab::{
    breathing_mode_damping, critical_damping_threshold, damping_spectrum,
    damping_spectrum_multi_env, is_mode_stable, CombustionGas, OperatingPoint,
};
use proptest::prelude::*;

#[test]
fn vacuum_breathing_mode_of_33_engines() {
    let params = default_damping();
    let vacuum = environment("lunar_vacuum").expect("vacuum");
    let spectrum = damping_spectrum(33, &params, vacuum).expect("spectrum");
    assert_eq!(spectrum.len(), 33);
    assert_eq!(
        spectrum[0],
        params.zeta_internal + params.zeta_nozzle + params.zeta_feed
    );
    assert!((spectrum[0] - 0.040).abs() < 1e-12);
}

#[test]
fn atmosphere_raises_every_mode() {
    let params = default_damping();
    let earth = environment("earth_sl").expect("earth");
    let vacuum = environment("lunar_vacuum").expect("vacuum");
    let result = damping_spectrum_multi_env(20, &params, &[earth.clone(), vacuum.clone()])
        .expect("multi");
    assert_eq!(result.environments, vec!["earth_sl", "lunar_vacuum"]);
    assert_eq!(result.mode_indices, (0..20).collect::<Vec<_>>());
    assert!(!result.validated);
    for (with_air, without) in result.zeta_total[0].iter().zip(&result.zeta_total[1]) {
        assert!((with_air - without - 0.028).abs() < 1e-12);
    }
    assert!((result.zeta_total[0][10] - (0.040 + 0.028 + 0.044)).abs() < 1e-12);
}

#[test]
fn zero_engines_rejected() {
    let params = DampingParameters::default();
    let earth = environment("earth_sl").expect("earth");
    match damping_spectrum(0, &params, earth) {
        Err(CreError::InvalidInput(info)) => assert_eq!(info.code, "damping_engine_count"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
    assert!(damping_spectrum_multi_env(0, &params, &[]).is_err());
}

#[test]
fn threshold_and_mode_stability() {
    let params = default_damping();
    let vacuum = environment("lunar_vacuum").expect("vacuum");
    let gas = CombustionGas::default();
    let omega_n = 2.0 * std::f64::consts::PI * 2000.0;
    let quarter_period = std::f64::consts::FRAC_PI_2 / omega_n;

    let weak = OperatingPoint { n: 0.5, tau: quarter_period };
    let threshold = critical_damping_threshold(weak, omega_n, &gas).expect("threshold");
    let expected = 0.5 / (2.0 * omega_n) * (0.25 / 1.25) * 0.5;
    assert!((threshold - expected).abs() < 1e-15);
    assert!(is_mode_stable(0, 20, &params, vacuum, weak, omega_n, &gas).expect("stable"));

    assert!(critical_damping_threshold(weak, 0.0, &gas).is_err());
    match is_mode_stable(20, 20, &params, vacuum, weak, omega_n, &gas) {
        Err(CreError::InvalidInput(info)) => assert_eq!(info.code, "damping_mode_index"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn strong_driving_destabilises_breathing_mode_first() {
    let params = default_damping();
    let vacuum = environment("lunar_vacuum").expect("vacuum");
    let gas = CombustionGas::default();
    let omega_n = 1.0;
    let point = OperatingPoint { n: 1.0, tau: std::f64::consts::FRAC_PI_2 };
    // threshold = 1/2 * 0.2 * 0.5 = 0.05, between 0.040 and the coupled modes.
    assert!(!is_mode_stable(0, 4, &params, vacuum, point, omega_n, &gas).expect("mode 0"));
    assert!(is_mode_stable(2, 4, &params, vacuum, point, omega_n, &gas).expect("mode 2"));
}

fn arb_environment() -> impl Strategy<Value = Environment> {
    prop_oneof![
        Just(Environment::new("lunar_vacuum", 0.0, 0.0, 0.0).unwrap()),
        (1.0f64..2.0e5, 1.0f64..1.0e3, 1.0e-4f64..0.1).prop_map(|(p, z, zeta)| {
            Environment::new("custom", p, z, zeta).unwrap()
        }),
    ]
}

fn arb_params() -> impl Strategy<Value = DampingParameters> {
    (0.0f64..0.1, 0.0f64..0.1, 0.0f64..0.1, 0.0f64..0.1).prop_map(
        |(zeta_internal, zeta_nozzle, zeta_feed, zeta_coupling_max)| DampingParameters {
            zeta_internal,
            zeta_nozzle,
            zeta_feed,
            zeta_coupling_max,
            ..Default::default()
        },
    )
}

proptest! {
    #[test]
    fn breathing_mode_matches_spectrum(
        n_engines in 1usize..64,
        params in arb_params(),
        env in arb_environment(),
    ) {
        let spectrum = damping_spectrum(n_engines, &params, &env).unwrap();
        prop_assert_eq!(breathing_mode_damping(&params, &env), spectrum[0]);
    }

    #[test]
    fn spectrum_is_degenerate_and_peaks_at_half(
        half in 1usize..32,
        params in arb_params(),
        env in arb_environment(),
    ) {
        let n_engines = 2 * half;
        let spectrum = damping_spectrum(n_engines, &params, &env).unwrap();
        for n in 1..n_engines {
            prop_assert_eq!(spectrum[n], spectrum[n_engines - n]);
        }
        let max = spectrum.iter().cloned().fold(f64::MIN, f64::max);
        prop_assert_eq!(spectrum[half], max);
    }
}

proptest! {
    #[test]
    fn threshold_grows_with_interaction_index(
        n1 in 0.0f64..5.0,
        step in 0.1f64..5.0,
        tau in 1.0e-5f64..1.0e-2,
        omega_n in 1.0f64..2.0e4,
    ) {
        let gas = CombustionGas::default();
        let n2 = n1 + step;
        let low = critical_damping_threshold(OperatingPoint { n: n1, tau }, omega_n, &gas).unwrap();
        let high = critical_damping_threshold(OperatingPoint { n: n2, tau }, omega_n, &gas).unwrap();
        prop_assert!(low <= high);
        if (omega_n * tau).sin() != 0.0 {
            prop_assert!(low < high);
        }
    }
}
