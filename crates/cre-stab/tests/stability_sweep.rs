use std::f64::consts::PI;

use cre_core::CreError;
use cre_stab::{
    is_stable, n_critical, n_critical_at, stability_boundary_sweep, stability_margin,
    zeta_minimum, CombustionGas, SweepOptions, N_CRIT_MAX,
};
use proptest::prelude::*;

#[test]
fn vacuum_boundary_never_exceeds_earth() {
    let result = stability_boundary_sweep((0.5e-3, 4e-3), &[135.0], 0.12, 0.06, &SweepOptions::default())
        .expect("sweep");
    assert_eq!(result.environments, vec!["earth_sl", "lunar_vacuum"]);
    assert_eq!(result.tau.len(), 500);
    assert_eq!(result.tau[0], 0.5e-3);
    assert_eq!(result.tau[499], 4e-3);
    assert_eq!(result.n_crit.len(), 2);
    assert_eq!(result.n_crit[0].len(), 1);
    let earth = &result.n_crit[0][0];
    let vacuum = &result.n_crit[1][0];
    for (e, v) in earth.iter().zip(vacuum) {
        assert!(v <= e, "vacuum {v} above earth {e}");
    }
    assert!(earth.iter().any(|value| *value < N_CRIT_MAX));
    assert!(!result.validated);
}

#[test]
fn parallel_rows_match_serial_evaluation() {
    let freqs = [50.0, 135.0, 56.0];
    let opts = SweepOptions { n_tau: 64, g_coupling: 1.3 };
    let result = stability_boundary_sweep((0.1e-3, 5e-3), &freqs, 0.12, 0.06, &opts).expect("sweep");
    for (env, alpha) in [0.12, 0.06].into_iter().enumerate() {
        for (index, f) in freqs.iter().enumerate() {
            let serial = n_critical(&result.tau, alpha, 2.0 * PI * f, 1.3);
            assert_eq!(result.n_crit[env][index], serial);
        }
    }
    let again = stability_boundary_sweep((0.1e-3, 5e-3), &freqs, 0.12, 0.06, &opts).expect("sweep");
    assert_eq!(again, result);
}

#[test]
fn single_point_grid_uses_tau_min() {
    let opts = SweepOptions { n_tau: 1, ..Default::default() };
    let result = stability_boundary_sweep((1e-3, 2e-3), &[100.0], 0.12, 0.06, &opts).expect("sweep");
    assert_eq!(result.tau, vec![1e-3]);
}

#[test]
fn invalid_sweeps_rejected() {
    let opts = SweepOptions::default();
    let code = |result: Result<_, CreError>| match result {
        Err(CreError::InvalidInput(info)) => info.code,
        other => panic!("expected InvalidInput, got {other:?}"),
    };
    assert_eq!(code(stability_boundary_sweep((1e-3, 2e-3), &[], 0.1, 0.1, &opts)), "sweep_frequencies");
    assert_eq!(code(stability_boundary_sweep((2e-3, 1e-3), &[100.0], 0.1, 0.1, &opts)), "sweep_tau_range");
    let empty = SweepOptions { n_tau: 0, ..opts };
    assert_eq!(code(stability_boundary_sweep((1e-3, 2e-3), &[100.0], 0.1, 0.1, &empty)), "sweep_n_tau");
}

#[test]
fn stability_margin_and_verdict() {
    let omega = 2.0 * PI * 135.0;
    let tau = 1e-3;
    let n_c = n_critical_at(tau, 0.12, omega, 1.0);
    assert!(is_stable(n_c * 0.5, tau, 0.12, omega, 1.0));
    assert!(!is_stable(n_c * 1.5, tau, 0.12, omega, 1.0));
    assert!((stability_margin(0.0, tau, 0.12, omega, 1.0) - n_c).abs() < 1e-15);
}

#[test]
fn zeta_minimum_vanishes_without_lag() {
    let gas = CombustionGas::default();
    assert_eq!(zeta_minimum(2.0, 850.0, 0.0, 850.0, &gas).expect("zeta"), 0.0);
    let half_period = PI / 850.0;
    assert!(zeta_minimum(2.0, 850.0, half_period, 850.0, &gas).expect("zeta").abs() < 1e-15);
    assert!(zeta_minimum(2.0, 850.0, 1e-3, 0.0, &gas).is_err());
}

proptest! {
    #[test]
    fn n_crit_is_always_bounded(
        tau in 0.0f64..1.0e-2,
        alpha in 0.0f64..1.0,
        freq in 0.0f64..5.0e3,
        gain in 0.0f64..4.0,
    ) {
        let value = n_critical_at(tau, alpha, 2.0 * PI * freq, gain);
        prop_assert!(value.is_finite());
        prop_assert!((0.0..=N_CRIT_MAX).contains(&value));
    }

    #[test]
    fn singular_lag_clips(alpha in 0.0f64..1.0, freq in 1.0f64..5.0e3) {
        prop_assert_eq!(n_critical_at(0.0, alpha, 2.0 * PI * freq, 1.0), N_CRIT_MAX);
        let gas = CombustionGas::default();
        prop_assert_eq!(zeta_minimum(1.0, 2.0 * PI * freq, 0.0, 2.0 * PI * freq, &gas).unwrap(), 0.0);
    }
}

proptest! {
    #[test]
    fn zeta_minimum_grows_with_interaction_index(
        n1 in 0.0f64..5.0,
        step in 0.1f64..5.0,
        omega in 1.0f64..2.0e4,
        tau in 1.0e-5f64..1.0e-2,
        omega_n in 1.0f64..2.0e4,
    ) {
        prop_assume!((omega * tau).sin() != 0.0);
        let gas = CombustionGas::default();
        let low = zeta_minimum(n1, omega, tau, omega_n, &gas).unwrap();
        let high = zeta_minimum(n1 + step, omega, tau, omega_n, &gas).unwrap();
        prop_assert!(low < high, "{low} !< {high}");
    }
}
