#![deny(missing_docs)]
#![doc = "Damping spectra, stability boundaries and amplification for rings of coupled engines."]

pub mod amplification;
pub mod damping;
pub mod ring;
pub mod stability;

pub use amplification::{
    amplification_ratio, amplification_sweep, coherent_amplification, damping_margin_ratio,
    incoherent_amplification,
};
pub use damping::{
    breathing_mode_damping, critical_damping_threshold, damping_spectrum,
    damping_spectrum_multi_env, is_mode_stable, CombustionGas, OperatingPoint,
};
pub use ring::{analyze_cluster, analyze_ring, RingAnalysis};
pub use stability::{
    is_stable, linspace, n_critical, n_critical_at, stability_boundary_sweep, stability_margin,
    zeta_minimum, SweepOptions, N_CRIT_MAX,
};
