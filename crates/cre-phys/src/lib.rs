#![deny(missing_docs)]
#![doc = "Closed-form physics of a single engine and of a ring of coupled engines."]

pub mod acoustics;
pub mod coupled_modes;
pub mod coupling;
pub mod crocco;
pub mod oscillator;

pub use acoustics::{acoustic_transfer_function, cavity_mode_frequency, CAVITY_MODES};
pub use coupled_modes::{
    mode_frequency_ratios, mode_shape_factor, normal_mode_frequencies,
    normal_mode_frequencies_squared,
};
pub use coupling::{
    coupling_atmospheric, coupling_breakdown, coupling_feed, coupling_structural, engine_stiffness,
    penetration_knudsen, penetration_knudsen_profile, ring_spacing, total_coupling,
    CouplingBreakdown,
};
pub use crocco::{crocco_magnitude, crocco_phase, crocco_response, crocco_response_at};
pub use oscillator::{
    chamber_acoustic_modes, engine_natural_frequency, nozzle_admittance, rayleigh_criterion,
};
