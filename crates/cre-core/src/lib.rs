#![deny(missing_docs)]
#![doc = "Entity models, result records, errors and canonical serialization for the coupled resonance engine."]

pub mod cluster;
pub mod engine;
pub mod environment;
pub mod errors;
pub mod hash;
pub mod results;
/// Canonical JSON serde helpers.
pub mod serde;

pub use cluster::{ClusterGeometry, Ring};
pub use engine::{CombustionCycle, Engine, InjectorType};
pub use environment::{DampingParameters, Environment};
pub use errors::{CreError, ErrorInfo};
pub use hash::{hash_bytes, stable_hash_string};
pub use results::{
    AcousticModes, AmplificationResult, DampingSpectrumResult, StabilitySweepResult, DISCLAIMER,
};
pub use crate::serde::{from_json_slice, to_canonical_json_bytes, to_canonical_json_pretty};
