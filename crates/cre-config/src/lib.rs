#![deny(missing_docs)]
#![doc = "Built-in catalogue of engines, clusters and environments, with YAML study overrides."]

pub mod clusters;
pub mod engines;
pub mod environments;
pub mod registry;
pub mod study;

pub use environments::default_damping;
pub use registry::{
    cluster, cluster_names, cluster_registry, engine, engine_names, engine_registry, environment,
    environment_names, environment_registry, normalize_key, Registry,
};
pub use study::{load_study, parse_study, Catalog, StudyConfig};
