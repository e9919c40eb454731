use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use cre_config::{normalize_key, Catalog};
use cre_core::{CreError, ErrorInfo};
use cre_phys::acoustics::FIRST_TANGENTIAL;
use cre_phys::{cavity_mode_frequency, chamber_acoustic_modes, nozzle_admittance};
use serde_json::json;

use super::output::{print_disclaimer, print_json};

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Engine or cluster name, e.g. `raptor_2` or "Super Heavy".
    pub name: String,
    /// Optional YAML study adding engines or environments.
    #[arg(long)]
    pub study: Option<PathBuf>,
    /// Speed of sound of the recirculating base gas [m/s].
    #[arg(long, default_value_t = 843.0)]
    pub base_sound_speed: f64,
}

pub fn run(args: &InfoArgs) -> Result<(), Box<dyn Error>> {
    let catalog = Catalog::load(args.study.as_deref())?;
    if catalog.engines.contains(&args.name) {
        let engine = catalog.engines.get(&args.name)?;
        let modes = chamber_acoustic_modes(engine)?;
        print_json(&json!({
            "kind": "engine",
            "engine": engine,
            "acoustic_modes": modes,
            "nozzle_admittance": nozzle_admittance(engine)?,
        }))?;
    } else if catalog.clusters.contains(&args.name) {
        let cluster = catalog.clusters.get(&args.name)?;
        let base_radius = cluster.base_radius();
        let cavity = cavity_mode_frequency(args.base_sound_speed, base_radius, FIRST_TANGENTIAL)?;
        print_json(&json!({
            "kind": "cluster",
            "cluster": cluster,
            "ring_engine_count": cluster.ring_engine_count(),
            "base_radius": base_radius,
            "base_cavity_f_1t": cavity,
        }))?;
    } else {
        let engines = catalog.engines.names().join(", ");
        let clusters = catalog.clusters.names().join(", ");
        return Err(Box::new(CreError::NotFound(
            ErrorInfo::new(
                "unknown_name",
                format!(
                    "'{}' is neither an engine nor a cluster. Engines: {}. Clusters: {}",
                    normalize_key(&args.name),
                    engines,
                    clusters
                ),
            )
            .with_context("engines", engines)
            .with_context("clusters", clusters),
        )));
    }
    print_disclaimer();
    Ok(())
}
