use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use cre_config::Catalog;
use cre_stab::damping_spectrum_multi_env;
use serde::Serialize;
use tracing::info;

use super::output::{fmt_f64, print_disclaimer, OutputDir};

#[derive(Args, Debug, Serialize)]
pub struct DampingArgs {
    /// Cluster whose ring is analysed.
    #[arg(long, default_value = "super_heavy")]
    pub cluster: String,
    /// Ring index within the cluster, innermost first.
    #[arg(long, default_value_t = 2)]
    pub ring_index: usize,
    /// Environments to evaluate.
    #[arg(long = "environment", value_delimiter = ',', default_value = "earth_sl,lunar_vacuum")]
    pub environments: Vec<String>,
    /// Optional YAML study overriding damping or adding environments.
    #[arg(long)]
    pub study: Option<PathBuf>,
    /// Output directory for spectrum artefacts.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &DampingArgs) -> Result<(), Box<dyn Error>> {
    let catalog = Catalog::load(args.study.as_deref())?;
    let cluster = catalog.clusters.get(&args.cluster)?;
    let ring = cluster.ring(args.ring_index)?;
    let environments = args
        .environments
        .iter()
        .map(|name| catalog.environments.get(name).cloned())
        .collect::<Result<Vec<_>, _>>()?;
    info!(cluster = %cluster.name, n_engines = ring.n_engines, "damping spectrum");

    let result = damping_spectrum_multi_env(ring.n_engines, &catalog.damping, &environments)?;

    let mut rows = Vec::new();
    for (env, zetas) in result.environments.iter().zip(&result.zeta_total) {
        for (mode, zeta) in result.mode_indices.iter().zip(zetas) {
            rows.push(vec![env.clone(), mode.to_string(), fmt_f64(*zeta)]);
        }
    }

    let mut out = OutputDir::create(&args.out)?;
    out.write_json("damping.json", &result)?;
    out.write_csv("damping.csv", &["environment", "mode", "zeta_total"], rows)?;
    out.finish("damping", args)?;
    print_disclaimer();
    Ok(())
}
