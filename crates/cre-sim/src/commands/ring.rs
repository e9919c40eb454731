use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use cre_config::Catalog;
use cre_stab::{analyze_cluster, analyze_ring};
use serde::Serialize;

use super::output::{fmt_f64, print_disclaimer, OutputDir};

#[derive(Args, Debug, Serialize)]
pub struct RingArgs {
    /// Cluster to analyse.
    #[arg(long, default_value = "super_heavy")]
    pub cluster: String,
    /// Single ring to analyse; every ring when omitted.
    #[arg(long)]
    pub ring_index: Option<usize>,
    /// Operating environment.
    #[arg(long, default_value = "earth_sl")]
    pub environment: String,
    /// Optional YAML study with engine, environment or damping overrides.
    #[arg(long)]
    pub study: Option<PathBuf>,
    /// Output directory for ring artefacts.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &RingArgs) -> Result<(), Box<dyn Error>> {
    let catalog = Catalog::load(args.study.as_deref())?;
    let (cluster, engine) = catalog.cluster_with_engine(&args.cluster)?;
    let environment = catalog.environments.get(&args.environment)?;

    let analyses = match args.ring_index {
        Some(index) => vec![analyze_ring(
            engine,
            cluster.ring(index)?,
            index,
            environment,
            &catalog.damping,
        )?],
        None => analyze_cluster(cluster, engine, environment, &catalog.damping)?,
    };

    let mut rows = Vec::new();
    for analysis in &analyses {
        for (mode, omega) in analysis.mode_frequencies.iter().enumerate() {
            rows.push(vec![
                analysis.ring_index.to_string(),
                mode.to_string(),
                fmt_f64(*omega),
                fmt_f64(analysis.frequency_ratios[mode]),
                fmt_f64(analysis.zeta_total[mode]),
            ]);
        }
    }

    let mut out = OutputDir::create(&args.out)?;
    out.write_json("ring.json", &analyses)?;
    out.write_csv(
        "ring.csv",
        &["ring_index", "mode", "omega_rad_s", "frequency_ratio", "zeta_total"],
        rows,
    )?;
    out.finish("ring", args)?;
    print_disclaimer();
    Ok(())
}
