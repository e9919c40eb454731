use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use cre_stab::{stability_boundary_sweep, SweepOptions};
use serde::Serialize;

use super::output::{fmt_f64, print_disclaimer, OutputDir};

#[derive(Args, Debug, Serialize)]
pub struct StabilityArgs {
    /// Smallest sensitive time lag [s].
    #[arg(long, default_value_t = 0.1e-3)]
    pub tau_min: f64,
    /// Largest sensitive time lag [s].
    #[arg(long, default_value_t = 5e-3)]
    pub tau_max: f64,
    /// Comma separated frequencies [Hz].
    #[arg(long = "freq", value_delimiter = ',', default_value = "50,135,56")]
    pub frequencies: Vec<f64>,
    /// Total absorption at sea level.
    #[arg(long, default_value_t = 0.12)]
    pub alpha_earth: f64,
    /// Total absorption in vacuum.
    #[arg(long, default_value_t = 0.06)]
    pub alpha_vacuum: f64,
    /// Number of tau samples.
    #[arg(long, default_value_t = 500)]
    pub n_tau: usize,
    /// Coupling gain G.
    #[arg(long, default_value_t = 1.0)]
    pub g_coupling: f64,
    /// Output directory for sweep artefacts.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &StabilityArgs) -> Result<(), Box<dyn Error>> {
    let opts = SweepOptions {
        n_tau: args.n_tau,
        g_coupling: args.g_coupling,
    };
    let result = stability_boundary_sweep(
        (args.tau_min, args.tau_max),
        &args.frequencies,
        args.alpha_earth,
        args.alpha_vacuum,
        &opts,
    )?;

    let mut rows = Vec::new();
    for (env_index, env) in result.environments.iter().enumerate() {
        for (freq_index, freq) in result.frequencies.iter().enumerate() {
            for (tau, n_crit) in result.tau.iter().zip(&result.n_crit[env_index][freq_index]) {
                rows.push(vec![env.clone(), fmt_f64(*freq), fmt_f64(*tau), fmt_f64(*n_crit)]);
            }
        }
    }

    let mut out = OutputDir::create(&args.out)?;
    out.write_json("stability.json", &result)?;
    out.write_csv("stability.csv", &["environment", "frequency_hz", "tau_s", "n_crit"], rows)?;
    out.finish("stability", args)?;
    print_disclaimer();
    Ok(())
}
