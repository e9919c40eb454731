use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use cre_config::Catalog;
use cre_stab::amplification_sweep;
use serde::Serialize;

use super::output::{fmt_f64, print_disclaimer, OutputDir};

#[derive(Args, Debug, Serialize)]
pub struct AmplifyArgs {
    /// Smallest engine count.
    #[arg(long, default_value_t = 1)]
    pub n_min: usize,
    /// Largest engine count, inclusive.
    #[arg(long, default_value_t = 40)]
    pub n_max: usize,
    /// Optional YAML study overriding damping.
    #[arg(long)]
    pub study: Option<PathBuf>,
    /// Output directory for amplification artefacts.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &AmplifyArgs) -> Result<(), Box<dyn Error>> {
    let catalog = Catalog::load(args.study.as_deref())?;
    let result = amplification_sweep((args.n_min, args.n_max), &catalog.damping)?;

    let margins = result.damping_margin_ratio.clone().unwrap_or_default();
    let rows = result.n_engines.iter().enumerate().map(|(index, n)| {
        vec![
            n.to_string(),
            fmt_f64(result.coherent[index]),
            fmt_f64(result.incoherent[index]),
            fmt_f64(result.ratio[index]),
            margins.get(index).map(|m| fmt_f64(*m)).unwrap_or_default(),
        ]
    });

    let mut out = OutputDir::create(&args.out)?;
    out.write_csv(
        "amplification.csv",
        &["n_engines", "coherent", "incoherent", "ratio", "damping_margin_ratio"],
        rows,
    )?;
    out.write_json("amplification.json", &result)?;
    out.finish("amplify", args)?;
    print_disclaimer();
    Ok(())
}
