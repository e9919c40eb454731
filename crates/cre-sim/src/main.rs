use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    amplify::{self, AmplifyArgs},
    damping::{self, DampingArgs},
    info::{self, InfoArgs},
    list,
    ring::{self, RingArgs},
    stability::{self, StabilityArgs},
    version::{self, VersionArgs},
};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "cre-sim", about = "Coupled resonance engine CLI")]
struct Cli {
    /// Enable debug logging on stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the specification of an engine or cluster.
    Info(InfoArgs),
    /// List every built-in engine, cluster and environment.
    List,
    /// Sweep stability boundaries in the (n, tau) plane.
    Stability(StabilityArgs),
    /// Per-mode damping spectrum of one ring in Earth and vacuum.
    Damping(DampingArgs),
    /// Coherent versus incoherent amplification over engine counts.
    Amplify(AmplifyArgs),
    /// Modes, coupling and damping of the rings of a cluster.
    Ring(RingArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Command::Info(args) => info::run(&args),
        Command::List => list::run(),
        Command::Stability(args) => stability::run(&args),
        Command::Damping(args) => damping::run(&args),
        Command::Amplify(args) => amplify::run(&args),
        Command::Ring(args) => ring::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
