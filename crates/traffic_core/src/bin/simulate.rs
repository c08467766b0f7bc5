use anyhow::Result;
use clap::Parser;

use traffic_core::prelude::*;

/// Builds the sample traffic network and prints the shortest-path
/// simulation reports.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Seed for road weight generation. Drawn from OS entropy if not set
    #[arg(short, long)]
    seed: Option<u64>,

    /// Intersection the timed simulation starts from
    #[arg(long, default_value_t = 0)]
    source: usize,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut weights = match cli.seed {
        Some(seed) => RandomWeights::from_seed(seed),
        None => RandomWeights::from_entropy(),
    };

    let network = sample_network(&mut weights)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    simulate_traffic(&mut out, &network, node_index(cli.source))?;
    optimize_traffic_lights(&mut out, &network)?;

    Ok(())
}
