//! Sample Binary
//!
//! Draws a random pool landscape, then operator and delegator
//! candidates for one player, and prints them for inspection.

use clap::Parser;
use pooling_games::allocation::Rescale;
use pooling_games::pools::Landscape;
use pooling_games::strategy::Stance;
use pooling_games::strategy::Strategy;
use pooling_games::*;

#[derive(Parser)]
#[command(author, version, about = "Inspect candidate strategies", long_about = None)]
struct Args {
    #[arg(long, default_value_t = 100, help = "Number of players")]
    players: usize,
    #[arg(long, default_value_t = 0, help = "Acting player")]
    player: PlayerId,
    #[arg(long, default_value_t = 0.01, help = "Acting player's stake")]
    stake: Stake,
    #[arg(long, default_value_t = MAX_POOLS, help = "Pool ceiling per operator")]
    max_pools: usize,
    #[arg(long, help = "Seed for reproducibility")]
    seed: Option<u64>,
    #[arg(long, help = "Allow players to operate several pools")]
    pool_splitting: bool,
    #[arg(long, default_value_t = CANDIDATES, help = "Samples per role")]
    candidates: usize,
    #[arg(long, value_parser = rescale, help = "Rescale policy: global | staged")]
    rescale: Option<Rescale>,
    #[arg(long, help = "JSON config file; flags above are ignored when given")]
    config: Option<std::path::PathBuf>,
}

fn rescale(s: &str) -> Result<Rescale, String> {
    match s.to_lowercase().as_str() {
        "global" => Ok(Rescale::Global),
        "staged" => Ok(Rescale::Staged),
        _ => Err(format!("unknown rescale policy {}", s)),
    }
}

impl Args {
    fn config(&self) -> anyhow::Result<Config> {
        match self.config {
            Some(ref path) => Config::from_json(&std::fs::read_to_string(path)?),
            None => Ok(Config {
                max_pools: self.max_pools,
                seed: self.seed,
                pool_splitting: self.pool_splitting,
                candidates: self.candidates,
                rescale: self.rescale,
                ..Config::default()
            }),
        }
    }
}

fn main() -> anyhow::Result<()> {
    log()?;
    let args = Args::parse();
    let config = args.config()?;
    if args.player >= args.players {
        anyhow::bail!("player {} out of {} players", args.player, args.players);
    }
    let ref mut dice = config.dice();
    let pools = Landscape::sample(config.mode(), args.players, dice);
    log::info!(
        "{} landscape with {} active pools across {} players",
        pools.mode(),
        pools.active(),
        pools.len()
    );
    let current = Stance::blank(config.mode());
    let mut candidates = Vec::new();
    for _ in 0..config.candidates {
        candidates.push(current.random_operator(&pools, args.player, args.stake, dice));
        candidates.push(current.random_delegator(&pools, args.player, args.stake, dice));
    }
    for candidate in candidates.iter_mut() {
        if let Some(policy) = config.rescale {
            *candidate = candidate.rescale(args.player, args.stake, policy);
        }
        match candidate.validate(&pools, args.player, args.stake, &config) {
            Ok(()) => log::info!("valid   {}", candidate),
            Err(e) => log::info!("invalid {} ({})", candidate, e),
        }
    }
    println!("{}", serde_json::to_string_pretty(&candidates)?);
    Ok(())
}
