//! Strategy sampling for proof-of-stake pooling games.
//!
//! Players split a stake budget between operating their own pools
//! (pledge + margin) and delegating to pools run by others. This crate
//! owns the strategy shapes and the constrained-random candidate
//! generators that a best-response simulation samples from.
pub mod allocation;
pub mod config;
pub mod dice;
pub mod pools;
pub mod search;
pub mod strategy;

pub use config::*;
pub use dice::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Index of a player, which doubles as the index of their pool slot(s).
pub type PlayerId = usize;
/// Absolute stake amounts: budgets, pledges, allocations.
pub type Stake = f64;
/// Fee fraction an operator charges delegators, in [0, 1).
pub type Margin = f64;
/// Externally computed payoff of a strategy.
pub type Utility = f64;

// ============================================================================
// DEFAULT PARAMETERS
// ============================================================================
/// Ceiling on pools per operator when pool splitting is allowed.
pub const MAX_POOLS: usize = 10;
/// Slack allowed when comparing allocated stake against a budget.
pub const BUDGET_TOLERANCE: Stake = 1e-9;
/// Utility increase ratio under which moves are disregarded.
pub const RELATIVE_UTILITY_THRESHOLD: Utility = 0.1;
/// Utility increase under which moves are disregarded.
pub const ABSOLUTE_UTILITY_THRESHOLD: Utility = 1e-9;
/// Operator and delegator candidates sampled per activation.
pub const CANDIDATES: usize = 1;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
