use crate::allocation::Rescale;
use crate::strategy::Mode;
use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// simulation-wide knobs that the strategy layer reads.
/// the scheduler owns one of these and hands it down;
/// nothing in here changes during a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// ceiling on pools per operator in splitting mode
    pub max_pools: usize,
    /// fixed seed for reproducible runs, OS entropy otherwise
    pub seed: Option<u64>,
    /// whether players may operate more than one pool
    pub pool_splitting: bool,
    /// operator and delegator samples per activation
    pub candidates: usize,
    pub relative_utility_threshold: Utility,
    pub absolute_utility_threshold: Utility,
    /// slack for budget checks
    pub tolerance: Stake,
    /// optional normalization applied to candidates before validation
    pub rescale: Option<Rescale>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_pools: MAX_POOLS,
            seed: None,
            pool_splitting: false,
            candidates: CANDIDATES,
            relative_utility_threshold: RELATIVE_UTILITY_THRESHOLD,
            absolute_utility_threshold: ABSOLUTE_UTILITY_THRESHOLD,
            tolerance: BUDGET_TOLERANCE,
            rescale: None,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config = serde_json::from_str::<Self>(json)?;
        if config.tolerance < 0. {
            anyhow::bail!("negative budget tolerance {}", config.tolerance);
        }
        Ok(config)
    }

    pub fn mode(&self) -> Mode {
        if self.pool_splitting {
            Mode::Splitting
        } else {
            Mode::Single
        }
    }

    /// random source honoring the configured seed and pool ceiling
    pub fn dice(&self) -> Dice {
        match self.seed {
            Some(seed) => Dice::seeded(seed, self.max_pools),
            None => Dice::entropic(self.max_pools),
        }
    }
}
