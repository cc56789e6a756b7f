use crate::Stake;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// the only source of randomness in the crate.
/// uniform draws in [0, 1) for weights and margins,
/// uniform integers in [0, max_pools] for pool counts.
/// seeding it fixes every candidate downstream.
#[derive(Debug, Clone)]
pub struct Dice {
    rng: SmallRng,
    max_pools: usize,
}

impl Dice {
    pub fn seeded(seed: u64, max_pools: usize) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            max_pools,
        }
    }

    pub fn entropic(max_pools: usize) -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
            max_pools,
        }
    }

    pub fn max_pools(&self) -> usize {
        self.max_pools
    }

    /// uniform in [0, 1)
    pub fn unit(&mut self) -> Stake {
        self.rng.random::<Stake>()
    }

    /// uniform in [0, max_pools], both ends inclusive
    pub fn pools(&mut self) -> usize {
        self.rng.random_range(0..=self.max_pools)
    }

    /// fair coin
    pub fn flip(&mut self) -> bool {
        self.rng.random::<bool>()
    }

    /// independent child stream. deterministic given
    /// the parent's state, so forking once per player
    /// before fanning out keeps parallel runs reproducible.
    pub fn fork(&mut self) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(self.rng.random::<u64>()),
            max_pools: self.max_pools,
        }
    }
}
