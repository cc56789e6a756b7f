use super::*;
use crate::Margin;
use crate::pools::Pool;
use serde::Deserialize;
use serde::Serialize;

/// a player who may split their stake across several pools of their own.
///
/// `stake_allocations` is indexed by owner, then by that owner's slot.
/// the player's own group holds one entry per pool they run, and those
/// entries are the pledges: `pool_pledges` mirrors that group rather than
/// being drawn on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiPoolStrategy {
    number_of_pools: usize,
    pool_pledges: Vec<Stake>,
    pool_margins: Vec<Margin>,
    stake_allocations: Vec<Vec<Stake>>,
    is_pool_operator: bool,
}

impl MultiPoolStrategy {
    pub fn new(
        number_of_pools: usize,
        pool_pledges: Vec<Stake>,
        pool_margins: Vec<Margin>,
        stake_allocations: Vec<Vec<Stake>>,
        is_pool_operator: bool,
    ) -> Self {
        Self {
            number_of_pools,
            pool_pledges,
            pool_margins,
            stake_allocations,
            is_pool_operator,
        }
    }
    pub fn number_of_pools(&self) -> usize {
        self.number_of_pools
    }
    pub fn pool_pledges(&self) -> &[Stake] {
        &self.pool_pledges
    }
    pub fn pool_margins(&self) -> &[Margin] {
        &self.pool_margins
    }
    pub fn stake_allocations(&self) -> &[Vec<Stake>] {
        &self.stake_allocations
    }

    /// operator and delegator candidates come from the same draw:
    /// the player's own group is replaced by a fresh set of empty
    /// slots for the pools they are about to open, and every slot
    /// that is either theirs or hosts an active pool gets a weight.
    ///
    /// weights are uniform in [0,1) and are NOT normalized to the
    /// budget. see [`Strategy::rescale`]. a player with no stake
    /// draws nothing but zeros.
    fn draw(pools: &[Vec<Option<Pool>>], player: PlayerId, stake: Stake, dice: &mut Dice) -> Self {
        let number_of_pools = dice.pools();
        let pool_margins = (0..number_of_pools)
            .map(|_| dice.unit())
            .collect::<Vec<_>>();
        let mut weight = || match stake > 0. {
            true => dice.unit(),
            false => 0.,
        };
        let stake_allocations = pools
            .iter()
            .enumerate()
            .map(|(i, group)| match i == player {
                true => (0..number_of_pools)
                    .map(|_| weight())
                    .collect::<Vec<_>>(),
                false => group
                    .iter()
                    .map(|pool| match pool {
                        Some(_) => weight(),
                        None => 0.,
                    })
                    .collect::<Vec<_>>(),
            })
            .collect::<Vec<_>>();
        let pool_pledges = stake_allocations[player].clone();
        let is_pool_operator = pool_pledges.iter().any(|&p| p > 0.);
        log::trace!(
            "player {} draws {} pools pledging {}",
            player,
            number_of_pools,
            listing(&pool_pledges)
        );
        Self::new(
            number_of_pools,
            pool_pledges,
            pool_margins,
            stake_allocations,
            is_pool_operator,
        )
    }
}

impl Strategy for MultiPoolStrategy {
    type Pools = [Vec<Option<Pool>>];

    fn is_pool_operator(&self) -> bool {
        self.is_pool_operator
    }

    fn allocations(&self) -> impl Iterator<Item = Stake> + '_ {
        self.stake_allocations.iter().flatten().copied()
    }

    fn random_operator(
        &self,
        pools: &Self::Pools,
        player: PlayerId,
        stake: Stake,
        dice: &mut Dice,
    ) -> Self {
        Self::draw(pools, player, stake, dice)
    }

    fn random_delegator(
        &self,
        pools: &Self::Pools,
        player: PlayerId,
        stake: Stake,
        dice: &mut Dice,
    ) -> Self {
        Self::draw(pools, player, stake, dice)
    }

    /// `n_pools` single-slot groups; pool count, pledges and
    /// margins are redrawn independently of them
    fn randomize(&mut self, n_pools: usize, dice: &mut Dice) -> &mut Self {
        self.number_of_pools = dice.pools();
        self.pool_pledges = (0..self.number_of_pools).map(|_| dice.unit()).collect();
        self.pool_margins = (0..self.number_of_pools).map(|_| dice.unit()).collect();
        self.stake_allocations = (0..n_pools).map(|_| vec![dice.unit()]).collect();
        self
    }

    fn validate(
        &self,
        pools: &Self::Pools,
        player: PlayerId,
        stake: Stake,
        config: &Config,
    ) -> Result<(), Violation> {
        if self.number_of_pools > config.max_pools {
            return Err(Violation::PoolCount {
                count: self.number_of_pools,
                max: config.max_pools,
            });
        }
        if self.pool_pledges.len() != self.number_of_pools
            || self.pool_margins.len() != self.number_of_pools
        {
            return Err(Violation::Shape {
                pools: self.number_of_pools,
                pledges: self.pool_pledges.len(),
                margins: self.pool_margins.len(),
            });
        }
        if self.stake_allocations.len() != pools.len() {
            return Err(Violation::Targets {
                owner: None,
                expected: pools.len(),
                found: self.stake_allocations.len(),
            });
        }
        if self.stake_allocations[player] != self.pool_pledges {
            return Err(Violation::Pledges);
        }
        signed(self.allocations())?;
        budgeted(self.allocated(), stake, config.tolerance)?;
        for (owner, (group, slots)) in self.stake_allocations.iter().zip(pools).enumerate() {
            if owner == player {
                continue;
            }
            if group.len() != slots.len() {
                return Err(Violation::Targets {
                    owner: Some(owner),
                    expected: slots.len(),
                    found: group.len(),
                });
            }
            for (slot, (amount, pool)) in group.iter().zip(slots).enumerate() {
                if pool.is_none() && *amount > 0. {
                    return Err(Violation::Unoccupied {
                        owner,
                        slot,
                        amount: *amount,
                    });
                }
            }
        }
        self.pool_margins
            .iter()
            .enumerate()
            .try_for_each(|(slot, &margin)| bounded(slot, margin))
    }

    /// the own group decides the pool count. margins beyond it are
    /// dropped and missing ones are opened at zero.
    fn rescale(&self, player: PlayerId, stake: Stake, policy: Rescale) -> Self {
        let stake_allocations = policy.apply(&self.stake_allocations, player, stake);
        let pool_pledges = stake_allocations[player].clone();
        let number_of_pools = pool_pledges.len();
        let mut pool_margins = self.pool_margins.clone();
        pool_margins.resize(number_of_pools, 0.);
        let is_pool_operator = pool_pledges.iter().any(|&p| p > 0.);
        Self::new(
            number_of_pools,
            pool_pledges,
            pool_margins,
            stake_allocations,
            is_pool_operator,
        )
    }
}

impl std::fmt::Display for MultiPoolStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let groups = self
            .stake_allocations
            .iter()
            .map(|group| listing(group))
            .collect::<Vec<_>>()
            .join(" ");
        write!(
            f,
            "pools: {} | pledges: {} | margins: {} | allocations: {}",
            self.number_of_pools,
            listing(&self.pool_pledges),
            listing(&self.pool_margins),
            groups,
        )
    }
}
