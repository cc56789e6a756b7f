use super::*;
use crate::Margin;
use crate::pools::Pool;
use serde::Deserialize;
use serde::Serialize;

/// a player who runs at most one pool.
///
/// allocations are indexed by pool owner. when operating, the entry at
/// the player's own index *is* the pledge; pledge and margin stay unset
/// for pure delegators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SinglePoolStrategy {
    pledge: Option<Stake>,
    margin: Option<Margin>,
    stake_allocations: Vec<Stake>,
    is_pool_operator: bool,
}

impl SinglePoolStrategy {
    pub fn new(
        pledge: Option<Stake>,
        margin: Option<Margin>,
        stake_allocations: Vec<Stake>,
        is_pool_operator: bool,
    ) -> Self {
        Self {
            pledge,
            margin,
            stake_allocations,
            is_pool_operator,
        }
    }
    pub fn pledge(&self) -> Option<Stake> {
        self.pledge
    }
    pub fn margin(&self) -> Option<Margin> {
        self.margin
    }
    pub fn stake_allocations(&self) -> &[Stake] {
        &self.stake_allocations
    }
}

impl Strategy for SinglePoolStrategy {
    type Pools = [Option<Pool>];

    fn is_pool_operator(&self) -> bool {
        self.is_pool_operator
    }

    fn allocations(&self) -> impl Iterator<Item = Stake> + '_ {
        self.stake_allocations.iter().copied()
    }

    /// pledge the whole budget to a new pool at a uniform margin
    fn random_operator(
        &self,
        pools: &Self::Pools,
        player: PlayerId,
        stake: Stake,
        dice: &mut Dice,
    ) -> Self {
        let margin = dice.unit();
        let mut stake_allocations = vec![0.; pools.len()];
        stake_allocations[player] = stake;
        log::trace!("player {} operates with margin {:.4}", player, margin);
        Self::new(Some(stake), Some(margin), stake_allocations, true)
    }

    /// spread the whole budget over other players' active pools
    fn random_delegator(
        &self,
        pools: &Self::Pools,
        player: PlayerId,
        stake: Stake,
        dice: &mut Dice,
    ) -> Self {
        assert!(player < pools.len(), "player {} has no slot", player);
        let weights = pools
            .iter()
            .enumerate()
            .map(|(i, pool)| match i != player && pool.is_some() {
                true => dice.unit(),
                false => 0.,
            })
            .collect::<Vec<_>>();
        let stake_allocations = crate::allocation::normalize(&weights, stake);
        log::trace!("player {} delegates {}", player, listing(&stake_allocations));
        Self::new(None, None, stake_allocations, false)
    }

    fn randomize(&mut self, n_pools: usize, dice: &mut Dice) -> &mut Self {
        self.pledge = Some(dice.unit());
        self.margin = Some(dice.unit());
        self.stake_allocations = (0..n_pools).map(|_| dice.unit()).collect();
        self
    }

    fn validate(
        &self,
        pools: &Self::Pools,
        player: PlayerId,
        stake: Stake,
        config: &Config,
    ) -> Result<(), Violation> {
        if self.stake_allocations.len() != pools.len() {
            return Err(Violation::Targets {
                owner: None,
                expected: pools.len(),
                found: self.stake_allocations.len(),
            });
        }
        signed(self.allocations())?;
        budgeted(self.allocated(), stake, config.tolerance)?;
        let own = self.stake_allocations[player];
        for (owner, (amount, pool)) in self.stake_allocations.iter().zip(pools).enumerate() {
            if owner != player && pool.is_none() && *amount > 0. {
                return Err(Violation::Unoccupied {
                    owner,
                    slot: 0,
                    amount: *amount,
                });
            }
        }
        if let Some(margin) = self.margin {
            bounded(player, margin)?;
        }
        if self.is_pool_operator {
            match (self.pledge, self.margin) {
                (Some(pledge), Some(_)) if (pledge - own).abs() <= config.tolerance => Ok(()),
                (Some(_), None) => Err(Violation::Unpriced { player }),
                (pledge, _) => Err(Violation::Pledge {
                    expected: own,
                    found: pledge,
                }),
            }
        } else if own > 0. {
            Err(Violation::SelfDelegation { player, amount: own })
        } else {
            Ok(())
        }
    }

    fn rescale(&self, player: PlayerId, stake: Stake, policy: Rescale) -> Self {
        let groups = self
            .stake_allocations
            .iter()
            .enumerate()
            .map(|(i, &x)| match i == player && !self.is_pool_operator {
                true => vec![0.],
                false => vec![x],
            })
            .collect::<Vec<_>>();
        let stake_allocations = policy
            .apply(&groups, player, stake)
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();
        let pledge = match self.is_pool_operator {
            true => Some(stake_allocations[player]),
            false => self.pledge,
        };
        Self::new(pledge, self.margin, stake_allocations, self.is_pool_operator)
    }
}

impl std::fmt::Display for SinglePoolStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unset = || String::from("unset");
        write!(
            f,
            "pledge: {} | margin: {} | allocations: {}",
            self.pledge.map_or_else(unset, |p| format!("{:.4}", p)),
            self.margin.map_or_else(unset, |m| format!("{:.4}", m)),
            listing(&self.stake_allocations),
        )
    }
}
