//! Strategy shapes and their candidate generators.
//!
//! A strategy is one player's split of their stake across pool
//! slots, plus pool economics if they operate. The search layer
//! never needs to know which shape it holds: it asks the current
//! strategy for fresh operator and delegator candidates and compares
//! them by externally computed utility.

mod multi;
mod single;
mod stance;
mod violation;

pub use multi::*;
pub use single::*;
pub use stance::*;
pub use violation::*;

use crate::Config;
use crate::Dice;
use crate::PlayerId;
use crate::Stake;
use crate::allocation::Rescale;

pub trait Strategy: Sized + Clone + std::fmt::Debug + std::fmt::Display {
    /// the landscape shape this strategy allocates over
    type Pools: ?Sized;

    /// does the player pledge to at least one pool of their own?
    fn is_pool_operator(&self) -> bool;

    /// every allocation entry, flattened in owner order
    fn allocations(&self) -> impl Iterator<Item = Stake> + '_;

    /// total stake committed across every target
    fn allocated(&self) -> Stake {
        self.allocations().sum()
    }

    /// a fresh candidate in which the player runs their own pool(s).
    /// reads `pools`, never writes it.
    fn random_operator(
        &self,
        pools: &Self::Pools,
        player: PlayerId,
        stake: Stake,
        dice: &mut Dice,
    ) -> Self;

    /// a fresh candidate in which the player delegates.
    /// reads `pools`, never writes it.
    fn random_delegator(
        &self,
        pools: &Self::Pools,
        player: PlayerId,
        stake: Stake,
        dice: &mut Dice,
    ) -> Self;

    /// overwrite every field with independent uniform draws over
    /// `n_pools` targets. the result is NOT guaranteed to respect
    /// any budget and must pass through [`Strategy::validate`]
    /// (possibly after [`Strategy::rescale`]) before it is adopted.
    fn randomize(&mut self, n_pools: usize, dice: &mut Dice) -> &mut Self;

    /// check every invariant an adoptable strategy must satisfy
    fn validate(
        &self,
        pools: &Self::Pools,
        player: PlayerId,
        stake: Stake,
        config: &Config,
    ) -> Result<(), Violation>;

    /// a copy squeezed under `stake` by the given policy,
    /// with pledges kept in sync with the player's own slots
    fn rescale(&self, player: PlayerId, stake: Stake, policy: Rescale) -> Self;
}

/// shared rendering for allocation vectors
fn listing(xs: &[Stake]) -> String {
    let xs = xs
        .iter()
        .map(|x| format!("{:.4}", x))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", xs)
}

/// flag the first entry that is negative or not a number
fn signed(xs: impl Iterator<Item = Stake>) -> Result<(), Violation> {
    match xs.enumerate().find(|(_, x)| !(*x >= 0.)) {
        Some((target, amount)) => Err(Violation::Negative { target, amount }),
        None => Ok(()),
    }
}

/// total within budget, up to tolerance
fn budgeted(allocated: Stake, budget: Stake, tolerance: Stake) -> Result<(), Violation> {
    if allocated > budget + tolerance {
        Err(Violation::OverBudget { allocated, budget })
    } else {
        Ok(())
    }
}

/// margins live in [0, 1)
fn bounded(slot: usize, margin: crate::Margin) -> Result<(), Violation> {
    if (0. ..1.).contains(&margin) {
        Ok(())
    } else {
        Err(Violation::Margin { slot, margin })
    }
}
