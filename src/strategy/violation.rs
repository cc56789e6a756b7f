use crate::Margin;
use crate::PlayerId;
use crate::Stake;

/// the first broken invariant found while validating a strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// flattened target index with a negative (or NaN) amount
    Negative { target: usize, amount: Stake },
    OverBudget { allocated: Stake, budget: Stake },
    /// a non-operator routing stake into their own slot
    SelfDelegation { player: PlayerId, amount: Stake },
    /// stake sent to a slot with no active pool
    Unoccupied { owner: PlayerId, slot: usize, amount: Stake },
    Margin { slot: usize, margin: Margin },
    /// an operator with no margin set
    Unpriced { player: PlayerId },
    /// single-pool pledge disagreeing with the own-slot allocation
    Pledge { expected: Stake, found: Option<Stake> },
    /// multi-pool pledges disagreeing with the own-group allocation
    Pledges,
    PoolCount { count: usize, max: usize },
    /// pledges and margins must both have one entry per pool
    Shape { pools: usize, pledges: usize, margins: usize },
    /// allocation vector not aligned with the landscape
    Targets { owner: Option<PlayerId>, expected: usize, found: usize },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negative { target, amount } => {
                write!(f, "negative allocation {} at target {}", amount, target)
            }
            Self::OverBudget { allocated, budget } => {
                write!(f, "allocated {} exceeds budget {}", allocated, budget)
            }
            Self::SelfDelegation { player, amount } => {
                write!(f, "player {} delegates {} to themselves", player, amount)
            }
            Self::Unoccupied {
                owner,
                slot,
                amount,
            } => write!(f, "allocated {} to empty slot {}.{}", amount, owner, slot),
            Self::Margin { slot, margin } => {
                write!(f, "margin {} of pool {} outside [0, 1)", margin, slot)
            }
            Self::Unpriced { player } => write!(f, "player {} operates without a margin", player),
            Self::Pledge { expected, found } => match found {
                Some(found) => write!(f, "pledge {} but own allocation {}", found, expected),
                None => write!(f, "operator without pledge, own allocation {}", expected),
            },
            Self::Pledges => write!(f, "pledges differ from own-group allocations"),
            Self::PoolCount { count, max } => {
                write!(f, "{} pools exceeds ceiling {}", count, max)
            }
            Self::Shape {
                pools,
                pledges,
                margins,
            } => write!(
                f,
                "{} pools with {} pledges and {} margins",
                pools, pledges, margins
            ),
            Self::Targets {
                owner,
                expected,
                found,
            } => match owner {
                Some(owner) => write!(
                    f,
                    "owner {} has {} slots but {} allocations",
                    owner, expected, found
                ),
                None => write!(f, "{} owners but {} allocations", expected, found),
            },
        }
    }
}

impl std::error::Error for Violation {}
