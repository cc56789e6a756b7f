use crate::PlayerId;
use serde::Deserialize;
use serde::Serialize;

/// marker for an active pool in the landscape.
/// the strategy layer only ever asks "is there a pool here?",
/// so this carries nothing beyond where it lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pool {
    owner: PlayerId,
    slot: usize,
}

impl Pool {
    pub fn new(owner: PlayerId, slot: usize) -> Self {
        Self { owner, slot }
    }
    pub fn owner(&self) -> PlayerId {
        self.owner
    }
    pub fn slot(&self) -> usize {
        self.slot
    }
}

impl std::fmt::Display for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}.{}", self.owner, self.slot)
    }
}
