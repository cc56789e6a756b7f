use super::pool::Pool;
use crate::Dice;
use crate::strategy::Mode;
use serde::Deserialize;
use serde::Serialize;

/// one slot per owner, single-pool mode
pub type Slots = Vec<Option<Pool>>;
/// one group of slots per owner, splitting mode
pub type Groups = Vec<Vec<Option<Pool>>>;

/// every pool slot in the system, indexed by owner.
/// the scheduler maintains this between rounds; strategies
/// only read it to decide where stake may go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Landscape {
    Single(Slots),
    Multi(Groups),
}

impl Landscape {
    pub fn empty(mode: Mode, players: usize) -> Self {
        match mode {
            Mode::Single => Self::Single(vec![None; players]),
            Mode::Splitting => Self::Multi(vec![Vec::new(); players]),
        }
    }

    /// random occupancy: each owner opens a pool with even odds,
    /// or in splitting mode opens up to the dice's pool ceiling,
    /// some of which may since have closed.
    pub fn sample(mode: Mode, players: usize, dice: &mut Dice) -> Self {
        match mode {
            Mode::Single => Self::Single(
                (0..players)
                    .map(|owner| dice.flip().then(|| Pool::new(owner, 0)))
                    .collect(),
            ),
            Mode::Splitting => Self::Multi(
                (0..players)
                    .map(|owner| {
                        (0..dice.pools())
                            .map(|slot| dice.flip().then(|| Pool::new(owner, slot)))
                            .collect()
                    })
                    .collect(),
            ),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Self::Single(_) => Mode::Single,
            Self::Multi(_) => Mode::Splitting,
        }
    }

    /// number of owners
    pub fn len(&self) -> usize {
        match self {
            Self::Single(slots) => slots.len(),
            Self::Multi(groups) => groups.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// number of occupied slots
    pub fn active(&self) -> usize {
        match self {
            Self::Single(slots) => slots.iter().flatten().count(),
            Self::Multi(groups) => groups.iter().flatten().flatten().count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_pools() {
        for mode in [Mode::Single, Mode::Splitting] {
            let landscape = Landscape::empty(mode, 5);
            assert_eq!(landscape.len(), 5);
            assert_eq!(landscape.active(), 0);
            assert_eq!(landscape.mode(), mode);
        }
    }

    #[test]
    fn sampled_pools_know_their_place() {
        let ref mut dice = Dice::seeded(0, 4);
        match Landscape::sample(Mode::Splitting, 20, dice) {
            Landscape::Multi(groups) => {
                for (owner, group) in groups.iter().enumerate() {
                    assert!(group.len() <= 4);
                    for (slot, pool) in group.iter().enumerate() {
                        if let Some(pool) = pool {
                            assert_eq!(pool.owner(), owner);
                            assert_eq!(pool.slot(), slot);
                        }
                    }
                }
            }
            Landscape::Single(_) => unreachable!(),
        }
    }

    #[test]
    fn sampled_single_occupancy() {
        let ref mut dice = Dice::seeded(1, 10);
        let landscape = Landscape::sample(Mode::Single, 200, dice);
        assert_eq!(landscape.len(), 200);
        assert!(landscape.active() > 0);
        assert!(landscape.active() < 200);
    }
}
