use super::*;
use crate::pools::Landscape;
use serde::Deserialize;
use serde::Serialize;

/// which strategy shape a simulation runs with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// at most one pool per player
    Single,
    /// up to `max_pools` pools per player
    Splitting,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Splitting => write!(f, "splitting"),
        }
    }
}

/// a strategy of either shape. this is what the scheduler keeps
/// per player between rounds and what the search layer compares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stance {
    Single(SinglePoolStrategy),
    Multi(MultiPoolStrategy),
}

impl Stance {
    /// a player's starting point: no pools, no allocations
    pub fn blank(mode: Mode) -> Self {
        match mode {
            Mode::Single => Self::Single(SinglePoolStrategy::default()),
            Mode::Splitting => Self::Multi(MultiPoolStrategy::default()),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Self::Single(_) => Mode::Single,
            Self::Multi(_) => Mode::Splitting,
        }
    }
}

impl From<SinglePoolStrategy> for Stance {
    fn from(strategy: SinglePoolStrategy) -> Self {
        Self::Single(strategy)
    }
}
impl From<MultiPoolStrategy> for Stance {
    fn from(strategy: MultiPoolStrategy) -> Self {
        Self::Multi(strategy)
    }
}

/// pairing a stance with a landscape of the other shape
/// is a caller bug, not something to recover from
fn mismatch(stance: &Stance, pools: &Landscape) -> ! {
    panic!(
        "{} strategy over {} landscape",
        stance.mode(),
        pools.mode()
    )
}

impl Strategy for Stance {
    type Pools = Landscape;

    fn is_pool_operator(&self) -> bool {
        match self {
            Self::Single(s) => s.is_pool_operator(),
            Self::Multi(s) => s.is_pool_operator(),
        }
    }

    fn allocations(&self) -> impl Iterator<Item = Stake> + '_ {
        let allocations: Box<dyn Iterator<Item = Stake> + '_> = match self {
            Self::Single(s) => Box::new(s.allocations()),
            Self::Multi(s) => Box::new(s.allocations()),
        };
        allocations
    }

    fn random_operator(
        &self,
        pools: &Self::Pools,
        player: PlayerId,
        stake: Stake,
        dice: &mut Dice,
    ) -> Self {
        match (self, pools) {
            (Self::Single(s), Landscape::Single(p)) => {
                s.random_operator(p, player, stake, dice).into()
            }
            (Self::Multi(s), Landscape::Multi(p)) => {
                s.random_operator(p, player, stake, dice).into()
            }
            _ => mismatch(self, pools),
        }
    }

    fn random_delegator(
        &self,
        pools: &Self::Pools,
        player: PlayerId,
        stake: Stake,
        dice: &mut Dice,
    ) -> Self {
        match (self, pools) {
            (Self::Single(s), Landscape::Single(p)) => {
                s.random_delegator(p, player, stake, dice).into()
            }
            (Self::Multi(s), Landscape::Multi(p)) => {
                s.random_delegator(p, player, stake, dice).into()
            }
            _ => mismatch(self, pools),
        }
    }

    fn randomize(&mut self, n_pools: usize, dice: &mut Dice) -> &mut Self {
        match self {
            Self::Single(s) => {
                s.randomize(n_pools, dice);
            }
            Self::Multi(s) => {
                s.randomize(n_pools, dice);
            }
        }
        self
    }

    fn validate(
        &self,
        pools: &Self::Pools,
        player: PlayerId,
        stake: Stake,
        config: &Config,
    ) -> Result<(), Violation> {
        match (self, pools) {
            (Self::Single(s), Landscape::Single(p)) => s.validate(p, player, stake, config),
            (Self::Multi(s), Landscape::Multi(p)) => s.validate(p, player, stake, config),
            _ => mismatch(self, pools),
        }
    }

    fn rescale(&self, player: PlayerId, stake: Stake, policy: Rescale) -> Self {
        match self {
            Self::Single(s) => s.rescale(player, stake, policy).into(),
            Self::Multi(s) => s.rescale(player, stake, policy).into(),
        }
    }
}

impl std::fmt::Display for Stance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(s) => write!(f, "{}", s),
            Self::Multi(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pools::Pool;

    #[test]
    fn blank_matches_mode() {
        for mode in [Mode::Single, Mode::Splitting] {
            let stance = Stance::blank(mode);
            assert_eq!(stance.mode(), mode);
            assert!(!stance.is_pool_operator());
            assert_eq!(stance.allocations().count(), 0);
        }
    }

    #[test]
    fn candidates_keep_shape() {
        let ref mut dice = Dice::seeded(0, 10);
        for mode in [Mode::Single, Mode::Splitting] {
            let pools = Landscape::sample(mode, 6, dice);
            let stance = Stance::blank(mode);
            assert_eq!(stance.random_operator(&pools, 1, 1., dice).mode(), mode);
            assert_eq!(stance.random_delegator(&pools, 1, 1., dice).mode(), mode);
        }
    }

    #[test]
    fn zero_budget_any_shape_any_role() {
        let ref mut dice = Dice::seeded(1, 10);
        for mode in [Mode::Single, Mode::Splitting] {
            for _ in 0..32 {
                let pools = Landscape::sample(mode, 8, dice);
                let stance = Stance::blank(mode);
                let o = stance.random_operator(&pools, 4, 0., dice);
                let d = stance.random_delegator(&pools, 4, 0., dice);
                assert!(o.allocations().all(|x| x == 0.));
                assert!(d.allocations().all(|x| x == 0.));
            }
        }
    }

    #[test]
    fn forwards_single_scenario() {
        let ref mut dice = Dice::seeded(2, 10);
        let pools = Landscape::Single(vec![None, Some(Pool::new(1, 0)), None]);
        let stance = Stance::blank(Mode::Single).random_delegator(&pools, 0, 100., dice);
        assert_eq!(stance.allocations().collect::<Vec<_>>(), vec![0., 100., 0.]);
        assert_eq!(stance.validate(&pools, 0, 100., &Config::default()), Ok(()));
    }

    #[test]
    fn randomize_then_rescale() {
        let ref mut dice = Dice::seeded(3, 10);
        let pools = Landscape::Single(vec![Some(Pool::new(0, 0)); 16]);
        let mut stance = Stance::blank(Mode::Single);
        stance.randomize(16, dice);
        assert!(stance.validate(&pools, 3, 1., &Config::default()).is_err());
        let fixed = stance.rescale(3, 1., Rescale::Global);
        assert_eq!(fixed.validate(&pools, 3, 1., &Config::default()), Ok(()));
    }

    #[test]
    #[should_panic]
    fn mismatched_shapes() {
        let ref mut dice = Dice::seeded(4, 10);
        let pools = Landscape::empty(Mode::Splitting, 3);
        Stance::blank(Mode::Single).random_operator(&pools, 0, 1., dice);
    }

    #[test]
    fn display_forwards() {
        let s = SinglePoolStrategy::new(Some(1.), Some(0.5), vec![1.], true);
        assert_eq!(Stance::from(s.clone()).to_string(), s.to_string());
    }
}
