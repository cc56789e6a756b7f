use crate::pools::Landscape;
use crate::strategy::Stance;
use crate::strategy::Strategy;
use crate::*;

/// best-response sampling for one activated player.
///
/// this is the narrow contract the scheduler drives: draw some
/// candidates, keep the adoptable ones, score them with whatever
/// utility model the caller brings, and move only on a clear gain.
#[derive(Debug, Clone, Default)]
pub struct Search(Config);

impl From<Config> for Search {
    fn from(config: Config) -> Self {
        Self(config)
    }
}

impl Search {
    /// operator and delegator candidates, alternating, after the
    /// configured rescale policy. anything that still breaks an
    /// invariant is dropped here rather than offered for adoption.
    pub fn candidates(
        &self,
        current: &Stance,
        pools: &Landscape,
        player: PlayerId,
        stake: Stake,
        dice: &mut Dice,
    ) -> Vec<Stance> {
        let mut candidates = Vec::with_capacity(2 * self.0.candidates);
        for _ in 0..self.0.candidates {
            candidates.push(current.random_operator(pools, player, stake, dice));
            candidates.push(current.random_delegator(pools, player, stake, dice));
        }
        candidates
            .into_iter()
            .map(|candidate| match self.0.rescale {
                Some(policy) => candidate.rescale(player, stake, policy),
                None => candidate,
            })
            .filter(|candidate| match candidate.validate(pools, player, stake, &self.0) {
                Ok(()) => true,
                Err(violation) => {
                    log::trace!("player {} discards candidate: {}", player, violation);
                    false
                }
            })
            .collect()
    }

    /// is moving from `current` to `candidate` utility worth it?
    pub fn improves(&self, current: Utility, candidate: Utility) -> bool {
        let gain = candidate - current;
        gain > self.0.absolute_utility_threshold
            && gain > self.0.relative_utility_threshold * current.abs()
    }

    /// the best candidate if it clears both thresholds over the
    /// current strategy's utility, None if the player should idle
    pub fn respond<U>(
        &self,
        current: &Stance,
        pools: &Landscape,
        player: PlayerId,
        stake: Stake,
        dice: &mut Dice,
        utility: U,
    ) -> Option<Stance>
    where
        U: Fn(&Stance) -> Utility,
    {
        let baseline = utility(current);
        let best = self
            .candidates(current, pools, player, stake, dice)
            .into_iter()
            .map(|candidate| (utility(&candidate), candidate))
            .filter(|(u, _)| !u.is_nan())
            .max_by(|(a, _), (b, _)| a.total_cmp(b));
        match best {
            Some((u, candidate)) if self.improves(baseline, u) => {
                log::debug!("player {} moves {:.6} -> {:.6}", player, baseline, u);
                Some(candidate)
            }
            _ => {
                log::debug!("player {} idles at {:.6}", player, baseline);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::Rescale;
    use crate::pools::Pool;
    use crate::strategy::Mode;

    fn pools() -> Landscape {
        Landscape::Single(vec![Some(Pool::new(0, 0)), Some(Pool::new(1, 0)), None])
    }
    fn operating(s: &Stance) -> Utility {
        if s.is_pool_operator() { 1. } else { 0. }
    }

    #[test]
    fn improvement_thresholds() {
        let search = Search::default();
        assert!(search.improves(1., 1.2));
        assert!(!search.improves(1., 1.05));
        assert!(!search.improves(0., 1e-12));
        assert!(search.improves(0., 1e-6));
        assert!(search.improves(-1., -0.5));
    }

    #[test]
    fn candidates_per_activation() {
        let ref mut dice = Dice::seeded(0, 10);
        let search = Search::from(Config {
            candidates: 3,
            ..Config::default()
        });
        let current = Stance::blank(Mode::Single);
        let candidates = search.candidates(&current, &pools(), 2, 5., dice);
        assert_eq!(candidates.len(), 6);
        assert_eq!(candidates.iter().filter(|c| c.is_pool_operator()).count(), 3);
    }

    #[test]
    fn adopts_clear_gain() {
        let ref mut dice = Dice::seeded(1, 10);
        let search = Search::default();
        let current = Stance::blank(Mode::Single);
        let next = search.respond(&current, &pools(), 2, 5., dice, operating);
        assert!(next.is_some_and(|s| s.is_pool_operator()));
    }

    #[test]
    fn idles_without_gain() {
        let ref mut dice = Dice::seeded(2, 10);
        let search = Search::default();
        let current = Stance::blank(Mode::Single);
        assert_eq!(search.respond(&current, &pools(), 2, 5., dice, |_| 1.), None);
    }

    #[test]
    fn ignores_nan_utilities() {
        let ref mut dice = Dice::seeded(3, 10);
        let search = Search::default();
        let current = Stance::blank(Mode::Single);
        let next = search.respond(&current, &pools(), 2, 5., dice, |s| match s {
            s if s.is_pool_operator() => Utility::NAN,
            s if s.allocated() > 0. => 1.,
            _ => 0.,
        });
        assert!(next.is_some_and(|s| !s.is_pool_operator()));
    }

    #[test]
    fn unnormalized_multi_candidates_need_a_policy() {
        let ref mut dice = Dice::seeded(4, 10);
        let groups = vec![vec![Some(Pool::new(0, 0)); 10]; 10];
        let pools = Landscape::Multi(groups);
        let current = Stance::blank(Mode::Splitting);
        let strict = Search::default();
        let lenient = Search::from(Config {
            rescale: Some(Rescale::Global),
            candidates: 8,
            ..Config::default()
        });
        let strict = strict.candidates(&current, &pools, 0, 0.1, dice);
        let lenient = lenient.candidates(&current, &pools, 0, 0.1, dice);
        assert!(strict.len() < 2);
        assert_eq!(lenient.len(), 16);
    }
}
