use super::search::Search;
use crate::pools::Landscape;
use crate::strategy::Stance;
use crate::*;

/// one player due to move this round
#[derive(Debug, Clone, PartialEq)]
pub struct Activation {
    pub player: PlayerId,
    pub stake: Stake,
    pub current: Stance,
}

impl Search {
    /// best responses for every activated player against the same
    /// landscape. each player draws from their own fork of `dice`,
    /// taken in activation order, so results are identical whether
    /// or not the work fans out across threads.
    pub fn round<U>(
        &self,
        activations: &[Activation],
        pools: &Landscape,
        dice: &mut Dice,
        utility: U,
    ) -> Vec<Option<Stance>>
    where
        U: Fn(PlayerId, &Stance) -> Utility + Sync,
    {
        let work = activations
            .iter()
            .zip(activations.iter().map(|_| dice.fork()).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        fan(work, |(a, mut dice): (&Activation, Dice)| {
            self.respond(&a.current, pools, a.player, a.stake, &mut dice, |s| {
                utility(a.player, s)
            })
        })
    }
}

#[cfg(feature = "parallel")]
fn fan<T, F>(work: Vec<T>, f: F) -> Vec<Option<Stance>>
where
    T: Send,
    F: Fn(T) -> Option<Stance> + Sync + Send,
{
    use rayon::prelude::*;
    work.into_par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
fn fan<T, F>(work: Vec<T>, f: F) -> Vec<Option<Stance>>
where
    F: Fn(T) -> Option<Stance>,
{
    work.into_iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Mode;
    use crate::strategy::Strategy;

    fn activations(n: usize, mode: Mode) -> Vec<Activation> {
        (0..n)
            .map(|player| Activation {
                player,
                stake: 1. + player as Stake,
                current: Stance::blank(mode),
            })
            .collect()
    }

    #[test]
    fn one_answer_per_activation() {
        let ref mut dice = Dice::seeded(0, 10);
        let pools = Landscape::sample(Mode::Single, 16, dice);
        let search = Search::default();
        let moves = search.round(&activations(16, Mode::Single), &pools, dice, |_, s| {
            s.allocated()
        });
        assert_eq!(moves.len(), 16);
        for (player, m) in moves.iter().enumerate() {
            if let Some(m) = m {
                assert!(m.allocated() <= 1. + player as Stake + 1e-9);
            }
        }
    }

    #[test]
    fn reproducible_across_schedules() {
        let run = || {
            let ref mut dice = Dice::seeded(7, 10);
            let pools = Landscape::sample(Mode::Single, 32, dice);
            Search::default().round(&activations(32, Mode::Single), &pools, dice, |p, s| {
                s.allocations().enumerate().map(|(i, x)| x * (i as Stake - p as Stake)).sum()
            })
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn players_draw_independently() {
        let ref mut dice = Dice::seeded(8, 10);
        let pools = Landscape::sample(Mode::Single, 8, dice);
        let mut twins = activations(2, Mode::Single);
        twins[1].player = 0;
        twins[1].stake = twins[0].stake;
        let moves = Search::default().round(&twins, &pools, dice, |_, s| s.allocated());
        match moves.as_slice() {
            [Some(a), Some(b)] => assert_ne!(a, b),
            _ => panic!("both twins should leave the blank strategy"),
        }
    }
}
