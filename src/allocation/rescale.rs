use super::normalize::allocated;
use super::normalize::normalize;
use crate::PlayerId;
use crate::Stake;
use serde::Deserialize;
use serde::Serialize;

/// how to squeeze a nested allocation back under a player's budget.
///
/// generators never apply either of these on their own; callers opt in
/// before validating candidates that may overshoot (multi-pool draws,
/// unconstrained randomization).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rescale {
    /// one normalization across every slot of every group
    Global,
    /// own pools first, leftover budget spread across delegations
    Staged,
}

impl Rescale {
    /// `groups` is indexed by owner, then by that owner's slot.
    /// `own` is the player's own group, whose entries are pledges.
    /// negative entries are treated as zero weight.
    pub fn apply(&self, groups: &[Vec<Stake>], own: PlayerId, stake: Stake) -> Vec<Vec<Stake>> {
        let groups = groups
            .iter()
            .map(|group| group.iter().map(|&x| x.max(0.)).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        match self {
            Self::Global => {
                let flat = groups.iter().flatten().copied().collect::<Vec<_>>();
                reshape(normalize(&flat, stake), &groups)
            }
            Self::Staged => {
                let pledged = allocated(&groups[own]);
                let (pledges, remaining) = if pledged > stake {
                    (normalize(&groups[own], stake), 0.)
                } else {
                    (groups[own].clone(), stake - pledged)
                };
                let others = groups
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != own)
                    .flat_map(|(_, group)| group.iter().copied())
                    .collect::<Vec<_>>();
                let mut others = normalize(&others, remaining).into_iter();
                groups
                    .iter()
                    .enumerate()
                    .map(|(i, group)| match i == own {
                        true => pledges.clone(),
                        false => others.by_ref().take(group.len()).collect(),
                    })
                    .collect()
            }
        }
    }
}

/// split a flat vector back into groups shaped like `like`
fn reshape(flat: Vec<Stake>, like: &[Vec<Stake>]) -> Vec<Vec<Stake>> {
    let mut flat = flat.into_iter();
    like.iter()
        .map(|group| flat.by_ref().take(group.len()).collect())
        .collect()
}
