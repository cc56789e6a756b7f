use crate::Stake;

/// rescale non-negative weights so they sum to `sum`.
///
/// zero weights stay exactly zero, positive weights keep their
/// proportions. with no positive mass there is nothing to scale,
/// so the result is all zeros whatever the target.
pub fn normalize(weights: &[Stake], sum: Stake) -> Vec<Stake> {
    let total = weights.iter().sum::<Stake>();
    if total > 0. {
        weights
            .iter()
            .map(|&w| if w == 0. { 0. } else { w / total * sum })
            .collect()
    } else {
        vec![0.; weights.len()]
    }
}

/// total stake across every target
pub fn allocated(allocations: &[Stake]) -> Stake {
    allocations.iter().sum()
}
