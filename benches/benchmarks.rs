criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        normalizing_allocations,
        sampling_single_operator,
        sampling_single_delegator,
        sampling_multi_candidate,
        rescaling_multi_candidate,
        searching_single_round,
}

const PLAYERS: usize = 1000;

fn normalizing_allocations(c: &mut criterion::Criterion) {
    let ref mut dice = Dice::seeded(0, MAX_POOLS);
    let weights = (0..PLAYERS).map(|_| dice.unit()).collect::<Vec<_>>();
    c.bench_function("normalize 1000 allocation weights", |b| {
        b.iter(|| normalize(&weights, 1.))
    });
}

fn sampling_single_operator(c: &mut criterion::Criterion) {
    let ref mut dice = Dice::seeded(1, MAX_POOLS);
    let pools = Landscape::sample(Mode::Single, PLAYERS, dice);
    let stance = Stance::blank(Mode::Single);
    c.bench_function("sample a single-pool operator candidate", |b| {
        b.iter(|| stance.random_operator(&pools, 0, 0.01, dice))
    });
}

fn sampling_single_delegator(c: &mut criterion::Criterion) {
    let ref mut dice = Dice::seeded(2, MAX_POOLS);
    let pools = Landscape::sample(Mode::Single, PLAYERS, dice);
    let stance = Stance::blank(Mode::Single);
    c.bench_function("sample a single-pool delegator candidate", |b| {
        b.iter(|| stance.random_delegator(&pools, 0, 0.01, dice))
    });
}

fn sampling_multi_candidate(c: &mut criterion::Criterion) {
    let ref mut dice = Dice::seeded(3, MAX_POOLS);
    let pools = Landscape::sample(Mode::Splitting, PLAYERS, dice);
    let stance = Stance::blank(Mode::Splitting);
    c.bench_function("sample a multi-pool candidate", |b| {
        b.iter(|| stance.random_operator(&pools, 0, 0.01, dice))
    });
}

fn rescaling_multi_candidate(c: &mut criterion::Criterion) {
    let ref mut dice = Dice::seeded(4, MAX_POOLS);
    let pools = Landscape::sample(Mode::Splitting, PLAYERS, dice);
    let candidate = Stance::blank(Mode::Splitting).random_delegator(&pools, 0, 0.01, dice);
    c.bench_function("rescale a multi-pool candidate (staged)", |b| {
        b.iter(|| candidate.rescale(0, 0.01, Rescale::Staged))
    });
}

fn searching_single_round(c: &mut criterion::Criterion) {
    let ref mut dice = Dice::seeded(5, MAX_POOLS);
    let pools = Landscape::sample(Mode::Single, PLAYERS, dice);
    let activations = (0..64)
        .map(|player| Activation {
            player,
            stake: 0.01,
            current: Stance::blank(Mode::Single),
        })
        .collect::<Vec<_>>();
    let search = Search::default();
    c.bench_function("best responses for 64 activated players", |b| {
        b.iter(|| search.round(&activations, &pools, dice, |_, s| s.allocated()))
    });
}

use pooling_games::Dice;
use pooling_games::MAX_POOLS;
use pooling_games::allocation::Rescale;
use pooling_games::allocation::normalize;
use pooling_games::pools::Landscape;
use pooling_games::search::Activation;
use pooling_games::search::Search;
use pooling_games::strategy::Mode;
use pooling_games::strategy::Stance;
use pooling_games::strategy::Strategy;
