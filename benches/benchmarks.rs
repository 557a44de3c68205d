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
        sampling_random_hand,
        exhausting_four_card_hands,
        canonicalizing_endgame,
        serializing_endgame_key,
        planning_opening_turn,
        solving_two_card_endgame,
        playing_heuristic_game,
}

fn sampling_random_hand(c: &mut criterion::Criterion) {
    c.bench_function("sample a random Hand", |b| b.iter(|| Hand::random()));
}

fn exhausting_four_card_hands(c: &mut criterion::Criterion) {
    c.bench_function("exhaust all 4-card Hands", |b| {
        b.iter(|| HandTable::enumerate(4).count())
    });
}

fn canonicalizing_endgame(c: &mut criterion::Criterion) {
    let endgame = Endgame::from(&near_the_end(3, 5));
    c.bench_function("canonicalize an Endgame", |b| {
        b.iter(|| {
            let mut copy = endgame;
            copy.canonicalize();
            copy
        })
    });
}

fn serializing_endgame_key(c: &mut criterion::Criterion) {
    let endgame = Endgame::from(&near_the_end(3, 5));
    c.bench_function("serialize an Endgame Key", |b| b.iter(|| endgame.key()));
}

fn planning_opening_turn(c: &mut criterion::Criterion) {
    let nature = Nature::new(4, 1);
    let planner = Planner::default();
    c.bench_function("plan the opening turn", |b| {
        b.iter(|| planner.plan(nature.state()))
    });
}

fn solving_two_card_endgame(c: &mut criterion::Criterion) {
    let endgame = Endgame::from(&near_the_end(9, 2));
    c.bench_function("solve a 2-card Endgame from scratch", |b| {
        b.iter(|| Solver::default().solve(&endgame))
    });
}

fn playing_heuristic_game(c: &mut criterion::Criterion) {
    c.bench_function("play a 4-player Heuristic game", |b| {
        b.iter(|| {
            let nature = Nature::new(4, 7);
            let agent = AgentKind::Heuristic.build(SeerConfig::default());
            Executor::new(nature, agent).play(false)
        })
    });
}

fn near_the_end(seed: u32, left: usize) -> Nature {
    let mut nature = Nature::new(4, seed);
    let mut agent = AgentKind::Heuristic.build(SeerConfig::default());
    while nature.deck_size() > left && !nature.is_over() {
        let action = nature.resolve(agent.act(&nature));
        nature.update(&action);
        nature.advance_turn();
    }
    nature
}

use hanabi::Arbitrary;
use hanabi::agents::AgentKind;
use hanabi::cards::Hand;
use hanabi::cards::HandTable;
use hanabi::game::Nature;
use hanabi::play::Executor;
use hanabi::seer::Endgame;
use hanabi::seer::Planner;
use hanabi::seer::SeerConfig;
use hanabi::seer::Solver;
