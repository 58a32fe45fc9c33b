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
        evaluating_river_hand,
        simulating_flop_strength,
        computing_bucket,
        applying_rule_batch,
        sorting_random_rules,
}

fn evaluating_river_hand(c: &mut criterion::Criterion) {
    let hand = Hand::from(Board::try_from("2c 7d 9h Js Ac").unwrap().cards());
    c.bench_function("evaluate a 5-card Hand", |b| {
        b.iter(|| Evaluator::from(hand).strength())
    });
}

fn simulating_flop_strength(c: &mut criterion::Criterion) {
    let ref cards = Board::try_from("Ah Kd 2c 7d 9h").unwrap().cards().to_vec();
    c.bench_function("simulate Flop win probability", |b| {
        b.iter(|| Simulator.evaluate(cards, N_PLAYERS, SIMULATIONS))
    });
}

fn computing_bucket(c: &mut criterion::Criterion) {
    let bucketer = Bucketer::from(Percentiles::from(
        (0..1326).map(|i| i as Probability / 1326.).collect::<Vec<_>>(),
    ));
    c.bench_function("compute a Bucket", |b| {
        b.iter(|| bucketer.get_bucket(1, 15., 50., Street::random(), 0.42))
    });
}

fn applying_rule_batch(c: &mut criterion::Criterion) {
    let rules = vec![
        Rule::from((Rank::Ace, Rank::King)),
        Rule::from((Rank::King, Rank::Queen)),
        Rule::from((Rank::Queen, Rank::Jack)),
        Rule::from((Rank::Jack, Rank::Ten)),
    ];
    c.bench_function("apply a batch of 4 Rules", |b| {
        b.iter(|| OrderGraph::default().apply_batch(&rules))
    });
}

fn sorting_random_rules(c: &mut criterion::Criterion) {
    c.bench_function("apply 64 random Rules one batch at a time", |b| {
        b.iter(|| {
            let mut graph = OrderGraph::default();
            for _ in 0..64 {
                let upper = Rank::random();
                let lower = Rank::random();
                if upper != lower {
                    graph.apply_batch(&[Rule::from((upper, lower))]);
                }
            }
            graph
        })
    });
}

use permuted_holdem::Arbitrary;
use permuted_holdem::N_PLAYERS;
use permuted_holdem::Probability;
use permuted_holdem::SIMULATIONS;
use permuted_holdem::cards::Board;
use permuted_holdem::cards::Hand;
use permuted_holdem::cards::Rank;
use permuted_holdem::cards::Street;
use permuted_holdem::evaluation::Evaluator;
use permuted_holdem::evaluation::Oracle;
use permuted_holdem::evaluation::Simulator;
use permuted_holdem::order::OrderGraph;
use permuted_holdem::order::Rule;
use permuted_holdem::strategy::Bucketer;
use permuted_holdem::strategy::Percentiles;
