//! Benchmark comparison of the value-iteration schedules
//!
//! Every schedule plans over the same seeded random models:
//! - Synchronous
//! - Asynchronous
//! - Prioritized sweeping

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use valiter::agent::ValueIterationAgent;
use valiter::algorithms::{Asynchronous, PrioritizedSweeping, Strategy, Synchronous};
use valiter::mdp::{RandomMdp, TabularMdp};

const DISCOUNT: f64 = 0.9;

fn model(states: usize) -> TabularMdp<usize, usize> {
    TabularMdp::random(&RandomMdp {
        states,
        actions: 4,
        branching: 3,
        terminals: states / 20 + 1,
        max_reward: 1.0,
        seed: 7,
    })
}

/// Budgets sized so each schedule performs roughly 100 sweeps of backups
fn schedules(states: usize) -> Vec<(&'static str, Strategy)> {
    vec![
        ("synchronous", Synchronous::new(100).into()),
        ("asynchronous", Asynchronous::new(100 * states).into()),
        ("prioritized_sweeping", PrioritizedSweeping::new(100 * states, 1e-6).into()),
    ]
}

fn bench_schedules(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_iteration");
    group.sample_size(20);

    for states in [50, 200, 800] {
        let mdp = model(states);
        for (name, strategy) in schedules(states) {
            group.bench_with_input(BenchmarkId::new(name, states), &strategy, |b, strategy| {
                b.iter(|| ValueIterationAgent::new(black_box(&mdp), DISCOUNT, *strategy))
            });
        }
    }

    group.finish();
}

fn bench_policy_extraction(c: &mut Criterion) {
    let mdp = model(200);
    let agent = ValueIterationAgent::new(&mdp, DISCOUNT, Synchronous::new(100));

    c.bench_function("greedy_policy_200", |b| b.iter(|| black_box(agent.greedy_policy())));
}

criterion_group!(benches, bench_schedules, bench_policy_extraction);
criterion_main!(benches);
