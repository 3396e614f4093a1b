use crate::agent::ValueIterationAgent;
use crate::algorithms::{Asynchronous, PrioritizedSweeping, Strategy, Synchronous};
use crate::mdp::{MarkovDecisionProcess, TabularMdp};
use crate::values::ValueTable;
use crate::tests::fixtures::{stochastic, StrMdp};

fn zero_budget_strategies() -> Vec<Strategy> {
    vec![
        Synchronous::new(0).into(),
        Asynchronous::new(0).into(),
        PrioritizedSweeping::new(0, 1e-5).into(),
    ]
}

#[test]
fn test_zero_budget_for_every_strategy() {
    let mdp = stochastic();
    for strategy in zero_budget_strategies() {
        let agent = ValueIterationAgent::new(&mdp, 0.9, strategy);
        for state in mdp.states() {
            assert_eq!(agent.value(&state), 0.0, "{:?}", strategy);
        }
        // greedy against an all-zero table still picks the best one-step action
        assert_eq!(agent.policy(&"mid"), Some("push"));
        assert_eq!(agent.metrics().backups, 0);
    }
}

#[test]
fn test_empty_model() {
    let mdp: StrMdp = TabularMdp::new();
    for strategy in [
        Strategy::from(Synchronous::new(10)),
        Strategy::from(Asynchronous::new(10)),
        Strategy::from(PrioritizedSweeping::new(10, 1e-5)),
    ] {
        let agent = ValueIterationAgent::new(&mdp, 0.9, strategy);
        assert!(agent.values().is_empty());
        assert_eq!(agent.value(&"anything"), 0.0);
        assert_eq!(agent.max_residual(), 0.0);
    }
}

#[test]
fn test_only_terminal_states() {
    let mut mdp: StrMdp = TabularMdp::new();
    mdp.add_terminal("x");
    mdp.add_terminal("y");

    let agent = ValueIterationAgent::new(&mdp, 0.9, Asynchronous::new(5));
    assert_eq!(agent.metrics().skipped, 5);
    assert!(agent.values().is_empty());

    let agent = ValueIterationAgent::new(&mdp, 0.9, PrioritizedSweeping::new(5, 1e-5));
    assert!(agent.metrics().stopped_early);
    assert_eq!(agent.metrics().rounds, 0);
}

#[test]
fn test_discount_one_on_acyclic_model() {
    let mdp = TabularMdp::chain(5, 3.0);
    let agent = ValueIterationAgent::new(&mdp, 1.0, Synchronous::new(10));

    for state in 0..4 {
        assert_eq!(agent.value(&state), 3.0);
    }
}

#[test]
fn test_probabilities_are_not_normalized() {
    let mut mdp: StrMdp = TabularMdp::new();
    mdp.add_transition("s", "leaky", "t", 0.5, 4.0);
    mdp.add_terminal("t");

    let agent = ValueIterationAgent::new(mdp, 0.9, Synchronous::new(1));
    assert_eq!(agent.value(&"s"), 2.0);
}

#[test]
fn test_seeded_values_are_discarded_by_synchronous_rounds() {
    let mdp = stochastic();
    let seed: ValueTable<&str> = [("win", 100.0), ("start", 7.0)].into_iter().collect();

    let agent = ValueIterationAgent::with_values(&mdp, 0.9, Synchronous::new(1), seed.clone());
    // terminal entry is dropped with the old table; start was recomputed from it
    assert_eq!(agent.value(&"win"), 0.0);
    assert!(agent.value(&"start") > 7.0);

    let agent = ValueIterationAgent::with_values(&mdp, 0.9, Asynchronous::new(1), seed);
    // in-place updates keep untouched entries
    assert_eq!(agent.value(&"win"), 100.0);
}

#[test]
fn test_negative_rewards_do_not_leak_negative_infinity() {
    let mut mdp: StrMdp = TabularMdp::new();
    mdp.add_transition("a", "hurt", "b", 1.0, -3.0);
    mdp.add_transition("b", "hurt", "a", 1.0, -3.0);
    mdp.add_state("island");

    for strategy in [
        Strategy::from(Synchronous::new(200)),
        Strategy::from(Asynchronous::new(400)),
        Strategy::from(PrioritizedSweeping::new(400, 1e-9)),
    ] {
        let agent = ValueIterationAgent::new(&mdp, 0.5, strategy);
        assert!((agent.value(&"a") + 6.0).abs() < 1e-6, "{:?}", strategy);
        assert_eq!(agent.value(&"island"), 0.0);
    }
}

#[test]
fn test_duplicate_destinations_count_both_rewards() {
    let mut mdp: StrMdp = TabularMdp::new();
    mdp.add_transition("s", "a", "t", 0.5, 1.0);
    mdp.add_transition("s", "a", "t", 0.5, 3.0);
    mdp.add_terminal("t");

    let agent = ValueIterationAgent::new(&mdp, 0.9, Synchronous::new(1));
    assert_eq!(mdp.transitions(&"s", &"a"), vec![("t", 1.0)]);
    assert_eq!(agent.q_value(&"s", &"a"), 2.0);
    assert_eq!(agent.value(&"s"), 2.0);
}
