use crate::agent::{ValueEstimationAgent, ValueIterationAgent};
use crate::algorithms::{Asynchronous, PrioritizedSweeping, Strategy, Synchronous};
use crate::bellman::Bellman;
use crate::policy::{greedy_action, greedy_policy};
use crate::values::ValueTable;
use crate::tests::fixtures::{stochastic, tied_actions, two_state};

#[test]
fn test_ties_go_to_the_last_action() {
    let mdp = tied_actions();
    let bellman = Bellman::new(&mdp, 0.9);
    let values = ValueTable::new();

    assert_eq!(bellman.q_value(&values, &"s", &"left"), bellman.q_value(&values, &"s", &"right"));
    assert_eq!(greedy_action(&bellman, &values, &"s"), Some("right"));
}

#[test]
fn test_tie_break_is_stable_across_runs_and_strategies() {
    let strategies: Vec<Strategy> = vec![
        Synchronous::new(20).into(),
        Asynchronous::new(20).into(),
        PrioritizedSweeping::new(20, 1e-9).into(),
    ];

    for strategy in strategies {
        for _ in 0..5 {
            let agent = ValueIterationAgent::new(tied_actions(), 0.9, strategy);
            assert_eq!(agent.policy(&"s"), Some("right"), "strategy {:?}", strategy);
        }
    }
}

#[test]
fn test_terminal_and_action_less_states_have_no_action() {
    let agent = ValueIterationAgent::new(stochastic(), 0.9, Synchronous::new(10));

    assert_eq!(agent.policy(&"win"), None);
    assert_eq!(agent.policy(&"dead_end"), None);
    assert_eq!(agent.action(&"dead_end"), None);
    assert_eq!(agent.policy(&"never_seen"), None);
}

#[test]
fn test_terminal_state_with_actions_has_no_action() {
    let mut mdp = two_state();
    mdp.add_transition("B", "loop", "B", 1.0, 1.0);

    let agent = ValueIterationAgent::new(mdp, 0.9, Synchronous::new(3));
    assert_eq!(agent.policy(&"B"), None);
    assert_eq!(agent.value(&"B"), 0.0);
}

#[test]
fn test_action_is_policy() {
    let agent = ValueIterationAgent::new(stochastic(), 0.9, Asynchronous::new(500));

    for (state, action) in agent.greedy_policy() {
        assert_eq!(agent.action(&state), action);
        assert_eq!(ValueEstimationAgent::action(&agent, &state), action);
    }
}

#[test]
fn test_greedy_policy_follows_model_order() {
    let mdp = stochastic();
    let bellman = Bellman::new(&mdp, 0.9);
    let values: ValueTable<&str> = [("mid", 2.0), ("start", 1.0)].into_iter().collect();

    let policy = greedy_policy(&bellman, &values);
    let states: Vec<&str> = policy.iter().map(|(s, _)| *s).collect();
    assert_eq!(states, vec!["start", "mid", "win", "lose", "dead_end"]);
    assert_eq!(policy[0].1, Some("safe"));
    assert_eq!(policy[1].1, Some("push"));
    assert_eq!(policy[4].1, None);
}

#[test]
fn test_q_value_matches_bellman() {
    let agent = ValueIterationAgent::new(stochastic(), 0.9, Synchronous::new(25));
    let bellman = Bellman::new(agent.mdp(), 0.9);

    for action in ["safe", "risky"] {
        assert_eq!(
            agent.q_value(&"start", &action),
            bellman.q_value(agent.values(), &"start", &action)
        );
    }
    // risky is a fair coin between +5 and -5 terminal exits
    assert_eq!(agent.q_value(&"start", &"risky"), 0.0);
}

#[test]
fn test_policy_through_trait_object() {
    let agent = ValueIterationAgent::new(two_state(), 0.5, Synchronous::new(1));
    let estimator: &dyn ValueEstimationAgent<&str, &str> = &agent;

    assert_eq!(estimator.value(&"A"), 10.0);
    assert_eq!(estimator.q_value(&"A", &"go"), 10.0);
    assert_eq!(estimator.policy(&"A"), Some("go"));
    assert_eq!(estimator.action(&"B"), None);
}
