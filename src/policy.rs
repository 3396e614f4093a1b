use crate::bellman::Bellman;
use crate::mdp::MarkovDecisionProcess;
use crate::values::ValueTable;

/// Greedy action of `state` with respect to `values`.
///
/// Actions are scanned in the model's order and compared with `>=` against
/// the running maximum, so among actions tying for the best Q-value the
/// **last** one in that order is returned. Returns `None` for terminal states
/// and for states with no legal actions; neither is an error.
pub fn greedy_action<M: MarkovDecisionProcess>(
    bellman: &Bellman<'_, M>,
    values: &ValueTable<M::State>,
    state: &M::State,
) -> Option<M::Action> {
    if bellman.mdp().is_terminal(state) {
        return None;
    }

    let mut best_value = f64::NEG_INFINITY;
    let mut best_action = None;

    for action in bellman.mdp().actions(state) {
        let q = bellman.q_value(values, state, &action);
        if q >= best_value {
            best_value = q;
            best_action = Some(action);
        }
    }

    best_action
}

/// Greedy action for every enumerated state, in model order
pub fn greedy_policy<M: MarkovDecisionProcess>(
    bellman: &Bellman<'_, M>,
    values: &ValueTable<M::State>,
) -> Vec<(M::State, Option<M::Action>)> {
    bellman
        .mdp()
        .states()
        .into_iter()
        .map(|s| {
            let action = greedy_action(bellman, values, &s);
            (s, action)
        })
        .collect()
}
