use crate::types::{Action, State};

/// Query surface of a planner whose value estimates are already computed
pub trait ValueEstimationAgent<S: State, A: Action> {
    /// Estimated value of `state`; the table default for unseen states
    fn value(&self, state: &S) -> f64;

    /// Q-value of taking `action` in `state` under the current estimates
    fn q_value(&self, state: &S, action: &A) -> f64;

    /// Greedy action, `None` for terminal or action-less states
    fn policy(&self, state: &S) -> Option<A>;

    /// Action to take at decision time. No exploration is involved, so this
    /// is the policy.
    fn action(&self, state: &S) -> Option<A> {
        self.policy(state)
    }
}
