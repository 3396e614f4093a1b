//! One-step Bellman optimality backups against a [`ValueTable`].

use crate::mdp::MarkovDecisionProcess;
use crate::values::ValueTable;

/// Bellman backup operator for a model and a discount factor.
///
/// The operator is read-only: it never writes to the value table it is given.
/// Which table is passed in decides whether an update loop is Jacobi-style
/// (previous snapshot) or Gauss-Seidel-style (the live table).
pub struct Bellman<'a, M: MarkovDecisionProcess> {
    mdp: &'a M,
    discount: f64,
}

impl<'a, M: MarkovDecisionProcess> Bellman<'a, M> {
    pub fn new(mdp: &'a M, discount: f64) -> Self {
        Bellman { mdp, discount }
    }

    pub fn mdp(&self) -> &'a M {
        self.mdp
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// `Σ p · (r(s, a, s') + γ · V[s'])` over the model's reported transitions.
    ///
    /// Probabilities are used as given; no normalization happens here.
    pub fn q_value(
        &self,
        values: &ValueTable<M::State>,
        state: &M::State,
        action: &M::Action,
    ) -> f64 {
        self.mdp
            .transitions(state, action)
            .iter()
            .map(|(next, prob)| {
                let reward = self.mdp.reward(state, action, next);
                prob * (reward + self.discount * values.get(next))
            })
            .sum()
    }

    /// Best Q-value over the legal actions of `state`.
    ///
    /// Returns `f64::NEG_INFINITY` for an action-less state. Update loops must
    /// not store that value.
    pub fn best_value(&self, values: &ValueTable<M::State>, state: &M::State) -> f64 {
        self.backup(values, state).unwrap_or(f64::NEG_INFINITY)
    }

    /// Best value, or `None` when the state has no legal actions
    pub fn backup(&self, values: &ValueTable<M::State>, state: &M::State) -> Option<f64> {
        let actions = self.mdp.actions(state);
        if actions.is_empty() {
            return None;
        }
        Some(
            actions
                .iter()
                .map(|a| self.q_value(values, state, a))
                .fold(f64::NEG_INFINITY, f64::max),
        )
    }

    /// Bellman error `|V[s] - best_value(s)|`, `None` for action-less states
    pub fn residual(&self, values: &ValueTable<M::State>, state: &M::State) -> Option<f64> {
        self.backup(values, state)
            .map(|best| (values.get(state) - best).abs())
    }
}
