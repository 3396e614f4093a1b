pub mod tabular;

use crate::types::{Action, State};

pub use tabular::{RandomMdp, TabularMdp};

/// Markov Decision Process as seen by the planner.
///
/// Every query must be stable for the duration of one planning run: the same
/// states in the same order, the same actions in the same order per state, and
/// the same transition lists. The planner relies on this for determinism.
pub trait MarkovDecisionProcess {
    type State: State;
    type Action: Action;

    /// All enumerable states. The order defines the cycling order of
    /// asynchronous value iteration.
    fn states(&self) -> Vec<Self::State>;

    /// Legal actions in `state`. An empty list marks an action-less state.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// `(next_state, probability)` pairs. Unlisted destinations have probability 0.
    fn transitions(&self, state: &Self::State, action: &Self::Action) -> Vec<(Self::State, f64)>;

    fn reward(&self, state: &Self::State, action: &Self::Action, next_state: &Self::State) -> f64;

    fn is_terminal(&self, state: &Self::State) -> bool;
}

impl<M: MarkovDecisionProcess + ?Sized> MarkovDecisionProcess for &M {
    type State = M::State;
    type Action = M::Action;

    fn states(&self) -> Vec<Self::State> {
        (**self).states()
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        (**self).actions(state)
    }

    fn transitions(&self, state: &Self::State, action: &Self::Action) -> Vec<(Self::State, f64)> {
        (**self).transitions(state, action)
    }

    fn reward(&self, state: &Self::State, action: &Self::Action, next_state: &Self::State) -> f64 {
        (**self).reward(state, action, next_state)
    }

    fn is_terminal(&self, state: &Self::State) -> bool {
        (**self).is_terminal(state)
    }
}
