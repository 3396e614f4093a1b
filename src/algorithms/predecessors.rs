use std::collections::{HashMap, HashSet};

use crate::mdp::MarkovDecisionProcess;
use crate::types::State;

/// Reverse reachability: `p` is a predecessor of `s` when some action from `p`
/// reaches `s` with nonzero probability.
///
/// Predecessors of a state are listed in discovery order (state enumeration,
/// then action order, then transition order), without duplicates.
#[derive(Clone, Debug)]
pub struct PredecessorGraph<S: State> {
    predecessors: HashMap<S, Vec<S>>,
    edges: usize,
}

impl<S: State> PredecessorGraph<S> {
    pub fn build<M: MarkovDecisionProcess<State = S>>(mdp: &M) -> Self {
        let states = mdp.states();
        let mut predecessors: HashMap<S, Vec<S>> =
            states.iter().map(|s| (s.clone(), Vec::new())).collect();
        let mut seen: HashSet<(S, S)> = HashSet::new();

        for state in &states {
            for action in mdp.actions(state) {
                for (next, prob) in mdp.transitions(state, &action) {
                    if prob > 0.0 && seen.insert((next.clone(), state.clone())) {
                        predecessors.entry(next).or_default().push(state.clone());
                    }
                }
            }
        }

        PredecessorGraph {
            predecessors,
            edges: seen.len(),
        }
    }

    /// Predecessors of `state`; empty for unknown states
    pub fn predecessors(&self, state: &S) -> &[S] {
        self.predecessors
            .get(state)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_predecessor(&self, predecessor: &S, state: &S) -> bool {
        self.predecessors(state).contains(predecessor)
    }

    /// Number of distinct `(predecessor, state)` edges
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Number of states with an entry (all enumerated states plus any
    /// transition targets the model did not enumerate)
    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }
}
