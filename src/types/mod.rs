use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state identifiers handed out by a model.
///
/// The planner assumes nothing about a state's structure beyond equality and
/// hashing, so any `Clone + Eq + Hash + Debug` type qualifies.
pub trait State: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> State for T {}

/// Trait for action identifiers, meaningful only relative to a state
pub trait Action: Clone + Debug {}

impl<T: Clone + Debug> Action for T {}

/// A single weighted outcome of taking an action in a state
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome<S> {
    pub next_state: S,
    pub probability: f64,
    pub reward: f64,
}

impl<S> Outcome<S> {
    pub fn new(next_state: S, probability: f64, reward: f64) -> Self {
        Outcome {
            next_state,
            probability,
            reward,
        }
    }
}
