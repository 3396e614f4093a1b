use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

use super::MarkovDecisionProcess;
use crate::types::{Action, Outcome, State};

/// In-memory MDP backed by explicit outcome tables.
///
/// States and actions are reported in the order they were first added, which
/// keeps planning over a `TabularMdp` fully deterministic.
///
/// # Example
///
/// ```
/// use valiter::mdp::{MarkovDecisionProcess, TabularMdp};
///
/// let mut mdp = TabularMdp::new();
/// mdp.add_transition("A", "go", "B", 1.0, 10.0);
/// mdp.add_terminal("B");
///
/// assert_eq!(mdp.states(), vec!["A", "B"]);
/// assert_eq!(mdp.actions(&"A"), vec!["go"]);
/// assert_eq!(mdp.reward(&"A", &"go", &"B"), 10.0);
/// assert!(mdp.is_terminal(&"B"));
/// ```
#[derive(Clone, Debug)]
pub struct TabularMdp<S: State, A: Action + Eq + Hash> {
    states: Vec<S>,
    known: HashSet<S>,
    actions: HashMap<S, Vec<A>>,
    outcomes: HashMap<(S, A), Vec<Outcome<S>>>,
    terminals: HashSet<S>,
}

impl<S: State, A: Action + Eq + Hash> TabularMdp<S, A> {
    pub fn new() -> Self {
        TabularMdp {
            states: Vec::new(),
            known: HashSet::new(),
            actions: HashMap::new(),
            outcomes: HashMap::new(),
            terminals: HashSet::new(),
        }
    }

    /// Register a state without any actions. Re-adding is a no-op.
    pub fn add_state(&mut self, state: S) {
        if self.known.insert(state.clone()) {
            self.states.push(state);
        }
    }

    /// Register a state and mark it terminal
    pub fn add_terminal(&mut self, state: S) {
        self.add_state(state.clone());
        self.terminals.insert(state);
    }

    /// Add one `(next_state, probability, reward)` outcome to `(state, action)`.
    ///
    /// Both endpoints are registered as states, and `action` becomes legal in
    /// `state` if it was not already. Adding a destination that is already
    /// listed merges into the existing outcome: probabilities add up and the
    /// reward becomes their probability-weighted mean.
    pub fn add_transition(
        &mut self,
        state: S,
        action: A,
        next_state: S,
        probability: f64,
        reward: f64,
    ) {
        self.add_state(state.clone());
        self.add_state(next_state.clone());

        let legal = self.actions.entry(state.clone()).or_default();
        if !legal.contains(&action) {
            legal.push(action.clone());
        }

        let outcomes = self.outcomes.entry((state, action)).or_default();
        match outcomes.iter_mut().find(|o| o.next_state == next_state) {
            Some(existing) => {
                let total = existing.probability + probability;
                if total > 0.0 {
                    existing.reward =
                        (existing.probability * existing.reward + probability * reward) / total;
                }
                existing.probability = total;
            }
            None => outcomes.push(Outcome::new(next_state, probability, reward)),
        }
    }

    pub fn outcomes(&self, state: &S, action: &A) -> &[Outcome<S>] {
        self.outcomes
            .get(&(state.clone(), action.clone()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<S: State, A: Action + Eq + Hash> Default for TabularMdp<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Action + Eq + Hash> MarkovDecisionProcess for TabularMdp<S, A> {
    type State = S;
    type Action = A;

    fn states(&self) -> Vec<S> {
        self.states.clone()
    }

    fn actions(&self, state: &S) -> Vec<A> {
        self.actions.get(state).cloned().unwrap_or_default()
    }

    fn transitions(&self, state: &S, action: &A) -> Vec<(S, f64)> {
        self.outcomes(state, action)
            .iter()
            .map(|o| (o.next_state.clone(), o.probability))
            .collect()
    }

    fn reward(&self, state: &S, action: &A, next_state: &S) -> f64 {
        self.outcomes(state, action)
            .iter()
            .find(|o| &o.next_state == next_state)
            .map(|o| o.reward)
            .unwrap_or(0.0)
    }

    fn is_terminal(&self, state: &S) -> bool {
        self.terminals.contains(state)
    }
}

impl TabularMdp<usize, usize> {
    /// Deterministic chain `0 -> 1 -> ... -> n-1` with a single action `0`.
    ///
    /// Entering the last state pays `reward`, every other step pays nothing.
    /// The last state is terminal.
    pub fn chain(n: usize, reward: f64) -> Self {
        let mut mdp = TabularMdp::new();
        if n == 0 {
            return mdp;
        }
        for s in 0..n - 1 {
            let r = if s + 1 == n - 1 { reward } else { 0.0 };
            mdp.add_transition(s, 0, s + 1, 1.0, r);
        }
        mdp.add_terminal(n - 1);
        mdp
    }

    /// Seeded random MDP, see [`RandomMdp`].
    pub fn random(config: &RandomMdp) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut mdp = TabularMdp::new();
        let n = config.states;
        let terminals = config.terminals.min(n);
        let branching = config.branching.clamp(1, n.max(1));
        let max_reward = if config.max_reward.is_finite() {
            config.max_reward.abs()
        } else {
            0.0
        };

        for s in 0..n {
            mdp.add_state(s);
        }
        for s in n - terminals..n {
            mdp.add_terminal(s);
        }

        for s in 0..n - terminals {
            for a in 0..config.actions {
                let targets = sample(&mut rng, n, branching).into_vec();
                let weights: Vec<f64> = targets.iter().map(|_| rng.gen_range(0.05..1.0)).collect();
                let total: f64 = weights.iter().sum();
                for (next, w) in targets.into_iter().zip(weights) {
                    let reward = rng.gen_range(-max_reward..=max_reward);
                    mdp.add_transition(s, a, next, w / total, reward);
                }
            }
        }

        mdp
    }
}

/// Parameters for [`TabularMdp::random`]
#[derive(Clone, Debug)]
pub struct RandomMdp {
    pub states: usize,
    pub actions: usize,
    /// Distinct successors per `(state, action)`
    pub branching: usize,
    /// The last `terminals` states are terminal
    pub terminals: usize,
    /// Rewards are drawn from `[-|max_reward|, |max_reward|]`; a non-finite
    /// bound gives all-zero rewards
    pub max_reward: f64,
    pub seed: u64,
}

impl Default for RandomMdp {
    fn default() -> Self {
        RandomMdp {
            states: 50,
            actions: 4,
            branching: 3,
            terminals: 1,
            max_reward: 1.0,
            seed: 42,
        }
    }
}
