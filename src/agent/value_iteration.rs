use tracing::info;

use super::traits::ValueEstimationAgent;
use crate::algorithms::{Strategy, ValueIteration};
use crate::bellman::Bellman;
use crate::mdp::MarkovDecisionProcess;
use crate::metrics::SweepMetrics;
use crate::policy;
use crate::values::ValueTable;

/// Offline planner that runs value iteration once, at construction, and then
/// answers value and policy queries from the resulting table.
///
/// The value table, and for prioritized sweeping the queue and predecessor
/// graph, are owned by the agent and never exposed for mutation.
///
/// # Example
///
/// ```
/// use valiter::agent::ValueIterationAgent;
/// use valiter::algorithms::Synchronous;
/// use valiter::mdp::TabularMdp;
///
/// let mut mdp = TabularMdp::new();
/// mdp.add_transition("A", "go", "B", 1.0, 10.0);
/// mdp.add_terminal("B");
///
/// let agent = ValueIterationAgent::new(mdp, 0.5, Synchronous::new(1));
///
/// assert_eq!(agent.value(&"A"), 10.0);
/// assert_eq!(agent.value(&"B"), 0.0);
/// assert_eq!(agent.policy(&"A"), Some("go"));
/// assert_eq!(agent.policy(&"B"), None);
/// ```
pub struct ValueIterationAgent<M: MarkovDecisionProcess> {
    mdp: M,
    discount: f64,
    strategy: Strategy,
    values: ValueTable<M::State>,
    metrics: SweepMetrics,
}

impl<M: MarkovDecisionProcess> ValueIterationAgent<M> {
    /// Plan over `mdp` starting from an all-zero value table.
    ///
    /// Parameters are not validated here; use
    /// [`AgentBuilder`](crate::builders::AgentBuilder) for checked construction.
    pub fn new(mdp: M, discount: f64, strategy: impl Into<Strategy>) -> Self {
        Self::with_values(mdp, discount, strategy, ValueTable::new())
    }

    /// Plan over `mdp` starting from `initial`
    pub fn with_values(
        mdp: M,
        discount: f64,
        strategy: impl Into<Strategy>,
        initial: ValueTable<M::State>,
    ) -> Self {
        let strategy = strategy.into();
        info!(
            strategy = strategy.name(),
            iterations = strategy.iterations(),
            discount,
            "planning started"
        );

        let mut values = initial;
        let metrics = strategy.run(&Bellman::new(&mdp, discount), &mut values);

        ValueIterationAgent {
            mdp,
            discount,
            strategy,
            values,
            metrics,
        }
    }

    fn bellman(&self) -> Bellman<'_, M> {
        Bellman::new(&self.mdp, self.discount)
    }

    /// Estimated value of `state`, 0.0 for states never written
    pub fn value(&self, state: &M::State) -> f64 {
        self.values.get(state)
    }

    pub fn q_value(&self, state: &M::State, action: &M::Action) -> f64 {
        self.bellman().q_value(&self.values, state, action)
    }

    /// Greedy action; among tied actions the last in model order wins
    pub fn policy(&self, state: &M::State) -> Option<M::Action> {
        policy::greedy_action(&self.bellman(), &self.values, state)
    }

    /// Alias of [`policy`](Self::policy) for decision-time queries
    pub fn action(&self, state: &M::State) -> Option<M::Action> {
        self.policy(state)
    }

    /// Greedy action for every state, in model order
    pub fn greedy_policy(&self) -> Vec<(M::State, Option<M::Action>)> {
        policy::greedy_policy(&self.bellman(), &self.values)
    }

    /// Bellman error left at `state`; `None` for terminal or action-less states
    pub fn residual(&self, state: &M::State) -> Option<f64> {
        if self.mdp.is_terminal(state) {
            return None;
        }
        self.bellman().residual(&self.values, state)
    }

    /// Largest Bellman error over all states, 0.0 if none can be backed up
    pub fn max_residual(&self) -> f64 {
        self.mdp
            .states()
            .iter()
            .filter_map(|s| self.residual(s))
            .fold(0.0, f64::max)
    }

    pub fn values(&self) -> &ValueTable<M::State> {
        &self.values
    }

    pub fn metrics(&self) -> &SweepMetrics {
        &self.metrics
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn mdp(&self) -> &M {
        &self.mdp
    }

    pub fn into_values(self) -> ValueTable<M::State> {
        self.values
    }
}

impl<M> ValueEstimationAgent<M::State, M::Action> for ValueIterationAgent<M>
where
    M: MarkovDecisionProcess,
{
    fn value(&self, state: &M::State) -> f64 {
        ValueIterationAgent::value(self, state)
    }

    fn q_value(&self, state: &M::State, action: &M::Action) -> f64 {
        ValueIterationAgent::q_value(self, state, action)
    }

    fn policy(&self, state: &M::State) -> Option<M::Action> {
        ValueIterationAgent::policy(self, state)
    }
}
