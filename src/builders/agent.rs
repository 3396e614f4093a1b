use crate::agent::ValueIterationAgent;
use crate::algorithms::{Asynchronous, PrioritizedSweeping, Strategy, Synchronous};
use crate::config::{self, PlannerConfig};
use crate::error::Result;
use crate::mdp::MarkovDecisionProcess;
use crate::values::ValueTable;

/// Builder for ValueIterationAgent
pub struct AgentBuilder {
    discount: f64,
    strategy: Strategy,
    default_value: f64,
}

impl AgentBuilder {
    /// Create a new agent builder with discount 0.9 and 100 synchronous rounds
    pub fn new() -> Self {
        AgentBuilder {
            discount: PlannerConfig::DEFAULT_DISCOUNT,
            strategy: Strategy::default(),
            default_value: 0.0,
        }
    }

    /// Start from a loaded configuration
    pub fn from_config(config: &PlannerConfig) -> Self {
        AgentBuilder::new()
            .discount(config.discount)
            .strategy(config.strategy)
    }

    /// Set the discount factor
    pub fn discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    /// Use batch value iteration for `iterations` rounds
    pub fn synchronous(mut self, iterations: usize) -> Self {
        self.strategy = Synchronous::new(iterations).into();
        self
    }

    /// Use cyclic value iteration for `iterations` single-state updates
    pub fn asynchronous(mut self, iterations: usize) -> Self {
        self.strategy = Asynchronous::new(iterations).into();
        self
    }

    /// Use prioritized sweeping with convergence threshold `theta`
    pub fn prioritized_sweeping(mut self, iterations: usize, theta: f64) -> Self {
        self.strategy = PrioritizedSweeping::new(iterations, theta).into();
        self
    }

    pub fn strategy(mut self, strategy: impl Into<Strategy>) -> Self {
        self.strategy = strategy.into();
        self
    }

    /// Value reported for states that were never written
    pub fn default_value(mut self, value: f64) -> Self {
        self.default_value = value;
        self
    }

    /// Validate the parameters, then plan over `mdp`
    pub fn build<M: MarkovDecisionProcess>(self, mdp: M) -> Result<ValueIterationAgent<M>> {
        config::validate(self.discount, &self.strategy)?;

        Ok(ValueIterationAgent::with_values(
            mdp,
            self.discount,
            self.strategy,
            ValueTable::with_default(self.default_value),
        ))
    }
}

impl Default for AgentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
