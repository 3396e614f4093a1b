use serde::{Deserialize, Serialize};

use crate::agent::ValueIterationAgent;
use crate::algorithms::Strategy;
use crate::error::{PlannerError, Result};
use crate::mdp::MarkovDecisionProcess;

/// Serializable planner settings.
///
/// ```
/// use valiter::algorithms::{Strategy, PrioritizedSweeping};
/// use valiter::config::PlannerConfig;
///
/// let config = PlannerConfig::from_json(
///     r#"{ "discount": 0.95,
///          "strategy": { "kind": "prioritized_sweeping", "iterations": 500, "theta": 0.001 } }"#,
/// ).unwrap();
///
/// assert_eq!(config.strategy, Strategy::PrioritizedSweeping(PrioritizedSweeping::new(500, 0.001)));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub discount: f64,
    #[serde(default)]
    pub strategy: Strategy,
}

impl PlannerConfig {
    pub const DEFAULT_DISCOUNT: f64 = 0.9;

    pub fn new(discount: f64, strategy: impl Into<Strategy>) -> Self {
        PlannerConfig {
            discount,
            strategy: strategy.into(),
        }
    }

    /// Check the discount and strategy parameters
    pub fn validate(&self) -> Result<()> {
        validate(self.discount, &self.strategy)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: PlannerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load config from file
    pub fn load(path: &str) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Save config to file
    pub fn save(&self, path: &str) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Validate, then plan over `mdp`
    pub fn build_agent<M: MarkovDecisionProcess>(&self, mdp: M) -> Result<ValueIterationAgent<M>> {
        self.validate()?;
        Ok(ValueIterationAgent::new(mdp, self.discount, self.strategy))
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            discount: Self::DEFAULT_DISCOUNT,
            strategy: Strategy::default(),
        }
    }
}

pub(crate) fn validate(discount: f64, strategy: &Strategy) -> Result<()> {
    if !(0.0..=1.0).contains(&discount) {
        return Err(PlannerError::InvalidParameter {
            name: "discount".to_string(),
            reason: format!("Discount must lie in [0, 1], got {}", discount),
        });
    }

    if let Strategy::PrioritizedSweeping(ps) = strategy {
        if !(ps.theta >= 0.0 && ps.theta.is_finite()) {
            return Err(PlannerError::InvalidParameter {
                name: "theta".to_string(),
                reason: format!("Theta must be a finite non-negative number, got {}", ps.theta),
            });
        }
    }

    Ok(())
}
