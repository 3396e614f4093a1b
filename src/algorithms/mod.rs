//! Value-iteration strategies.
//!
//! Each strategy decides *which* states are backed up and *when*; the backup
//! itself is shared through [`Bellman`]. A strategy is picked once, when the
//! planner is constructed, through the closed [`Strategy`] enum.

pub mod asynchronous;
pub mod predecessors;
pub mod prioritized;
pub mod synchronous;

use serde::{Deserialize, Serialize};

use crate::bellman::Bellman;
use crate::mdp::MarkovDecisionProcess;
use crate::metrics::SweepMetrics;
use crate::values::ValueTable;

pub use asynchronous::Asynchronous;
pub use predecessors::PredecessorGraph;
pub use prioritized::PrioritizedSweeping;
pub use synchronous::Synchronous;

/// Per-round change history kept in [`SweepMetrics`]
pub(crate) const ROUND_HISTORY: usize = 1000;

/// A value-iteration update schedule
pub trait ValueIteration {
    /// Short identifier used in logs and metrics
    fn name(&self) -> &'static str;

    /// Iteration budget
    fn iterations(&self) -> usize;

    /// Run the schedule to completion, mutating `values` in place
    fn run<M: MarkovDecisionProcess>(
        &self,
        bellman: &Bellman<'_, M>,
        values: &mut ValueTable<M::State>,
    ) -> SweepMetrics;
}

/// The strategy a planner is constructed with
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strategy {
    Synchronous(Synchronous),
    Asynchronous(Asynchronous),
    PrioritizedSweeping(PrioritizedSweeping),
}

impl ValueIteration for Strategy {
    fn name(&self) -> &'static str {
        match self {
            Strategy::Synchronous(s) => s.name(),
            Strategy::Asynchronous(s) => s.name(),
            Strategy::PrioritizedSweeping(s) => s.name(),
        }
    }

    fn iterations(&self) -> usize {
        match self {
            Strategy::Synchronous(s) => s.iterations(),
            Strategy::Asynchronous(s) => s.iterations(),
            Strategy::PrioritizedSweeping(s) => s.iterations(),
        }
    }

    fn run<M: MarkovDecisionProcess>(
        &self,
        bellman: &Bellman<'_, M>,
        values: &mut ValueTable<M::State>,
    ) -> SweepMetrics {
        match self {
            Strategy::Synchronous(s) => s.run(bellman, values),
            Strategy::Asynchronous(s) => s.run(bellman, values),
            Strategy::PrioritizedSweeping(s) => s.run(bellman, values),
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Synchronous(Synchronous::default())
    }
}

impl From<Synchronous> for Strategy {
    fn from(s: Synchronous) -> Self {
        Strategy::Synchronous(s)
    }
}

impl From<Asynchronous> for Strategy {
    fn from(s: Asynchronous) -> Self {
        Strategy::Asynchronous(s)
    }
}

impl From<PrioritizedSweeping> for Strategy {
    fn from(s: PrioritizedSweeping) -> Self {
        Strategy::PrioritizedSweeping(s)
    }
}
