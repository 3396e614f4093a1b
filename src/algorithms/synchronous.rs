use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{ValueIteration, ROUND_HISTORY};
use crate::bellman::Bellman;
use crate::mdp::MarkovDecisionProcess;
use crate::metrics::{SweepMetrics, SweepTracker};
use crate::values::ValueTable;

/// Batch (Jacobi) value iteration.
///
/// Every round builds a fresh table in which each non-terminal state holds its
/// best value against the *previous* round's table, then swaps it in whole.
/// Terminal and action-less states are left out of the fresh table, so they
/// read as the table default. The round count is the only stopping criterion.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Synchronous {
    pub iterations: usize,
}

impl Synchronous {
    pub const DEFAULT_ITERATIONS: usize = 100;

    pub fn new(iterations: usize) -> Self {
        Synchronous { iterations }
    }
}

impl Default for Synchronous {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ITERATIONS)
    }
}

impl ValueIteration for Synchronous {
    fn name(&self) -> &'static str {
        "synchronous"
    }

    fn iterations(&self) -> usize {
        self.iterations
    }

    fn run<M: MarkovDecisionProcess>(
        &self,
        bellman: &Bellman<'_, M>,
        values: &mut ValueTable<M::State>,
    ) -> SweepMetrics {
        let mdp = bellman.mdp();
        let states = mdp.states();
        let mut tracker = SweepTracker::new(self.name(), self.iterations, ROUND_HISTORY);

        for round in 0..self.iterations {
            let mut next = values.empty_like();
            for state in &states {
                if mdp.is_terminal(state) {
                    tracker.record_skip();
                    continue;
                }
                match bellman.backup(values, state) {
                    Some(best) => {
                        tracker.record_backup(values.get(state), best);
                        next.set(state.clone(), best);
                    }
                    None => tracker.record_skip(),
                }
            }
            values.replace(next);

            let change = tracker.end_round();
            debug!(round, change, "synchronous sweep finished");
        }

        let metrics = tracker.finish();
        info!(
            strategy = self.name(),
            rounds = metrics.rounds,
            backups = metrics.backups,
            "value iteration finished"
        );
        metrics
    }
}
