use serde::{Deserialize, Serialize};
use tracing::info;

use super::{ValueIteration, ROUND_HISTORY};
use crate::bellman::Bellman;
use crate::mdp::MarkovDecisionProcess;
use crate::metrics::{SweepMetrics, SweepTracker};
use crate::values::ValueTable;

/// Cyclic (Gauss-Seidel) value iteration.
///
/// Iteration `i` backs up only `states[i % states.len()]`, in place, so later
/// iterations see the new value immediately. The state list is fetched from
/// the model once. Selecting a terminal or action-less state is a no-op that
/// still spends one iteration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asynchronous {
    pub iterations: usize,
}

impl Asynchronous {
    pub const DEFAULT_ITERATIONS: usize = 1000;

    pub fn new(iterations: usize) -> Self {
        Asynchronous { iterations }
    }
}

impl Default for Asynchronous {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ITERATIONS)
    }
}

impl ValueIteration for Asynchronous {
    fn name(&self) -> &'static str {
        "asynchronous"
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

        if !states.is_empty() {
            for i in 0..self.iterations {
                let state = &states[i % states.len()];
                let best = if mdp.is_terminal(state) {
                    None
                } else {
                    bellman.backup(values, state)
                };

                match best {
                    Some(best) => {
                        let old = values.set(state.clone(), best);
                        tracker.record_backup(old, best);
                    }
                    None => tracker.record_skip(),
                }
                tracker.end_round();
            }
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
