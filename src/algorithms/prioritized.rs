use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::{PredecessorGraph, ValueIteration, ROUND_HISTORY};
use crate::bellman::Bellman;
use crate::mdp::MarkovDecisionProcess;
use crate::metrics::{SweepMetrics, SweepTracker};
use crate::priority_queue::IndexedPriorityQueue;
use crate::values::ValueTable;

/// Prioritized-sweeping value iteration.
///
/// Setup builds the predecessor graph and queues every non-terminal state
/// under priority `-|V[s] - best_value(s)|`, so the largest Bellman error pops
/// first. Each iteration pops one state, backs it up in place, then requeues
/// any predecessor whose Bellman error now exceeds `theta`. Requeueing only
/// ever raises a predecessor's urgency, never lowers it. An empty queue ends
/// the run before the budget is spent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrioritizedSweeping {
    pub iterations: usize,
    pub theta: f64,
}

impl PrioritizedSweeping {
    pub const DEFAULT_ITERATIONS: usize = 100;
    pub const DEFAULT_THETA: f64 = 1e-5;

    pub fn new(iterations: usize, theta: f64) -> Self {
        PrioritizedSweeping { iterations, theta }
    }
}

impl Default for PrioritizedSweeping {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ITERATIONS, Self::DEFAULT_THETA)
    }
}

impl ValueIteration for PrioritizedSweeping {
    fn name(&self) -> &'static str {
        "prioritized_sweeping"
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
        let mut tracker = SweepTracker::new(self.name(), self.iterations, ROUND_HISTORY);

        let graph = PredecessorGraph::build(mdp);
        tracker.record_predecessor_edges(graph.edge_count());

        let states = mdp.states();
        let mut queue = IndexedPriorityQueue::with_capacity(states.len());
        for state in &states {
            if mdp.is_terminal(state) {
                continue;
            }
            // action-less states have nothing to back up
            if let Some(diff) = bellman.residual(values, state) {
                queue.push(state.clone(), -diff);
                tracker.record_queue_update();
            }
        }

        for round in 0..self.iterations {
            let Some((state, _)) = queue.pop() else {
                debug!(round, "priority queue drained");
                tracker.stop_early();
                break;
            };

            // only non-terminal states with actions are ever queued
            debug_assert!(!mdp.is_terminal(&state));
            if let Some(best) = bellman.backup(values, &state) {
                let old = values.set(state.clone(), best);
                tracker.record_backup(old, best);
            }

            for predecessor in graph.predecessors(&state) {
                if mdp.is_terminal(predecessor) {
                    continue;
                }
                let Some(diff) = bellman.residual(values, predecessor) else {
                    continue;
                };
                if diff > self.theta && queue.update(predecessor.clone(), -diff) {
                    trace!(?predecessor, diff, "requeued predecessor");
                    tracker.record_queue_update();
                }
            }

            tracker.end_round();
        }

        let metrics = tracker.finish();
        info!(
            strategy = self.name(),
            rounds = metrics.rounds,
            backups = metrics.backups,
            stopped_early = metrics.stopped_early,
            "value iteration finished"
        );
        metrics
    }
}
