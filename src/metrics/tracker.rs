use std::collections::VecDeque;
use serde::{Serialize, Deserialize};

/// Summary of one planning run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepMetrics {
    /// Name of the strategy that produced the run
    pub strategy: String,

    /// Iteration budget the strategy was given
    pub budget: usize,

    /// Rounds actually consumed (at most `budget`)
    pub rounds: usize,

    /// Bellman backups written into the value table
    pub backups: usize,

    /// State visits that wrote nothing (terminal or action-less state)
    pub skipped: usize,

    /// Whether the run ended before its budget was exhausted
    pub stopped_early: bool,

    /// Successful priority queue insertions and improvements
    pub queue_updates: usize,

    /// Edges in the predecessor graph
    pub predecessor_edges: usize,

    /// Largest absolute change applied by a single backup
    pub largest_change: f64,

    /// Largest absolute change per round, most recent last
    pub round_changes: VecDeque<f64>,
}

impl SweepMetrics {
    pub fn new(strategy: &str, budget: usize) -> Self {
        SweepMetrics {
            strategy: strategy.to_string(),
            budget,
            rounds: 0,
            backups: 0,
            skipped: 0,
            stopped_early: false,
            queue_updates: 0,
            predecessor_edges: 0,
            largest_change: 0.0,
            round_changes: VecDeque::new(),
        }
    }
}

impl Default for SweepMetrics {
    fn default() -> Self {
        Self::new("none", 0)
    }
}

/// Records metrics while a strategy runs
pub struct SweepTracker {
    metrics: SweepMetrics,
    history_size: usize,
    current_round_change: f64,
}

impl SweepTracker {
    pub fn new(strategy: &str, budget: usize, history_size: usize) -> Self {
        SweepTracker {
            metrics: SweepMetrics::new(strategy, budget),
            history_size,
            current_round_change: 0.0,
        }
    }

    /// Record a backup that moved a state's value from `old` to `new`
    pub fn record_backup(&mut self, old: f64, new: f64) {
        let change = (new - old).abs();
        self.metrics.backups += 1;
        if change > self.metrics.largest_change {
            self.metrics.largest_change = change;
        }
        if change > self.current_round_change {
            self.current_round_change = change;
        }
    }

    /// Record a state visit that wrote nothing
    pub fn record_skip(&mut self) {
        self.metrics.skipped += 1;
    }

    pub fn record_queue_update(&mut self) {
        self.metrics.queue_updates += 1;
    }

    pub fn record_predecessor_edges(&mut self, edges: usize) {
        self.metrics.predecessor_edges = edges;
    }

    /// Close the current round, returning its largest change
    pub fn end_round(&mut self) -> f64 {
        let change = self.current_round_change;
        self.metrics.rounds += 1;
        if self.history_size > 0 {
            if self.metrics.round_changes.len() >= self.history_size {
                self.metrics.round_changes.pop_front();
            }
            self.metrics.round_changes.push_back(change);
        }
        self.current_round_change = 0.0;
        change
    }

    pub fn stop_early(&mut self) {
        self.metrics.stopped_early = true;
    }

    pub fn finish(self) -> SweepMetrics {
        self.metrics
    }
}

impl SweepMetrics {
    /// Save metrics to file
    pub fn save(&self, path: &str) -> crate::error::Result<()> {
        let serialized = serde_json::to_string_pretty(self)?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    /// Load metrics from file
    pub fn load(path: &str) -> crate::error::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}
