pub mod tracker;

pub use tracker::{SweepMetrics, SweepTracker};
