//! Persisting value tables and exporting planning results.
//!
//! Value tables round-trip through bincode so that a later run can be seeded
//! with [`ValueIterationAgent::with_values`](crate::agent::ValueIterationAgent::with_values).
//! Summaries are written as JSON in model state order.

pub mod persistence;
pub mod summary;

pub use persistence::{load_values, save_values};
pub use summary::{export_summary_json, summarize, values_to_array, StateSummary};
