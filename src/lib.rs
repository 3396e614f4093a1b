//! # Valiter - Dynamic-Programming Planning for Finite MDPs
//!
//! Valiter computes value functions and greedy policies for finite Markov
//! Decision Processes by value iteration. It is an offline planner: given a
//! complete model of states, actions, transition probabilities and rewards,
//! it estimates the expected discounted return of every state and the best
//! action to take there.
//!
//! ## Key Features
//!
//! - **Three update schedules**: synchronous (batch), asynchronous (cyclic)
//!   and prioritized sweeping, behind one [`algorithms::ValueIteration`] trait
//! - **Model agnostic**: any type implementing [`mdp::MarkovDecisionProcess`]
//!   can be planned over; states and actions are opaque
//! - **Deterministic**: stable enumeration orders and FIFO tie-breaking in the
//!   priority queue make every run reproducible
//! - **Persistence**: value tables via bincode, summaries and configs via JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use valiter::builders::AgentBuilder;
//! use valiter::mdp::TabularMdp;
//!
//! let mut mdp = TabularMdp::new();
//! mdp.add_transition("start", "walk", "goal", 0.8, 1.0);
//! mdp.add_transition("start", "walk", "start", 0.2, 0.0);
//! mdp.add_transition("start", "wait", "start", 1.0, 0.0);
//! mdp.add_terminal("goal");
//!
//! let agent = AgentBuilder::new()
//!     .discount(0.9)
//!     .prioritized_sweeping(100, 1e-6)
//!     .build(mdp)
//!     .unwrap();
//!
//! assert_eq!(agent.policy(&"start"), Some("walk"));
//! assert!(agent.value(&"start") > 0.8);
//! ```
//!
//! ## Module Organization
//!
//! - [`agent`] - The planner and its query surface
//! - [`algorithms`] - Synchronous, asynchronous and prioritized-sweeping schedules
//! - [`bellman`] - Q-values and Bellman backups
//! - [`builders`] - Builder for checked planner construction
//! - [`config`] - Serializable planner settings
//! - [`error`] - Error types and result handling
//! - [`export`] - Value table persistence and result summaries
//! - [`mdp`] - Model trait and an in-memory tabular model
//! - [`metrics`] - Per-run planning metrics
//! - [`policy`] - Greedy policy extraction
//! - [`priority_queue`] - Indexed min-heap with decrease-key
//! - [`types`] - State and action traits
//! - [`values`] - Value table with explicit default

pub mod agent;
pub mod algorithms;
pub mod bellman;
pub mod builders;
pub mod config;
pub mod error;
pub mod export;
pub mod mdp;
pub mod metrics;
pub mod policy;
pub mod priority_queue;
pub mod types;
pub mod values;

#[cfg(test)]
mod tests;
