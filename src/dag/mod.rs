// src/dag/mod.rs

//! Task model and dependency graph.
//!
//! - [`task`] holds the [`Task`] record and its own validation.
//! - [`graph`] holds the [`DependencyGraph`] over task identifiers and its
//!   cycle detection.
//! - [`order`] computes the work order over that graph.
//! - [`collection`] owns tasks and graph together and keeps them consistent.

pub mod collection;
pub mod graph;
pub mod order;
pub mod task;

pub use collection::TaskCollection;
pub use graph::DependencyGraph;
pub use order::PASSES_PER_NODE;
pub use task::{Task, TaskOptions};
