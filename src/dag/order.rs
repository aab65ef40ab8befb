// src/dag/order.rs

//! Work-order computation for [`DependencyGraph`].
//!
//! The order is produced by relaxation rather than Kahn's algorithm so that
//! independent tasks keep their registration order: start from registration
//! order and, at each position, swap the node behind its right-most
//! dependency that still sits at or after that position. A full pass
//! without swaps is the fixed point.
//!
//! Processing position `i` never disturbs positions `< i`, so a single pass
//! already yields a valid order for an acyclic graph and the second pass
//! confirms it. The successive occupants of one position form a dependency
//! path, so more than `node_count` swaps at one position means a cycle.

use std::collections::HashMap;

use crate::dag::graph::DependencyGraph;
use crate::errors::{Result, TaskTreeError};
use crate::types::TaskId;

/// Passes allowed per node before giving up with
/// [`TaskTreeError::UnresolvableOrder`].
pub const PASSES_PER_NODE: usize = 10;

impl DependencyGraph {
    /// Pending node identifiers ordered so that every node comes after all
    /// of its dependencies. Satisfied nodes are left out.
    ///
    /// Run [`detect_cycle`](DependencyGraph::detect_cycle) first; on a cyclic
    /// graph this returns [`TaskTreeError::UnresolvableOrder`].
    pub fn topological_order(&self) -> Result<Vec<TaskId>> {
        let mut order: Vec<&str> = self
            .registration_order()
            .iter()
            .map(String::as_str)
            .collect();
        let node_count = order.len();
        let max_passes = PASSES_PER_NODE * node_count.max(1);

        let mut position: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(i, id)| (*id, i))
            .collect();

        for pass in 1..=max_passes {
            let mut swapped = false;

            for i in 0..node_count {
                let mut swaps_here = 0;
                while let Some(j) = self.rightmost_dependency_from(order[i], i, &position) {
                    swaps_here += 1;
                    if swaps_here > node_count {
                        return Err(TaskTreeError::UnresolvableOrder { passes: pass });
                    }
                    order.swap(i, j);
                    position.insert(order[i], i);
                    position.insert(order[j], j);
                    swapped = true;
                }
            }

            if !swapped {
                return Ok(order
                    .into_iter()
                    .filter(|id| !self.is_complete(id))
                    .map(str::to_string)
                    .collect());
            }
        }

        Err(TaskTreeError::UnresolvableOrder { passes: max_passes })
    }

    /// Largest position `>= from` held by a dependency of `id`.
    fn rightmost_dependency_from(
        &self,
        id: &str,
        from: usize,
        position: &HashMap<&str, usize>,
    ) -> Option<usize> {
        self.dependencies_of(id)
            .iter()
            .filter_map(|dep| position.get(dep.as_str()).copied())
            .filter(|&p| p >= from)
            .max()
    }
}
