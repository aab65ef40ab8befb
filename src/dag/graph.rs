// src/dag/graph.rs

use std::collections::{HashMap, HashSet};

use crate::errors::{Result, TaskTreeError};
use crate::types::TaskId;

/// Dependency graph keyed by task identifier.
///
/// Nodes carry only a completion flag; the tasks themselves live in
/// [`TaskCollection`](crate::dag::TaskCollection). An edge `a -> b` means
/// "`a` depends on `b`", so `b` has to be done first.
///
/// Any identifier that shows up in an edge is also a node. Referencing an
/// unknown identifier registers it as an incomplete placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    /// Identifier -> completed.
    nodes: HashMap<TaskId, bool>,
    /// Identifier -> identifiers it depends on, in insertion order.
    edges: HashMap<TaskId, Vec<TaskId>>,
    /// Node identifiers in the order they were first registered.
    order: Vec<TaskId>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `id` is a pending node.
    ///
    /// A node that is already satisfied stays satisfied: completion is a
    /// one-way transition.
    pub fn register_incomplete(&mut self, id: &str) {
        self.ensure_node(id);
    }

    /// Ensure `id` is a node and mark it satisfied.
    pub fn register_complete(&mut self, id: &str) {
        self.ensure_node(id);
        self.nodes.insert(id.to_string(), true);
    }

    /// Record that `id` depends on `depends_on`, registering either side as a
    /// pending node if it is new.
    ///
    /// This does not check for cycles; callers run [`detect_cycle`] after
    /// mutating.
    ///
    /// [`detect_cycle`]: DependencyGraph::detect_cycle
    pub fn add_dependency(&mut self, id: &str, depends_on: &str) -> Result<()> {
        if id == depends_on {
            return Err(TaskTreeError::Validation(format!(
                "task '{}' cannot depend on itself",
                id
            )));
        }

        self.ensure_node(id);
        self.ensure_node(depends_on);

        let deps = self.edges.entry(id.to_string()).or_default();
        if !deps.iter().any(|d| d == depends_on) {
            deps.push(depends_on.to_string());
        }
        Ok(())
    }

    /// Remove a node together with every edge that touches it.
    ///
    /// Returns `false` if the node was not present.
    pub fn remove_node(&mut self, id: &str) -> bool {
        if self.nodes.remove(id).is_none() {
            return false;
        }
        self.edges.remove(id);
        for deps in self.edges.values_mut() {
            deps.retain(|d| d != id);
        }
        self.order.retain(|n| n != id);
        true
    }

    /// Depth-first search from every node, in registration order.
    ///
    /// Fails with [`TaskTreeError::CircularDependency`] as soon as a node is
    /// reached again while it is still on the active path. The reported path
    /// starts and ends with the same identifier, e.g. `[A, B, A]`.
    pub fn detect_cycle(&self) -> Result<()> {
        let mut done: HashSet<&str> = HashSet::new();

        for start in &self.order {
            let start = start.as_str();
            if done.contains(start) {
                continue;
            }

            // (node, index of the next dependency to visit)
            let mut stack: Vec<(&str, usize)> = vec![(start, 0)];
            let mut on_path: HashSet<&str> = HashSet::from([start]);

            while let Some(&(node, next)) = stack.last() {
                let deps = self.dependencies_of(node);

                let Some(dep) = deps.get(next) else {
                    done.insert(node);
                    on_path.remove(node);
                    stack.pop();
                    continue;
                };
                if let Some(top) = stack.last_mut() {
                    top.1 += 1;
                }
                let dep = dep.as_str();

                if on_path.contains(dep) {
                    let from = stack.iter().position(|(n, _)| *n == dep).unwrap_or(0);
                    let mut path: Vec<TaskId> =
                        stack[from..].iter().map(|(n, _)| n.to_string()).collect();
                    path.push(dep.to_string());
                    return Err(TaskTreeError::CircularDependency { path });
                }

                if !done.contains(dep) {
                    on_path.insert(dep);
                    stack.push((dep, 0));
                }
            }
        }

        Ok(())
    }

    /// Pending nodes whose dependencies are all satisfied, in registration
    /// order.
    pub fn ready(&self) -> Vec<&str> {
        self.order
            .iter()
            .filter(|id| !self.is_complete(id))
            .filter(|id| self.dependencies_of(id).iter().all(|d| self.is_complete(d)))
            .map(String::as_str)
            .collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Whether the node is satisfied. Unknown identifiers count as pending.
    pub fn is_complete(&self, id: &str) -> bool {
        self.nodes.get(id).copied().unwrap_or(false)
    }

    /// Immediate dependencies of a node.
    pub fn dependencies_of(&self, id: &str) -> &[TaskId] {
        self.edges.get(id).map(|d| d.as_slice()).unwrap_or(&[])
    }

    /// Nodes that list `id` as a dependency, in registration order.
    pub fn dependents_of(&self, id: &str) -> Vec<&str> {
        self.order
            .iter()
            .filter(|n| self.dependencies_of(n).iter().any(|d| d == id))
            .map(String::as_str)
            .collect()
    }

    /// All node identifiers in registration order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn ensure_node(&mut self, id: &str) {
        if !self.nodes.contains_key(id) {
            self.nodes.insert(id.to_string(), false);
            self.edges.insert(id.to_string(), Vec::new());
            self.order.push(id.to_string());
        }
    }

    /// Registration order, for the ordering pass in `order.rs`.
    pub(crate) fn registration_order(&self) -> &[TaskId] {
        &self.order
    }
}
