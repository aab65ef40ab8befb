// src/dag/collection.rs

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::config::model::{TaskFile, TaskRecord};
use crate::dag::graph::DependencyGraph;
use crate::dag::task::Task;
use crate::errors::{Result, TaskTreeError};
use crate::types::TaskId;

/// All tasks by identifier plus the dependency graph built over them.
///
/// The graph's edges always mirror each task's `depends_on`. Every mutation
/// either succeeds completely or returns an error and leaves both the tasks
/// and the graph untouched.
#[derive(Debug, Clone, Default)]
pub struct TaskCollection {
    tasks: HashMap<TaskId, Task>,
    graph: DependencyGraph,
}

impl TaskCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task and fold its dependencies into the graph.
    ///
    /// Fails with [`TaskTreeError::Validation`] if the id is taken and with
    /// [`TaskTreeError::CircularDependency`] if the task's dependencies close
    /// a cycle with what is already there.
    pub fn add_task(&mut self, task: Task) -> Result<()> {
        if self.tasks.contains_key(task.id()) {
            return Err(TaskTreeError::Validation(format!(
                "a task with id '{}' already exists",
                task.id()
            )));
        }

        let snapshot = self.graph.clone();
        if let Err(e) = self.fold_into_graph(&task) {
            self.graph = snapshot;
            return Err(e);
        }

        self.tasks.insert(task.id().to_string(), task);
        Ok(())
    }

    /// Remove a task and every edge that points to or from it.
    ///
    /// Placeholder nodes that were only referenced by the removed task are
    /// dropped as well.
    pub fn remove_task(&mut self, id: &str) -> Result<Task> {
        let removed = self
            .tasks
            .remove(id)
            .ok_or_else(|| TaskTreeError::NotFound(id.to_string()))?;

        self.graph.remove_node(id);
        for task in self.tasks.values_mut() {
            task.remove_dependency(id);
        }

        for dep in removed.depends_on() {
            if !self.tasks.contains_key(dep) && self.graph.dependents_of(dep).is_empty() {
                self.graph.remove_node(dep);
            }
        }

        Ok(removed)
    }

    /// Make `task_id` depend on `depends_on`.
    ///
    /// On a cycle the task's `depends_on` and the graph are restored and the
    /// [`TaskTreeError::CircularDependency`] is returned.
    pub fn add_dependency(&mut self, task_id: &str, depends_on: &str) -> Result<()> {
        let task = self
            .tasks
            .get_mut(task_id)
            .ok_or_else(|| TaskTreeError::NotFound(task_id.to_string()))?;

        if !task.add_dependency(depends_on)? {
            return Ok(());
        }

        let snapshot = self.graph.clone();
        let result = self
            .graph
            .add_dependency(task_id, depends_on)
            .and_then(|()| self.graph.detect_cycle());

        if let Err(e) = result {
            self.graph = snapshot;
            task.remove_dependency(depends_on);
            return Err(e);
        }
        Ok(())
    }

    /// Mark a task complete. It drops out of [`work_order`](Self::work_order)
    /// but stays in the collection.
    pub fn mark_complete(&mut self, id: &str) -> Result<()> {
        let task = self
            .tasks
            .get_mut(id)
            .ok_or_else(|| TaskTreeError::NotFound(id.to_string()))?;
        task.mark_complete();
        self.graph.register_complete(id);
        Ok(())
    }

    /// Pending identifiers in an order that respects every dependency.
    ///
    /// Placeholder identifiers (referenced but never defined) are included,
    /// since they are still outstanding.
    pub fn work_order(&self) -> Result<Vec<TaskId>> {
        self.graph.detect_cycle()?;
        self.graph.topological_order()
    }

    /// Defined tasks that are pending and have every dependency satisfied.
    pub fn ready_tasks(&self) -> Vec<&Task> {
        self.graph
            .ready()
            .into_iter()
            .filter_map(|id| self.tasks.get(id))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tasks.contains_key(id)
    }

    /// Defined tasks in graph registration order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.graph.node_ids().filter_map(|id| self.tasks.get(id))
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Structural view of every task, keyed by identifier, in registration
    /// order.
    pub fn to_records(&self) -> IndexMap<TaskId, TaskRecord> {
        self.tasks()
            .map(|task| (task.id().to_string(), task.to_record()))
            .collect()
    }

    /// Rebuild a collection from records.
    ///
    /// All tasks are constructed first, then replayed through
    /// [`add_task`](Self::add_task) so the graph is rebuilt and checked
    /// rather than taken on trust.
    ///
    /// Task ids are registered in record order before any edge is replayed,
    /// so defined tasks keep the registration order they were saved with.
    /// Placeholders are not saved and register after every defined task.
    pub fn from_records(records: &IndexMap<TaskId, TaskRecord>) -> Result<Self> {
        let tasks = records
            .iter()
            .map(|(id, record)| Task::from_record(id.clone(), record))
            .collect::<Result<Vec<_>>>()?;

        let mut collection = Self::new();
        for task in &tasks {
            collection.graph.register_incomplete(task.id());
        }
        for task in tasks {
            collection.add_task(task)?;
        }
        Ok(collection)
    }

    /// Render the collection as a TOML document with a `[tasks.<id>]` table
    /// per task.
    pub fn serialize(&self) -> Result<String> {
        let file = TaskFile {
            settings: None,
            tasks: self.to_records(),
        };
        Ok(toml::to_string(&file)?)
    }

    /// Parse a TOML document produced by [`serialize`](Self::serialize) or
    /// written by hand. A `[settings]` section, if present, is ignored here.
    pub fn deserialize(text: &str) -> Result<Self> {
        let file: TaskFile = toml::from_str(text)?;
        Self::from_records(&file.tasks)
    }

    fn fold_into_graph(&mut self, task: &Task) -> Result<()> {
        if task.is_completed() {
            self.graph.register_complete(task.id());
        } else {
            self.graph.register_incomplete(task.id());
        }
        for dep in task.depends_on() {
            self.graph.add_dependency(task.id(), dep)?;
        }
        self.graph.detect_cycle()
    }
}
