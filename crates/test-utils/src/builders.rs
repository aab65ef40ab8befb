#![allow(dead_code)]

use std::time::Duration;

use tasktree::dag::{Task, TaskCollection, TaskOptions};
use tasktree::types::parse_timestamp;

/// Builder for `TaskCollection` to simplify test setup.
///
/// Tasks are added in the order they were given, which is also the
/// registration order the work order breaks ties with.
pub struct CollectionBuilder {
    tasks: Vec<Task>,
}

impl CollectionBuilder {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Shorthand for a pending task with only dependencies set.
    pub fn with(self, id: &str, after: &[&str]) -> Self {
        let mut builder = TaskBuilder::new(id);
        for dep in after {
            builder = builder.after(dep);
        }
        self.with_task(builder.build())
    }

    pub fn build(self) -> TaskCollection {
        let mut collection = TaskCollection::new();
        for task in self.tasks {
            collection
                .add_task(task)
                .expect("Failed to build valid collection from builder");
        }
        collection
    }
}

impl Default for CollectionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `Task`.
pub struct TaskBuilder {
    id: String,
    description: String,
    options: TaskOptions,
    after: Vec<String>,
    completed: bool,
}

impl TaskBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            description: format!("do {}", id),
            options: TaskOptions::default(),
            after: vec![],
            completed: false,
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.after.push(dep.to_string());
        self
    }

    pub fn estimate(mut self, d: Duration) -> Self {
        self.options.estimated_duration = Some(d);
        self
    }

    pub fn due(mut self, rfc3339: &str) -> Self {
        let due = parse_timestamp(rfc3339).expect("invalid RFC 3339 timestamp in test");
        self.options.due_at = Some(due);
        self
    }

    pub fn completed(mut self, val: bool) -> Self {
        self.completed = val;
        self
    }

    pub fn build(self) -> Task {
        let mut task = Task::with_id(self.id, self.description, self.options)
            .expect("Failed to build valid task from builder");
        for dep in self.after {
            task.add_dependency(dep)
                .expect("Failed to add dependency in builder");
        }
        if self.completed {
            task.mark_complete();
        }
        task
    }
}
