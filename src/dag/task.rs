// src/dag/task.rs

//! The task record itself. Tasks refer to their dependencies by identifier
//! only; the graph that checks those references lives in the collection.

use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::model::TaskRecord;
use crate::errors::{Result, TaskTreeError};
use crate::types::{format_duration, parse_duration, TaskId};

/// Optional attributes accepted when creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskOptions {
    pub estimated_duration: Option<Duration>,
    pub due_at: Option<DateTime<Utc>>,
}

/// A single unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    description: String,
    estimated_duration: Option<Duration>,
    due_at: Option<DateTime<Utc>>,
    completed: bool,
    /// Set semantics, insertion order kept for display.
    depends_on: Vec<TaskId>,
}

impl Task {
    /// Create a pending task with a freshly generated identifier.
    pub fn new(description: impl Into<String>, options: TaskOptions) -> Result<Self> {
        Self::with_id(Uuid::new_v4().to_string(), description, options)
    }

    /// Create a pending task under a caller-chosen identifier.
    pub fn with_id(
        id: impl Into<TaskId>,
        description: impl Into<String>,
        options: TaskOptions,
    ) -> Result<Self> {
        let id = id.into();
        let description = description.into();

        if id.trim().is_empty() {
            return Err(TaskTreeError::Validation(
                "task id must not be empty".to_string(),
            ));
        }
        if description.trim().is_empty() {
            return Err(TaskTreeError::Validation(format!(
                "task '{}' needs a non-empty description",
                id
            )));
        }

        Ok(Self {
            id,
            description,
            estimated_duration: options.estimated_duration,
            due_at: options.due_at,
            completed: false,
            depends_on: Vec::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn estimated_duration(&self) -> Option<Duration> {
        self.estimated_duration
    }

    pub fn due_at(&self) -> Option<DateTime<Utc>> {
        self.due_at
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn depends_on(&self) -> &[TaskId] {
        &self.depends_on
    }

    pub fn has_dependencies(&self) -> bool {
        !self.depends_on.is_empty()
    }

    /// Append `other` to this task's dependencies.
    ///
    /// Returns `false` if it was already listed. This only touches the task;
    /// cycle checking and rollback happen in
    /// [`TaskCollection::add_dependency`](crate::dag::TaskCollection::add_dependency).
    pub fn add_dependency(&mut self, other: impl Into<TaskId>) -> Result<bool> {
        let other = other.into();
        if other == self.id {
            return Err(TaskTreeError::Validation(format!(
                "task '{}' cannot depend on itself",
                self.id
            )));
        }
        if self.depends_on.contains(&other) {
            return Ok(false);
        }
        self.depends_on.push(other);
        Ok(true)
    }

    pub fn remove_dependency(&mut self, other: &str) -> bool {
        let before = self.depends_on.len();
        self.depends_on.retain(|d| d != other);
        self.depends_on.len() != before
    }

    /// Mark the task done. A completed task has no pending deadline, so the
    /// due date is cleared.
    pub fn mark_complete(&mut self) {
        self.completed = true;
        self.due_at = None;
    }

    /// Pending and past its due date.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.completed && self.due_at.is_some_and(|due| due < now)
    }

    /// Structural view used for serialization. The identifier is the key the
    /// record is stored under.
    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            description: self.description.clone(),
            estimated_duration: self.estimated_duration.map(format_duration),
            depends_on: self.depends_on.clone(),
            completed: self.completed,
            due_at: self.due_at,
        }
    }

    /// Rebuild a task from its structural view.
    pub fn from_record(id: impl Into<TaskId>, record: &TaskRecord) -> Result<Self> {
        let id = id.into();
        let estimated_duration = record
            .estimated_duration
            .as_deref()
            .map(parse_duration)
            .transpose()
            .map_err(|e| {
                TaskTreeError::ConfigError(format!("task '{}' estimated_duration: {}", id, e))
            })?;

        let mut task = Self::with_id(
            id,
            record.description.clone(),
            TaskOptions {
                estimated_duration,
                due_at: record.due_at,
            },
        )?;

        for dep in &record.depends_on {
            task.add_dependency(dep.clone())?;
        }
        if record.completed {
            task.mark_complete();
        }

        Ok(task)
    }
}
