// src/config/model.rs

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::TaskId;

/// Top-level tasks file as read from TOML:
///
/// ```toml
/// [settings]
/// pomodoro_length = "25m"
///
/// [tasks.report]
/// description = "Write the report"
/// estimated_duration = "90m"
/// depends_on = ["data"]
/// due_at = "2026-10-20T17:00:00Z"
///
/// [tasks.data]
/// description = "Collect data"
/// ```
///
/// Both sections are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskFile {
    /// Work session settings from `[settings]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,

    /// All tasks from `[tasks.<id>]`, keyed by task id, in file order.
    ///
    /// The order is the collection's registration order, which breaks ties
    /// in the work order.
    #[serde(default)]
    pub tasks: IndexMap<TaskId, TaskRecord>,
}

/// `[settings]` section: pomodoro timings used by `tasktree next`.
///
/// Durations are strings like `"20m"` and are checked by
/// [`validate_settings`](crate::config::validate::validate_settings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_pomodoro_length")]
    pub pomodoro_length: String,

    #[serde(default = "default_short_break_length")]
    pub short_break_length: String,

    #[serde(default = "default_long_break_length")]
    pub long_break_length: String,

    /// Number of pomodoros between long breaks.
    #[serde(default = "default_long_break_interval")]
    pub long_break_interval: u32,
}

fn default_pomodoro_length() -> String {
    "20m".to_string()
}

fn default_short_break_length() -> String {
    "5m".to_string()
}

fn default_long_break_length() -> String {
    "15m".to_string()
}

fn default_long_break_interval() -> u32 {
    4
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pomodoro_length: default_pomodoro_length(),
            short_break_length: default_short_break_length(),
            long_break_length: default_long_break_length(),
            long_break_interval: default_long_break_interval(),
        }
    }
}

/// `[tasks.<id>]` section: the structural view of a [`Task`](crate::dag::Task).
///
/// Absent optionals are omitted on output, since TOML has no null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub description: String,

    /// Duration string such as `"45m"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<String>,

    /// Ids this task waits for.
    #[serde(default)]
    pub depends_on: Vec<TaskId>,

    #[serde(default)]
    pub completed: bool,

    /// RFC 3339 timestamp, written as a quoted string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_at: Option<DateTime<Utc>>,
}
