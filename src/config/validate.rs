// src/config/validate.rs

use std::time::Duration;

use crate::config::model::{Settings, TaskFile};
use crate::errors::{Result, TaskTreeError};
use crate::types::{parse_duration, TaskId};

/// Validated, typed form of [`Settings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTimings {
    pub pomodoro: Duration,
    pub short_break: Duration,
    pub long_break: Duration,
    pub long_break_interval: u32,
}

impl Default for SessionTimings {
    fn default() -> Self {
        Self {
            pomodoro: Duration::from_secs(20 * 60),
            short_break: Duration::from_secs(5 * 60),
            long_break: Duration::from_secs(15 * 60),
            long_break_interval: 4,
        }
    }
}

impl TryFrom<&Settings> for SessionTimings {
    type Error = TaskTreeError;

    fn try_from(settings: &Settings) -> std::result::Result<Self, Self::Error> {
        validate_settings(settings)
    }
}

/// Check the `[settings]` section and convert it to [`SessionTimings`].
///
/// Every length must parse and be non-zero, and `long_break_interval`
/// must be at least 1.
pub fn validate_settings(settings: &Settings) -> Result<SessionTimings> {
    let pomodoro = non_zero_length("pomodoro_length", &settings.pomodoro_length)?;
    let short_break = non_zero_length("short_break_length", &settings.short_break_length)?;
    let long_break = non_zero_length("long_break_length", &settings.long_break_length)?;

    if settings.long_break_interval == 0 {
        return Err(TaskTreeError::ConfigError(
            "[settings].long_break_interval must be >= 1 (got 0)".to_string(),
        ));
    }

    Ok(SessionTimings {
        pomodoro,
        short_break,
        long_break,
        long_break_interval: settings.long_break_interval,
    })
}

fn non_zero_length(field: &str, value: &str) -> Result<Duration> {
    let d = parse_duration(value)
        .map_err(|e| TaskTreeError::ConfigError(format!("[settings].{}: {}", field, e)))?;
    if d.is_zero() {
        return Err(TaskTreeError::ConfigError(format!(
            "[settings].{} must be greater than zero",
            field
        )));
    }
    Ok(d)
}

/// Dependencies that name an id with no `[tasks.<id>]` section.
///
/// These are legal (they become placeholders in the graph) but usually a
/// typo, so the loader reports them.
pub fn undefined_dependencies(file: &TaskFile) -> Vec<(TaskId, TaskId)> {
    let mut missing = Vec::new();
    for (id, record) in file.tasks.iter() {
        for dep in record.depends_on.iter() {
            if !file.tasks.contains_key(dep) {
                missing.push((id.clone(), dep.clone()));
            }
        }
    }
    missing
}
