// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

use crate::types::TaskId;

#[derive(Error, Debug)]
pub enum TaskTreeError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Circular dependency: {}", .path.join(" -> "))]
    CircularDependency { path: Vec<TaskId> },

    #[error("Task not found: {0}")]
    NotFound(TaskId),

    /// Ordering did not reach a fixed point. Only reachable if a cycle slipped
    /// past `detect_cycle`.
    #[error("Could not resolve a work order after {passes} passes")]
    UnresolvableOrder { passes: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, TaskTreeError>;
