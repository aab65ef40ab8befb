// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `tasktree`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tasktree",
    version,
    about = "Track tasks with dependencies and work through them in order.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the tasks file (TOML).
    ///
    /// Default: `Tasktree.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Tasktree.toml")]
    pub file: PathBuf,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKTREE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Load the file and check it for circular dependencies.
    Check,

    /// Print pending tasks in an order that respects dependencies.
    Order,

    /// Print every task with its status.
    List,

    /// Print tasks that can be started now.
    Next,

    /// Add a new task.
    Add {
        /// Task id.
        id: String,
        /// What needs to be done.
        description: String,
        /// Estimated duration, e.g. `45m`.
        #[arg(long, value_name = "DURATION")]
        estimate: Option<String>,
        /// Due date as an RFC 3339 timestamp.
        #[arg(long, value_name = "TIMESTAMP")]
        due: Option<String>,
        /// Ids this task depends on (repeatable).
        #[arg(long = "after", value_name = "ID")]
        after: Vec<String>,
    },

    /// Make one task depend on another.
    Depend {
        id: String,
        depends_on: String,
    },

    /// Mark a task complete.
    Complete { id: String },

    /// Remove a task and every dependency on it.
    Remove { id: String },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
