// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::model::{Settings, TaskFile};
use crate::config::validate::{undefined_dependencies, validate_settings, SessionTimings};
use crate::dag::TaskCollection;
use crate::errors::Result;

/// A tasks file after validation: settings plus the rebuilt collection.
#[derive(Debug, Clone)]
pub struct LoadedTasks {
    /// `[settings]` as written, kept so saving does not add or drop it.
    pub settings: Option<Settings>,
    pub timings: SessionTimings,
    pub collection: TaskCollection,
}

/// Load a tasks file from a given path and return the raw `TaskFile`.
///
/// This only performs TOML deserialization; it does **not** rebuild the
/// dependency graph. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<TaskFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = contents.len(), "read tasks file");

    let file: TaskFile = toml::from_str(&contents)?;
    Ok(file)
}

/// Load a tasks file and run full validation.
///
/// - Reads TOML.
/// - Checks `[settings]`.
/// - Replays every task into a [`TaskCollection`], which rejects duplicate
///   ids, self-dependencies and cycles.
///
/// Dependencies on undefined ids are allowed and logged at `warn`.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<LoadedTasks> {
    let file = load_from_path(&path)?;
    from_task_file(file)
}

/// Like [`load_and_validate`], but a missing file yields an empty
/// collection with default settings.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<LoadedTasks> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "tasks file not found; starting empty");
        return from_task_file(TaskFile::default());
    }
    load_and_validate(path)
}

/// Validate an already parsed [`TaskFile`].
pub fn from_task_file(file: TaskFile) -> Result<LoadedTasks> {
    let timings = match file.settings.as_ref() {
        Some(settings) => validate_settings(settings)?,
        None => SessionTimings::default(),
    };

    for (task, dep) in undefined_dependencies(&file) {
        warn!(
            task = %task,
            dependency = %dep,
            "dependency has no [tasks] entry; tracking it as a placeholder"
        );
    }

    let collection = TaskCollection::from_records(&file.tasks)?;
    debug!(
        tasks = collection.len(),
        nodes = collection.graph().len(),
        "rebuilt task collection"
    );

    Ok(LoadedTasks {
        settings: file.settings,
        timings,
        collection,
    })
}

/// Write settings and tasks back to `path` as TOML.
pub fn save_to_path(
    path: impl AsRef<Path>,
    settings: Option<&Settings>,
    collection: &TaskCollection,
) -> Result<()> {
    let path = path.as_ref();
    let file = TaskFile {
        settings: settings.cloned(),
        tasks: collection.to_records(),
    };
    let contents = toml::to_string_pretty(&file)?;
    fs::write(path, contents)?;
    debug!(path = %path.display(), tasks = collection.len(), "wrote tasks file");
    Ok(())
}

/// Default tasks file: `Tasktree.toml` in the current working directory.
pub fn default_tasks_path() -> PathBuf {
    PathBuf::from("Tasktree.toml")
}
