// src/config/mod.rs

//! Reading and writing the tasks file.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load and save the file (`loader.rs`).
//! - Validate `[settings]` and flag suspicious references (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{
    default_tasks_path, load_and_validate, load_from_path, load_or_default, save_to_path,
    LoadedTasks,
};
pub use model::{Settings, TaskFile, TaskRecord};
pub use validate::{validate_settings, SessionTimings};
