// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod types;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::config::{
    load_and_validate, load_or_default, save_to_path, LoadedTasks, SessionTimings,
};
use crate::dag::{Task, TaskCollection, TaskOptions};
use crate::types::{format_duration, parse_duration, parse_timestamp};

/// High-level entry point used by `main.rs`.
///
/// Loads the tasks file, applies the subcommand and, for commands that
/// change anything, writes the file back.
pub fn run(args: CliArgs) -> Result<()> {
    let path = args.file.as_path();

    match args.command {
        Command::Check => {
            let loaded = load_and_validate(path)
                .with_context(|| format!("loading tasks from {:?}", path))?;
            loaded.collection.work_order()?;
            println!("ok: {} tasks, no circular dependencies", loaded.collection.len());
        }
        Command::Order => {
            let loaded = load_and_validate(path)
                .with_context(|| format!("loading tasks from {:?}", path))?;
            print_work_order(&loaded.collection)?;
        }
        Command::List => {
            let loaded = load_and_validate(path)
                .with_context(|| format!("loading tasks from {:?}", path))?;
            print_tasks(&loaded.collection, Utc::now());
        }
        Command::Next => {
            let loaded = load_and_validate(path)
                .with_context(|| format!("loading tasks from {:?}", path))?;
            print_next(&loaded.collection, &loaded.timings);
        }
        Command::Add {
            id,
            description,
            estimate,
            due,
            after,
        } => {
            let mut loaded = load_or_default(path)?;
            let options = TaskOptions {
                estimated_duration: estimate
                    .as_deref()
                    .map(parse_duration)
                    .transpose()
                    .map_err(anyhow::Error::msg)
                    .context("invalid --estimate")?,
                due_at: due
                    .as_deref()
                    .map(parse_timestamp)
                    .transpose()
                    .map_err(anyhow::Error::msg)
                    .context("invalid --due")?,
            };
            let mut task = Task::with_id(id.clone(), description, options)?;
            for dep in after {
                task.add_dependency(dep)?;
            }
            loaded.collection.add_task(task)?;
            info!(task = %id, "added task");
            save(path, &loaded)?;
        }
        Command::Depend { id, depends_on } => {
            let mut loaded = load_and_validate(path)?;
            loaded.collection.add_dependency(&id, &depends_on)?;
            info!(task = %id, depends_on = %depends_on, "added dependency");
            save(path, &loaded)?;
        }
        Command::Complete { id } => {
            let mut loaded = load_and_validate(path)?;
            loaded.collection.mark_complete(&id)?;
            info!(task = %id, "marked complete");
            save(path, &loaded)?;
        }
        Command::Remove { id } => {
            let mut loaded = load_and_validate(path)?;
            let removed = loaded.collection.remove_task(&id)?;
            info!(task = %id, description = removed.description(), "removed task");
            save(path, &loaded)?;
        }
    }

    Ok(())
}

fn save(path: &std::path::Path, loaded: &LoadedTasks) -> Result<()> {
    save_to_path(path, loaded.settings.as_ref(), &loaded.collection)
        .with_context(|| format!("writing tasks to {:?}", path))
}

fn print_work_order(collection: &TaskCollection) -> Result<()> {
    let order = collection.work_order()?;
    for (i, id) in order.iter().enumerate() {
        match collection.get(id) {
            Some(task) => println!("{:>3}. {}  {}", i + 1, id, task.description()),
            None => println!("{:>3}. {}  (not defined)", i + 1, id),
        }
    }
    debug!(pending = order.len(), "printed work order");
    Ok(())
}

fn print_tasks(collection: &TaskCollection, now: DateTime<Utc>) {
    println!("tasks ({}):", collection.len());
    for task in collection.tasks() {
        let status = if task.is_completed() {
            "done"
        } else if task.is_overdue(now) {
            "overdue"
        } else {
            "pending"
        };
        println!("  - {} [{}] {}", task.id(), status, task.description());
        if let Some(est) = task.estimated_duration() {
            println!("      estimate: {}", format_duration(est));
        }
        if let Some(due) = task.due_at() {
            println!("      due: {}", due.to_rfc3339());
        }
        if task.has_dependencies() {
            println!("      depends on: {:?}", task.depends_on());
        }
    }
}

fn print_next(collection: &TaskCollection, timings: &SessionTimings) {
    let ready = collection.ready_tasks();
    let Some(first) = ready.first() else {
        println!("nothing to start: every pending task is waiting on a dependency");
        return;
    };

    println!("ready to start:");
    for task in &ready {
        println!("  - {}  {}", task.id(), task.description());
    }

    println!();
    println!(
        "next up: {} ({} work, {} short break, {} long break every {} sessions)",
        first.id(),
        format_duration(timings.pomodoro),
        format_duration(timings.short_break),
        format_duration(timings.long_break),
        timings.long_break_interval
    );
    if let Some(est) = first.estimated_duration() {
        let sessions = est.as_secs().div_ceil(timings.pomodoro.as_secs().max(1));
        println!("estimated {} (about {} sessions)", format_duration(est), sessions);
    }
}
