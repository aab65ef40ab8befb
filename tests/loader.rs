mod common;

use std::io::Write;
use std::time::Duration;

use tasktree::config::{load_and_validate, load_or_default, save_to_path, Settings};
use tasktree::errors::TaskTreeError;
use tasktree_test_utils::builders::CollectionBuilder;
use tempfile::{tempdir, NamedTempFile};

fn write_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn loads_tasks_and_settings() {
    common::init_tracing();
    let file = write_file(
        r#"
[settings]
pomodoro_length = "25m"
long_break_interval = 3

[tasks.A]
description = "a"
depends_on = ["B"]

[tasks.B]
description = "b"
estimated_duration = "45m"
"#,
    );

    let loaded = load_and_validate(file.path()).unwrap();
    assert_eq!(loaded.timings.pomodoro, Duration::from_secs(25 * 60));
    assert_eq!(loaded.timings.short_break, Duration::from_secs(5 * 60));
    assert_eq!(loaded.timings.long_break_interval, 3);
    assert_eq!(loaded.collection.work_order().unwrap(), common::ids(&["B", "A"]));
}

#[test]
fn missing_settings_use_defaults() {
    let file = write_file("[tasks.A]\ndescription = \"a\"\n");

    let loaded = load_and_validate(file.path()).unwrap();
    assert!(loaded.settings.is_none());
    assert_eq!(loaded.timings.pomodoro, Duration::from_secs(20 * 60));
    assert_eq!(loaded.timings.long_break, Duration::from_secs(15 * 60));
}

#[test]
fn invalid_settings_are_config_errors() {
    let file = write_file("[settings]\nlong_break_interval = 0\n");
    match load_and_validate(file.path()) {
        Err(TaskTreeError::ConfigError(msg)) => assert!(msg.contains("long_break_interval")),
        other => panic!("expected ConfigError, got {:?}", other),
    }

    let file = write_file("[settings]\npomodoro_length = \"0m\"\n");
    assert!(matches!(
        load_and_validate(file.path()),
        Err(TaskTreeError::ConfigError(_))
    ));
}

#[test]
fn cycle_in_file_is_structured_error() {
    let file = write_file(
        r#"
[tasks.A]
description = "a"
depends_on = ["B"]

[tasks.B]
description = "b"
depends_on = ["A"]
"#,
    );

    let err = load_and_validate(file.path()).unwrap_err();
    assert!(matches!(err, TaskTreeError::CircularDependency { .. }));
    assert!(err.to_string().contains("A -> B -> A"));
}

#[test]
fn missing_file_is_io_error_but_default_loader_starts_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Tasktree.toml");

    assert!(matches!(
        load_and_validate(&path),
        Err(TaskTreeError::IoError(_))
    ));

    let loaded = load_or_default(&path).unwrap();
    assert!(loaded.collection.is_empty());
}

#[test]
fn save_then_load_keeps_everything() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Tasktree.toml");

    let mut collection = CollectionBuilder::new()
        .with("A", &["B"])
        .with("B", &[])
        .build();
    collection.mark_complete("B").unwrap();

    let settings = Settings {
        pomodoro_length: "30m".to_string(),
        ..Settings::default()
    };
    save_to_path(&path, Some(&settings), &collection).unwrap();

    let loaded = load_and_validate(&path).unwrap();
    assert_eq!(loaded.settings, Some(settings));
    assert_eq!(loaded.timings.pomodoro, Duration::from_secs(30 * 60));
    assert_eq!(loaded.collection.to_records(), collection.to_records());
    assert_eq!(loaded.collection.work_order().unwrap(), common::ids(&["A"]));
}
