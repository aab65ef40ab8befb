mod common;

use std::error::Error;

use common::{assert_respects_dependencies, ids};
use tasktree::dag::TaskCollection;
use tasktree::errors::TaskTreeError;
use tasktree_test_utils::builders::{CollectionBuilder, TaskBuilder};

type TestResult = Result<(), Box<dyn Error>>;

fn chain() -> TaskCollection {
    CollectionBuilder::new()
        .with("A", &["B"])
        .with("B", &["C"])
        .with("C", &[])
        .build()
}

#[test]
fn chain_is_ordered_dependencies_first() -> TestResult {
    let collection = chain();
    assert_eq!(collection.work_order()?, ids(&["C", "B", "A"]));
    Ok(())
}

#[test]
fn independent_tasks_keep_registration_order() -> TestResult {
    let collection = CollectionBuilder::new()
        .with("X", &[])
        .with("Y", &[])
        .with("Z", &[])
        .build();

    assert_eq!(collection.work_order()?, ids(&["X", "Y", "Z"]));
    Ok(())
}

#[test]
fn diamond_orders_shared_dependency_first() -> TestResult {
    let collection = CollectionBuilder::new()
        .with("A", &["B", "C"])
        .with("B", &["D"])
        .with("C", &["D"])
        .with("D", &[])
        .build();

    let order = collection.work_order()?;
    assert_eq!(order, ids(&["D", "B", "C", "A"]));
    assert_respects_dependencies(collection.graph(), &order);
    Ok(())
}

#[test]
fn completed_tasks_drop_out_of_work_order() -> TestResult {
    let mut collection = chain();
    collection.mark_complete("C")?;

    assert_eq!(collection.work_order()?, ids(&["B", "A"]));
    assert!(collection.get("C").is_some_and(|t| t.is_completed()));
    assert!(collection.graph().is_complete("C"));
    Ok(())
}

#[test]
fn undefined_dependencies_are_ordered_as_placeholders() -> TestResult {
    let collection = CollectionBuilder::new().with("A", &["ghost"]).build();

    assert!(collection.graph().contains("ghost"));
    assert!(!collection.contains("ghost"));
    assert_eq!(collection.work_order()?, ids(&["ghost", "A"]));
    Ok(())
}

#[test]
fn placeholder_can_be_filled_in_later() -> TestResult {
    let mut collection = CollectionBuilder::new().with("A", &["B"]).build();
    collection.add_task(TaskBuilder::new("B").after("C").build())?;

    assert_eq!(collection.work_order()?, ids(&["C", "B", "A"]));
    Ok(())
}

#[test]
fn rejected_dependency_leaves_order_intact() -> TestResult {
    let mut collection = CollectionBuilder::new()
        .with("A", &["B"])
        .with("B", &[])
        .build();

    let err = collection.add_dependency("B", "A").unwrap_err();
    assert!(matches!(err, TaskTreeError::CircularDependency { .. }));

    assert_eq!(collection.work_order()?, ids(&["B", "A"]));
    Ok(())
}

#[test]
fn removing_a_task_prunes_edges_in_both_directions() -> TestResult {
    let mut collection = CollectionBuilder::new()
        .with("A", &["B"])
        .with("B", &["C"])
        .with("C", &[])
        .build();

    let removed = collection.remove_task("B")?;
    assert_eq!(removed.id(), "B");

    let a = collection.get("A").expect("A is still present");
    assert!(!a.depends_on().contains(&"B".to_string()));
    assert!(!collection.graph().contains("B"));

    let order = collection.work_order()?;
    assert!(!order.contains(&"B".to_string()));
    assert_eq!(order, ids(&["A", "C"]));
    Ok(())
}

#[test]
fn removing_last_reference_drops_placeholder() -> TestResult {
    let mut collection = CollectionBuilder::new()
        .with("A", &["ghost"])
        .with("B", &[])
        .build();

    collection.remove_task("A")?;
    assert!(!collection.graph().contains("ghost"));
    assert_eq!(collection.work_order()?, ids(&["B"]));
    Ok(())
}

#[test]
fn removing_unknown_task_is_not_found() {
    let mut collection = chain();
    match collection.remove_task("nope") {
        Err(TaskTreeError::NotFound(id)) => assert_eq!(id, "nope"),
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert_eq!(collection.len(), 3);
}

#[test]
fn ready_tasks_have_all_dependencies_done() -> TestResult {
    let mut collection = CollectionBuilder::new()
        .with("A", &["B", "C"])
        .with("B", &[])
        .with("C", &[])
        .build();

    let ready: Vec<&str> = collection.ready_tasks().iter().map(|t| t.id()).collect();
    assert_eq!(ready, vec!["B", "C"]);

    collection.mark_complete("B")?;
    collection.mark_complete("C")?;
    let ready: Vec<&str> = collection.ready_tasks().iter().map(|t| t.id()).collect();
    assert_eq!(ready, vec!["A"]);
    Ok(())
}

#[test]
fn empty_collection_has_empty_order() -> TestResult {
    let collection = TaskCollection::new();
    assert!(collection.work_order()?.is_empty());
    Ok(())
}
