#![allow(dead_code)]

use std::collections::HashMap;

use tasktree::dag::DependencyGraph;

pub use tasktree_test_utils::init_tracing;

/// Assert that `order` lists each id once and that every dependency listed
/// in `order` comes before its dependent.
pub fn assert_respects_dependencies(graph: &DependencyGraph, order: &[String]) {
    let mut position = HashMap::new();
    for (i, id) in order.iter().enumerate() {
        assert!(
            position.insert(id.as_str(), i).is_none(),
            "id {} appears more than once in {:?}",
            id,
            order
        );
    }

    for id in order {
        for dep in graph.dependencies_of(id) {
            if let Some(&dep_pos) = position.get(dep.as_str()) {
                assert!(
                    dep_pos < position[id.as_str()],
                    "{} depends on {} but comes first in {:?}",
                    id,
                    dep,
                    order
                );
            }
        }
    }
}

pub fn ids(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
