//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::time::Duration;

use crate::core::controller::NavigationController;
use crate::core::node::{CatalogNode, NodeKind, ROOT_ID};
use crate::core::path::DEFAULT_ROOT_TITLE;
use crate::core::state::App;
use crate::core::store::CatalogStore;

pub fn node(id: &str, title: &str, kind: NodeKind) -> CatalogNode {
    CatalogNode::new(id, title, kind)
}

/// `root -> [A (category), B (item)]`, `A -> [C (item)]`.
pub fn scenario_store() -> Arc<CatalogStore> {
    let store = CatalogStore::from_lists(vec![
        (
            ROOT_ID.to_string(),
            vec![
                node("A", "Category A", NodeKind::Category)
                    .with_description("The only category")
                    .with_child_count(1),
                node("B", "Item B", NodeKind::Item).with_tags(["leaf"]),
            ],
        ),
        (
            "A".to_string(),
            vec![node("C", "Item C", NodeKind::Item).with_description("Inside A")],
        ),
    ])
    .unwrap();
    Arc::new(store)
}

pub fn demo_store() -> Arc<CatalogStore> {
    Arc::new(CatalogStore::demo().unwrap())
}

/// Creates a test App over the scenario store, with no loading delay.
pub fn test_app() -> App {
    test_app_with_delay(Duration::ZERO)
}

pub fn test_app_with_delay(delay: Duration) -> App {
    App::new(
        NavigationController::new(scenario_store(), DEFAULT_ROOT_TITLE),
        delay,
    )
}
