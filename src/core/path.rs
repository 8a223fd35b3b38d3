//! # Breadcrumbs
//!
//! Derives the root-to-node chain by walking parent links in the store.
//! Always starts with the root entry; unknown ids get the root entry alone.

use std::sync::Arc;

use log::warn;
use serde::Serialize;

use crate::core::node::{ROOT_ID, is_root};
use crate::core::store::CatalogStore;

pub const DEFAULT_ROOT_TITLE: &str = "Home";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbEntry {
    pub id: String,
    pub title: String,
    /// Depth below the root (root = 0).
    pub level: usize,
}

pub struct PathResolver {
    store: Arc<CatalogStore>,
    root_title: String,
}

impl PathResolver {
    pub fn new(store: Arc<CatalogStore>, root_title: impl Into<String>) -> Self {
        Self {
            store,
            root_title: root_title.into(),
        }
    }

    pub fn root_entry(&self) -> BreadcrumbEntry {
        BreadcrumbEntry {
            id: ROOT_ID.to_string(),
            title: self.root_title.clone(),
            level: 0,
        }
    }

    pub fn breadcrumb_for(&self, id: &str) -> Vec<BreadcrumbEntry> {
        let root = self.root_entry();
        if is_root(id) {
            return vec![root];
        }
        let Some(node) = self.store.node_by_id(id) else {
            return vec![root];
        };

        // Walk up from the node, then flip to root-first order.
        let mut chain = vec![node];
        let mut cursor = self.store.parent_of(id);
        while let Some(parent_id) = cursor {
            if is_root(parent_id) {
                break;
            }
            let Some(parent) = self.store.node_by_id(parent_id) else {
                // Detached list: show what is known below the gap.
                break;
            };
            if chain.len() > self.store.len() {
                warn!("Parent chain of {id:?} does not terminate, showing root only");
                return vec![root];
            }
            chain.push(parent);
            cursor = self.store.parent_of(parent_id);
        }

        std::iter::once(root)
            .chain(chain.iter().rev().enumerate().map(|(depth, node)| BreadcrumbEntry {
                id: node.id.clone(),
                title: node.title.clone(),
                level: depth + 1,
            }))
            .collect()
    }
}
