//! # Catalog Store
//!
//! Read-only hierarchical data source. The catalog arrives as child lists
//! keyed by parent id (`"root"` for the top level):
//!
//! ```text
//! {
//!   "root":   [stamps, menu, ...],
//!   "stamps": [stamps-cities, stamps-nature, ...],
//!   ...
//! }
//! ```
//!
//! Loading builds two indexes once: id → node and id → parent id. The parent
//! index is what breadcrumbs are derived from, so a node added to the data
//! never needs a hand-maintained ancestor table.
//!
//! Lookups never fail. Unknown ids degrade to "no children" and "no node".
//! Malformed data is rejected here, at load time, before the core sees it.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::{info, warn};

use crate::core::node::{CatalogNode, ROOT_ID, is_root};

/// Demo catalog bundled into the binary.
pub const DEMO_CATALOG: &str = include_str!("../../assets/demo_catalog.json");

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// A node uses the root sentinel (or an empty string) as its id.
    ReservedId(String),
    /// A node appears in more than one child list.
    DuplicateNode {
        id: String,
        first_parent: String,
        second_parent: String,
    },
    /// Following parent links from this node never reaches the root.
    Cycle(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "catalog I/O error: {e}"),
            LoadError::Parse(e) => write!(f, "catalog parse error: {e}"),
            LoadError::ReservedId(id) => write!(f, "node id {id:?} is reserved for the root"),
            LoadError::DuplicateNode {
                id,
                first_parent,
                second_parent,
            } => write!(
                f,
                "node {id:?} is listed under both {first_parent:?} and {second_parent:?}"
            ),
            LoadError::Cycle(id) => write!(f, "parent chain of node {id:?} loops"),
        }
    }
}

impl std::error::Error for LoadError {}

#[derive(Debug, Default)]
pub struct CatalogStore {
    lists: HashMap<String, Vec<Arc<CatalogNode>>>,
    nodes: HashMap<String, Arc<CatalogNode>>,
    parents: HashMap<String, String>,
}

impl CatalogStore {
    /// Build a store from `(parent id, children)` lists.
    pub fn from_lists<I>(lists: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = (String, Vec<CatalogNode>)>,
    {
        let mut store = CatalogStore::default();

        for (parent, children) in lists {
            let parent = if is_root(&parent) {
                ROOT_ID.to_string()
            } else {
                parent
            };
            let mut list = Vec::with_capacity(children.len());
            for child in children {
                if is_root(&child.id) {
                    return Err(LoadError::ReservedId(child.id));
                }
                if let Some(first_parent) = store.parents.get(&child.id) {
                    return Err(LoadError::DuplicateNode {
                        id: child.id,
                        first_parent: first_parent.clone(),
                        second_parent: parent,
                    });
                }
                let child = Arc::new(child);
                store.parents.insert(child.id.clone(), parent.clone());
                store.nodes.insert(child.id.clone(), child.clone());
                list.push(child);
            }
            store.lists.entry(parent).or_default().extend(list);
        }

        store.check_parent_chains()?;
        store.warn_on_loose_lists();
        Ok(store)
    }

    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let lists: HashMap<String, Vec<CatalogNode>> =
            serde_json::from_str(json).map_err(LoadError::Parse)?;
        Self::from_lists(lists)
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let contents = fs::read_to_string(path).map_err(LoadError::Io)?;
        let store = Self::from_json_str(&contents)?;
        info!(
            "Loaded catalog from {}: {} nodes in {} lists",
            path.display(),
            store.len(),
            store.lists.len()
        );
        Ok(store)
    }

    pub fn demo() -> Result<Self, LoadError> {
        Self::from_json_str(DEMO_CATALOG)
    }

    /// Children of `id` in authorial order. Unknown ids have no children.
    pub fn children_of(&self, id: &str) -> &[Arc<CatalogNode>] {
        let key = if is_root(id) { ROOT_ID } else { id };
        self.lists.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Looks the id up across the whole catalog. The root has no record.
    pub fn node_by_id(&self, id: &str) -> Option<&Arc<CatalogNode>> {
        self.nodes.get(id)
    }

    /// Id of the list `id` belongs to (`"root"` for top-level nodes).
    pub fn parent_of(&self, id: &str) -> Option<&str> {
        self.parents.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn check_parent_chains(&self) -> Result<(), LoadError> {
        for id in self.nodes.keys() {
            let mut steps = 0;
            let mut cursor = self.parent_of(id);
            while let Some(parent) = cursor {
                if is_root(parent) {
                    break;
                }
                steps += 1;
                if steps > self.nodes.len() {
                    return Err(LoadError::Cycle(id.clone()));
                }
                cursor = self.parent_of(parent);
            }
        }
        Ok(())
    }

    fn warn_on_loose_lists(&self) {
        for (parent, children) in &self.lists {
            if is_root(parent) || children.is_empty() {
                continue;
            }
            match self.nodes.get(parent) {
                None => warn!(
                    "Child list {:?} ({} nodes) has no owning node and is unreachable from the root",
                    parent,
                    children.len()
                ),
                Some(owner) if owner.is_item() => warn!(
                    "Item {:?} owns {} children; items open as details and never show them",
                    parent,
                    children.len()
                ),
                Some(_) => {}
            }
        }
    }
}
