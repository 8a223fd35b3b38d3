//! # Application State
//!
//! Two layers:
//!
//! ```text
//! App                                  // session state, owned by the adapter
//! ├── controller: NavigationController
//! │   └── state: NavigationState       // snapshot of one location
//! │       ├── current_path             // node id or "root"
//! │       ├── current_item             // record for current_path
//! │       ├── children                 // unfiltered child list
//! │       ├── breadcrumb               // root → current_path
//! │       └── search_query             // "" = no filter
//! ├── detail: Option<node>             // open detail overlay
//! ├── is_loading: bool                 // a delayed load is pending
//! ├── loading_delay: Duration
//! ├── latest_ticket: u64               // newest scheduled load
//! └── status_message: String
//! ```
//!
//! A `NavigationState` is never edited field by field. Each transition builds
//! a new one and the old one is dropped, so children, breadcrumb and current
//! item always describe the same location.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::core::controller::NavigationController;
use crate::core::node::{CatalogNode, is_root};
use crate::core::path::BreadcrumbEntry;
use crate::core::search;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationState {
    current_path: String,
    current_item: Option<Arc<CatalogNode>>,
    children: Vec<Arc<CatalogNode>>,
    breadcrumb: Vec<BreadcrumbEntry>,
    search_query: String,
}

impl NavigationState {
    pub(crate) fn new(
        current_path: String,
        current_item: Option<Arc<CatalogNode>>,
        children: Vec<Arc<CatalogNode>>,
        breadcrumb: Vec<BreadcrumbEntry>,
    ) -> Self {
        Self {
            current_path,
            current_item,
            children,
            breadcrumb,
            search_query: String::new(),
        }
    }

    /// Same location, new query. Children are shared, not re-fetched.
    pub(crate) fn with_search_query(&self, query: &str) -> Self {
        Self {
            search_query: query.to_string(),
            ..self.clone()
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn current_item(&self) -> Option<&Arc<CatalogNode>> {
        self.current_item.as_ref()
    }

    /// Unfiltered children of the current path.
    pub fn children(&self) -> &[Arc<CatalogNode>] {
        &self.children
    }

    pub fn breadcrumb(&self) -> &[BreadcrumbEntry] {
        &self.breadcrumb
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn is_root(&self) -> bool {
        is_root(&self.current_path)
    }

    pub fn is_searching(&self) -> bool {
        !search::is_blank(&self.search_query)
    }

    /// What the grid shows: the children narrowed by the search query.
    pub fn visible_children(&self) -> Vec<Arc<CatalogNode>> {
        search::filter(&self.children, &self.search_query)
    }
}

pub struct App {
    pub controller: NavigationController,
    pub detail: Option<Arc<CatalogNode>>,
    pub is_loading: bool,
    pub loading_delay: Duration,
    pub latest_ticket: u64,
    pub status_message: String,
}

impl App {
    pub fn new(controller: NavigationController, loading_delay: Duration) -> Self {
        Self {
            controller,
            detail: None,
            is_loading: false,
            loading_delay,
            latest_ticket: 0,
            status_message: String::from("Welcome to Vitrine!"),
        }
    }

    pub fn state(&self) -> &NavigationState {
        self.controller.state()
    }
}
