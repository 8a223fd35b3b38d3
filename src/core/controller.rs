//! # Navigation Controller
//!
//! Owns the current [`NavigationState`] and is the only thing that replaces
//! it. Every command is total: unknown ids, leaves passed where containers
//! were expected and empty queries all resolve to a valid state.
//!
//! ```text
//! navigate_to(id)  ─┐
//! go_back()        ─┼─► store.children_of + resolver.breadcrumb_for
//! go_forward()     ─┘   + store.node_by_id  ──►  new NavigationState
//!
//! search(q)        ───► same location, new query (children untouched)
//! select_item(n)   ───► item: ShowDetail(n) | container: navigate_to(n.id)
//! ```

use std::sync::Arc;

use log::{debug, info};

use crate::core::history::{self, History};
use crate::core::node::{CatalogNode, ROOT_ID, is_root};
use crate::core::path::PathResolver;
use crate::core::state::NavigationState;
use crate::core::store::CatalogStore;

/// Outcome of [`NavigationController::select_item`].
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// A leaf was selected. The location did not change.
    ShowDetail(Arc<CatalogNode>),
    /// A container was selected and is now the current location.
    Navigated,
}

pub struct NavigationController {
    store: Arc<CatalogStore>,
    resolver: PathResolver,
    state: NavigationState,
    history: History,
}

impl NavigationController {
    /// Starts a session at the root.
    pub fn new(store: Arc<CatalogStore>, root_title: impl Into<String>) -> Self {
        let resolver = PathResolver::new(store.clone(), root_title);
        let state = resolve(&store, &resolver, ROOT_ID);
        Self {
            store,
            resolver,
            state,
            history: History::default(),
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// URL the current location persists as.
    pub fn current_url(&self) -> String {
        history::url_for(self.state.current_path())
    }

    /// Moves to `id` and records it in history. Clears the search query.
    pub fn navigate_to(&mut self, id: &str) -> &NavigationState {
        self.state = resolve(&self.store, &self.resolver, id);
        self.history.push(self.state.current_path());
        info!(
            "Navigated to {:?} ({} children, depth {})",
            self.state.current_path(),
            self.state.children().len(),
            self.state.breadcrumb().len() - 1
        );
        &self.state
    }

    /// Re-enters a previously seen path without touching history.
    pub fn restore(&mut self, id: &str) -> &NavigationState {
        self.state = resolve(&self.store, &self.resolver, id);
        info!("Restored {:?}", self.state.current_path());
        &self.state
    }

    pub fn select_item(&mut self, item: &Arc<CatalogNode>) -> Selection {
        if item.kind.is_container() {
            self.navigate_to(&item.id);
            Selection::Navigated
        } else {
            debug!("Opening detail for {:?}", item.id);
            Selection::ShowDetail(item.clone())
        }
    }

    /// Sets the query and returns the filtered view of the current children.
    pub fn search(&mut self, query: &str) -> Vec<Arc<CatalogNode>> {
        self.state = self.state.with_search_query(query);
        let view = self.state.visible_children();
        debug!(
            "Search {:?} in {:?}: {}/{} shown",
            query,
            self.state.current_path(),
            view.len(),
            self.state.children().len()
        );
        view
    }

    pub fn go_back(&mut self) -> Option<&NavigationState> {
        let path = self.history.back()?.to_string();
        Some(self.restore(&path))
    }

    pub fn go_forward(&mut self) -> Option<&NavigationState> {
        let path = self.history.forward()?.to_string();
        Some(self.restore(&path))
    }
}

/// Builds the three derived fields together so they always agree.
fn resolve(store: &CatalogStore, resolver: &PathResolver, id: &str) -> NavigationState {
    let path = if is_root(id) { ROOT_ID } else { id };
    let current_item = if is_root(path) {
        None
    } else {
        store.node_by_id(path).cloned()
    };
    NavigationState::new(
        path.to_string(),
        current_item,
        store.children_of(path).to_vec(),
        resolver.breadcrumb_for(path),
    )
}
