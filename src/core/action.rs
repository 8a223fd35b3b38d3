//! # Actions
//!
//! Everything that can happen in Vitrine becomes an `Action`.
//! User picks a card? That's `Action::Select(node)`.
//! A delayed load finishes? That's `Action::LoadReady(load)`.
//!
//! `update()` applies an action to the [`App`] and returns an [`Effect`]
//! for the adapter to carry out. No I/O here; timers and terminals live in
//! the adapter.
//!
//! ```text
//! App + Action  →  update()  →  App' + Effect
//! ```
//!
//! ## Delayed loads
//!
//! Navigation can be shown behind an artificial loading delay. Each load gets
//! a ticket; only the newest ticket is ever applied, so a slow earlier load
//! can never overwrite a later one.
//!
//! ```text
//! Navigate(a) → ScheduleLoad(#1)
//! Navigate(b) → ScheduleLoad(#2)
//! LoadReady(#2) → applied, location = b
//! LoadReady(#1) → stale, dropped
//! ```

use std::sync::Arc;

use log::{debug, info, warn};

use crate::core::controller::Selection;
use crate::core::node::CatalogNode;
use crate::core::state::App;

/// A navigation waiting for its delay to elapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLoad {
    pub ticket: u64,
    pub path: String,
    /// Fresh navigations are recorded in history; back/forward replays are not.
    pub record: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Go to a location by id. Item ids open their detail instead.
    Navigate(String),
    /// The user picked a card.
    Select(Arc<CatalogNode>),
    Search(String),
    Back,
    Forward,
    LoadReady(PendingLoad),
    CloseDetail,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Wait `App::loading_delay`, then send `Action::LoadReady(load)`.
    ScheduleLoad(PendingLoad),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Navigate(id) => {
            let leaf = app
                .controller
                .store()
                .node_by_id(&id)
                .filter(|node| node.is_item())
                .cloned();
            match leaf {
                Some(item) => {
                    open_selection(app, &item);
                    Effect::None
                }
                None => begin_load(app, id, true),
            }
        }
        Action::Select(node) => {
            if node.kind.is_container() {
                begin_load(app, node.id.clone(), true)
            } else {
                open_selection(app, &node);
                Effect::None
            }
        }
        Action::Search(query) => {
            let shown = app.controller.search(&query).len();
            app.status_message = if app.state().is_searching() {
                format!("{shown} matching \"{query}\"")
            } else {
                String::new()
            };
            Effect::None
        }
        Action::Back => match app.controller.history_mut().back() {
            Some(path) => {
                let path = path.to_string();
                begin_load(app, path, false)
            }
            None => {
                app.status_message = "Nothing to go back to".to_string();
                Effect::None
            }
        },
        Action::Forward => match app.controller.history_mut().forward() {
            Some(path) => {
                let path = path.to_string();
                begin_load(app, path, false)
            }
            None => {
                app.status_message = "Nothing to go forward to".to_string();
                Effect::None
            }
        },
        Action::LoadReady(load) => {
            if load.ticket != app.latest_ticket {
                warn!(
                    "Dropping stale load #{} for {:?} (latest is #{})",
                    load.ticket, load.path, app.latest_ticket
                );
                return Effect::None;
            }
            apply_load(app, &load.path, load.record);
            Effect::None
        }
        Action::CloseDetail => {
            app.detail = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Starts a navigation. With no delay configured it applies right away.
fn begin_load(app: &mut App, path: String, record: bool) -> Effect {
    app.latest_ticket += 1;
    app.detail = None;
    if app.loading_delay.is_zero() {
        apply_load(app, &path, record);
        return Effect::None;
    }
    app.is_loading = true;
    app.status_message = "Loading...".to_string();
    debug!("Scheduling load #{} for {:?}", app.latest_ticket, path);
    Effect::ScheduleLoad(PendingLoad {
        ticket: app.latest_ticket,
        path,
        record,
    })
}

fn apply_load(app: &mut App, path: &str, record: bool) {
    let state = if record {
        app.controller.navigate_to(path)
    } else {
        app.controller.restore(path)
    };
    let loaded = state.children().len();
    info!("Catalog loaded: {} elements", loaded);
    app.is_loading = false;
    app.status_message = app.controller.current_url();
}

/// Opening a detail supersedes any pending load, so the location under the
/// overlay stays put.
fn open_selection(app: &mut App, node: &Arc<CatalogNode>) {
    if let Selection::ShowDetail(item) = app.controller.select_item(node) {
        app.latest_ticket += 1;
        app.is_loading = false;
        app.detail = Some(item);
        app.status_message = format!("Viewing {}", node.title);
    }
}
