//! # Core Catalog Logic
//!
//! Navigation, breadcrumbs and search over a read-only catalog tree.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • CatalogStore (data)  │
//!                    │  • NavigationController │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal, no timers │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   --dump   │      │    Web     │
//!     │  Adapter   │      │   (JSON)   │      │  (future)  │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`node`]: `CatalogNode`, the immutable records
//! - [`store`]: `CatalogStore`, lookups plus the JSON loader
//! - [`path`]: `PathResolver`, breadcrumbs from parent links
//! - [`search`]: the pure `filter` over a child list
//! - [`state`]: `NavigationState` snapshots and the session `App`
//! - [`controller`]: `NavigationController`, the only state transitions
//! - [`history`]: back/forward stack and URL shape
//! - [`view`]: display-ready header, cards and detail
//! - [`action`]: the `Action` enum and `update()` reducer

pub mod action;
pub mod config;
pub mod controller;
pub mod history;
pub mod node;
pub mod path;
pub mod search;
pub mod state;
pub mod store;
pub mod view;

pub use controller::{NavigationController, Selection};
pub use node::{CatalogNode, MetaValue, NodeKind, ROOT_ID};
pub use path::{BreadcrumbEntry, PathResolver};
pub use state::{App, NavigationState};
pub use store::{CatalogStore, LoadError};
