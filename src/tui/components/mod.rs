//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Receive everything they show as struct fields:
//! - `BreadcrumbBar`: top line with the root → current chain and load spinner
//! - `Header`: title, description, count and tags of the current location
//! - `DetailModal`: overlay for a selected item
//!
//! ### Stateful Components (Event-Driven)
//!
//! Keep presentation state between frames and emit high-level events:
//! - `SearchBox`: query editing, emits the new query on every change
//! - `CardGrid`: card selection, emits the index of the picked card
//!
//! Stateful components follow the persistent state + transient wrapper
//! pattern: `CardGridState` lives in `TuiState`, `CardGrid` is built each
//! frame around borrowed state and props.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── breadcrumb_bar.rs
//! ├── header.rs
//! ├── card_grid.rs
//! ├── search_box.rs
//! └── detail_modal.rs
//! ```

pub mod breadcrumb_bar;
pub mod card_grid;
pub mod detail_modal;
pub mod header;
pub mod search_box;

pub use breadcrumb_bar::BreadcrumbBar;
pub use card_grid::{CardGrid, CardGridState, GridEvent};
pub use detail_modal::DetailModal;
pub use header::Header;
pub use search_box::{SearchBox, SearchEvent};
