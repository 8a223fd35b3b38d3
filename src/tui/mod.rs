//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui, crossterm and timers.
//! The core decides *that* a load must wait; this layer does the waiting.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the breadcrumb spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! ## Delayed loads
//!
//! `Effect::ScheduleLoad` spawns a tokio task that sleeps for the configured
//! delay and sends `Action::LoadReady` back over a channel. Starting a new
//! load aborts the previous task; the ticket check in `update()` still
//! rejects anything that slips through.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect, PendingLoad, update};
use crate::core::config::ResolvedConfig;
use crate::core::controller::NavigationController;
use crate::core::node::ROOT_ID;
use crate::core::state::{App, NavigationState};
use crate::core::store::CatalogStore;
use crate::core::view::DisplayLimits;
use crate::tui::component::EventHandler;
use crate::tui::components::{CardGridState, GridEvent, SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Arrow keys move over the grid. Typing switches to Search.
    Browse,
    /// Keys edit the search query. Enter/Esc switch back to Browse.
    Search,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub grid: CardGridState,
    pub search_box: SearchBox,
    pub input_mode: InputMode,
    pub limits: DisplayLimits,
    // Location + query the grid selection belongs to
    last_view: (String, String),
}

impl TuiState {
    pub fn new(limits: DisplayLimits) -> Self {
        Self {
            grid: CardGridState::new(),
            search_box: SearchBox::new(),
            input_mode: InputMode::Browse,
            limits,
            last_view: (String::new(), String::new()),
        }
    }

    /// Follows core state changes the components did not cause themselves:
    /// a new location resets the selection and drops a stale query buffer.
    fn sync_with(&mut self, state: &NavigationState) {
        let view = (
            state.current_path().to_string(),
            state.search_query().to_string(),
        );
        if view != self.last_view {
            self.grid.reset();
            self.last_view = view;
        }
        if self.search_box.buffer != state.search_query() {
            self.search_box.buffer = state.search_query().to_string();
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig, store: CatalogStore) -> std::io::Result<()> {
    let mut controller = NavigationController::new(Arc::new(store), config.root_title.clone());
    controller.navigate_to(&config.start_path);
    let mut app = App::new(controller, config.loading_delay);
    let mut tui = TuiState::new(config.limits);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // The one pending delayed load, if any
    let mut pending_load: Option<AbortHandle> = None;

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        tui.sync_with(app.state());

        if app.is_loading {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if app.is_loading {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Each event is routed against the state left by the previous one
            if let Some(action) = route_event(&app, &mut tui, event) {
                if !dispatch(&mut app, std::iter::once(action), &mut pending_load, &tx) {
                    should_quit = true;
                    break;
                }
                tui.sync_with(app.state());
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (finished delayed loads)
        let finished: Vec<Action> = rx.try_iter().collect();
        if !finished.is_empty() {
            needs_redraw = true;
            debug!("Event loop received {} background action(s)", finished.len());
            if !dispatch(&mut app, finished.into_iter(), &mut pending_load, &tx) {
                break;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

/// Applies actions and carries out their effects. Returns `false` on quit.
fn dispatch(
    app: &mut App,
    actions: impl Iterator<Item = Action>,
    pending_load: &mut Option<AbortHandle>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    for action in actions {
        match update(app, action) {
            Effect::Quit => return false,
            Effect::ScheduleLoad(load) => {
                if let Some(previous) = pending_load.take() {
                    previous.abort();
                }
                *pending_load = Some(spawn_load(load, app.loading_delay, tx.clone()));
            }
            Effect::None => {}
        }
    }
    true
}

/// Translates one terminal event into at most one core action, updating
/// component state on the way.
fn route_event(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Resize => return None,
        TuiEvent::ForceQuit => return Some(Action::Quit),
        _ => {}
    }

    // The detail overlay swallows everything until it is closed
    if app.detail.is_some() {
        return match event {
            TuiEvent::Escape | TuiEvent::Submit | TuiEvent::Backspace => {
                Some(Action::CloseDetail)
            }
            _ => None,
        };
    }

    match event {
        TuiEvent::HistoryBack => return Some(Action::Back),
        TuiEvent::HistoryForward => return Some(Action::Forward),
        TuiEvent::Home => return Some(Action::Navigate(ROOT_ID.to_string())),
        _ => {}
    }

    match tui.input_mode {
        InputMode::Search => {
            let search_event = tui.search_box.handle_event(&event)?;
            match search_event {
                SearchEvent::Changed(query) => Some(Action::Search(query)),
                SearchEvent::Done => {
                    tui.input_mode = InputMode::Browse;
                    None
                }
                SearchEvent::Cleared => {
                    tui.input_mode = InputMode::Browse;
                    Some(Action::Search(String::new()))
                }
            }
        }
        InputMode::Browse => match event {
            TuiEvent::InputChar('/') => {
                tui.input_mode = InputMode::Search;
                None
            }
            // Typing auto-switches to Search and forwards the key
            TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
                tui.input_mode = InputMode::Search;
                match tui.search_box.handle_event(&event)? {
                    SearchEvent::Changed(query) => Some(Action::Search(query)),
                    _ => None,
                }
            }
            TuiEvent::Backspace if tui.search_box.buffer.is_empty() => Some(Action::Back),
            TuiEvent::Backspace => {
                tui.input_mode = InputMode::Search;
                match tui.search_box.handle_event(&event)? {
                    SearchEvent::Changed(query) => Some(Action::Search(query)),
                    _ => None,
                }
            }
            TuiEvent::Escape if app.state().is_searching() => {
                tui.search_box.clear();
                Some(Action::Search(String::new()))
            }
            _ => match tui.grid.handle_event(&event)? {
                GridEvent::Select(index) => {
                    let node = app.state().visible_children().get(index).cloned();
                    if node.is_none() {
                        warn!("Grid selection {} is out of range", index);
                    }
                    node.map(Action::Select)
                }
            },
        },
    }
}

fn spawn_load(load: PendingLoad, delay: Duration, tx: mpsc::Sender<Action>) -> AbortHandle {
    debug!("Spawning delayed load #{} ({:?})", load.ticket, delay);
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let ticket = load.ticket;
        if tx.send(Action::LoadReady(load)).is_err() {
            warn!("Failed to deliver load #{}: receiver dropped", ticket);
        }
    });
    handle.abort_handle()
}
