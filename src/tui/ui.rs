use crate::core::state::App;
use crate::core::view::{CategoryHeader, DetailView, GridCell};
use crate::tui::component::Component;
use crate::tui::components::{BreadcrumbBar, CardGrid, DetailModal, Header};
use crate::tui::{InputMode, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const BROWSE_HINTS: &str = "←↑↓→ move · Enter open · / search · Alt+← back · Home · Ctrl+C quit";
const SEARCH_HINTS: &str = "Enter/↓ done · Esc clear";
const DETAIL_HINTS: &str = "Esc close";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(4), Min(0), Length(3), Length(1)]);
    let [crumb_area, header_area, grid_area, search_area, help_area] =
        layout.areas(frame.area());

    let state = app.state();

    BreadcrumbBar::new(state.breadcrumb().to_vec(), app.is_loading, spinner_frame)
        .render(frame, crumb_area);

    Header::new(CategoryHeader::from_state(state)).render(frame, header_area);

    let cells: Vec<GridCell> = state
        .visible_children()
        .iter()
        .map(|node| GridCell::from_node(node, tui.limits))
        .collect();
    let empty_message = if state.is_searching() {
        "Nothing found"
    } else {
        "This category is empty"
    };
    CardGrid::new(&mut tui.grid, &cells, empty_message).render(frame, grid_area);

    tui.search_box.focused = tui.input_mode == InputMode::Search && app.detail.is_none();
    tui.search_box.render(frame, search_area);

    let hints = if app.detail.is_some() {
        DETAIL_HINTS
    } else if tui.input_mode == InputMode::Search {
        SEARCH_HINTS
    } else {
        BROWSE_HINTS
    };
    let help = Line::from(vec![
        Span::styled(app.status_message.as_str(), Style::default().fg(Color::Green)),
        Span::styled(format!("  {hints}"), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(help, help_area);

    // Detail overlay goes last so it covers the grid
    if let Some(node) = &app.detail {
        let view = DetailView::from_node(node);
        DetailModal::new(&view).render(frame, frame.area());
    }
}
