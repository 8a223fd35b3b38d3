//! # CardGrid Component
//!
//! The catalog grid: one bordered card per visible child, laid out in as many
//! columns as fit. Arrow keys move the selection, Enter picks a card.
//!
//! ```text
//! ╭ 🏛️ Postage Stamps ──── 245 ╮╭ 💌 Postcards ─────────── 89 ╮
//! │Postage stamps from all    ││Vintage and modern         │
//! │over the world             ││postcards                  │
//! │#stamps #collection #phil… ││#postcards #collection     │
//! ╰─────────────────────────› ╯╰─────────────────────────› ╯
//! ```
//!
//! Column count is only known at render time, so the render pass writes it
//! back into `CardGridState` for the next key press to use.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::view::{GridCell, hashtags};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const CARD_WIDTH: u16 = 30;
pub const CARD_HEIGHT: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    /// Index into the visible (filtered) children.
    Select(usize),
}

/// Persistent selection state for the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardGridState {
    pub selected: usize,
    /// Cards per row, as of the last render.
    pub columns: usize,
    /// Number of cards, as of the last render.
    pub len: usize,
    row_offset: usize,
}

impl Default for CardGridState {
    fn default() -> Self {
        Self::new()
    }
}

impl CardGridState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            columns: 1,
            len: 0,
            row_offset: 0,
        }
    }

    /// Back to the first card, e.g. after the location or query changed.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.row_offset = 0;
    }

    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    fn move_left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn move_right(&mut self) {
        if self.selected + 1 < self.len {
            self.selected += 1;
        }
    }

    fn move_up(&mut self) {
        if self.selected >= self.columns {
            self.selected -= self.columns;
        }
    }

    /// Moves one row down; from a short last row's column, lands on the last card.
    fn move_down(&mut self) {
        if self.len == 0 {
            return;
        }
        let row = self.selected / self.columns;
        let last_row = (self.len - 1) / self.columns;
        if row < last_row {
            self.selected = (self.selected + self.columns).min(self.len - 1);
        }
    }

    fn scroll_to_selected(&mut self, visible_rows: usize) {
        let row = self.selected / self.columns;
        if row < self.row_offset {
            self.row_offset = row;
        } else if row >= self.row_offset + visible_rows {
            self.row_offset = row + 1 - visible_rows;
        }
    }
}

impl EventHandler for CardGridState {
    type Event = GridEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorLeft => self.move_left(),
            TuiEvent::CursorRight => self.move_right(),
            TuiEvent::CursorUp => self.move_up(),
            TuiEvent::CursorDown => self.move_down(),
            TuiEvent::Submit if self.len > 0 => return Some(GridEvent::Select(self.selected)),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper around the grid state.
pub struct CardGrid<'a> {
    state: &'a mut CardGridState,
    cells: &'a [GridCell],
    empty_message: &'a str,
}

impl<'a> CardGrid<'a> {
    pub fn new(state: &'a mut CardGridState, cells: &'a [GridCell], empty_message: &'a str) -> Self {
        Self {
            state,
            cells,
            empty_message,
        }
    }
}

impl Component for CardGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.set_len(self.cells.len());
        if self.cells.is_empty() {
            let empty = Paragraph::new(self.empty_message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let columns = usize::from((area.width / CARD_WIDTH).max(1));
        let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
        self.state.columns = columns;
        self.state.scroll_to_selected(visible_rows);

        let card_width = area.width / columns as u16;
        let first = self.state.row_offset * columns;
        let last = (first + visible_rows * columns).min(self.cells.len());

        for (offset, cell) in self.cells[first..last].iter().enumerate() {
            let row = (offset / columns) as u16;
            let col = (offset % columns) as u16;
            let rect = Rect {
                x: area.x + col * card_width,
                y: area.y + row * CARD_HEIGHT,
                width: card_width,
                height: CARD_HEIGHT.min(area.height.saturating_sub(row * CARD_HEIGHT)),
            };
            render_card(frame, rect, cell, first + offset == self.state.selected);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, cell: &GridCell, selected: bool) {
    let inner_width = usize::from(area.width.saturating_sub(2));
    let accent = cell
        .color
        .as_deref()
        .and_then(|c| c.parse::<Color>().ok())
        .unwrap_or(Color::DarkGray);
    let border_style = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(accent)
    };

    let counter = cell.counter.map(|n| format!(" {n} ")).unwrap_or_default();
    let title_room = inner_width.saturating_sub(counter.width() + 1);
    let title = fit(&format!(" {} {} ", cell.icon, cell.title), title_room);
    let marker = if cell.is_item { " open " } else { " › " };

    let mut lines: Vec<Line> = textwrap::wrap(&cell.description, inner_width.max(1))
        .into_iter()
        .take(2)
        .map(|l| Line::from(l.into_owned()))
        .collect();
    while lines.len() < 2 {
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        fit(&hashtags(&cell.tags), inner_width),
        Style::default().fg(Color::Magenta),
    )));

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Line::from(title))
        .title(Line::from(counter).right_aligned())
        .title_bottom(Line::from(marker).right_aligned());

    let mut paragraph = Paragraph::new(lines).block(block);
    if selected {
        paragraph = paragraph.style(Style::default().bg(Color::Black));
    }
    frame.render_widget(paragraph, area);
}

/// Cuts `text` to at most `max_width` terminal columns, marking the cut with "…".
fn fit(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn grid(len: usize, columns: usize) -> CardGridState {
        CardGridState {
            selected: 0,
            columns,
            len,
            row_offset: 0,
        }
    }

    fn cell(id: &str) -> GridCell {
        GridCell {
            id: id.to_string(),
            title: format!("Card {id}"),
            description: "A description".to_string(),
            icon: "📁".to_string(),
            color: Some("#3498db".to_string()),
            counter: Some(3),
            tags: vec!["tag".to_string()],
            is_item: false,
        }
    }

    #[test]
    fn test_arrow_keys_move_in_two_dimensions() {
        let mut state = grid(7, 3);
        state.handle_event(&TuiEvent::CursorRight);
        assert_eq!(state.selected, 1);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 4);
        // Row 2 only has card 6; down from column 1 lands on it
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 6);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 6);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 3);
        state.handle_event(&TuiEvent::CursorLeft);
        state.handle_event(&TuiEvent::CursorLeft);
        state.handle_event(&TuiEvent::CursorLeft);
        state.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_submit_selects_current_card() {
        let mut state = grid(3, 3);
        state.handle_event(&TuiEvent::CursorRight);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(GridEvent::Select(1))
        );
    }

    #[test]
    fn test_submit_on_empty_grid_does_nothing() {
        let mut state = grid(0, 3);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_set_len_clamps_selection() {
        let mut state = grid(10, 3);
        state.selected = 9;
        state.set_len(4);
        assert_eq!(state.selected, 3);
        state.set_len(0);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_scroll_follows_selection() {
        let mut state = grid(30, 3);
        state.selected = 20; // row 6
        state.scroll_to_selected(2);
        assert_eq!(state.row_offset, 5);
        state.selected = 1;
        state.scroll_to_selected(2);
        assert_eq!(state.row_offset, 0);
    }

    #[test]
    fn test_fit_respects_display_width() {
        assert_eq!(fit("short", 10), "short");
        assert_eq!(fit("abcdefgh", 5), "abcd…");
        assert_eq!(fit("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn test_render_records_columns() {
        let backend = TestBackend::new(95, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let cells: Vec<GridCell> = (0..5).map(|i| cell(&i.to_string())).collect();
        let mut state = CardGridState::new();
        terminal
            .draw(|f| {
                let area = f.area();
                CardGrid::new(&mut state, &cells, "Nothing here").render(f, area);
            })
            .unwrap();
        assert_eq!(state.columns, 3);
        assert_eq!(state.len, 5);
    }

    #[test]
    fn test_render_empty_grid() {
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = CardGridState::new();
        terminal
            .draw(|f| {
                let area = f.area();
                CardGrid::new(&mut state, &[], "Nothing found").render(f, area);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let first_row: String = (0..40u16).map(|x| buffer[(x, 0u16)].symbol()).collect();
        assert!(first_row.contains("Nothing found"));
    }
}
