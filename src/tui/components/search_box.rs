//! # SearchBox Component
//!
//! One-line query editor. Every edit emits the whole new query, so the core
//! can recompute the filtered view; nothing is filtered here.
//!
//! The buffer is internal state. `focused` is a prop from the input mode.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The query changed; carries the full new query.
    Changed(String),
    /// Leave the box and keep the filter (Enter / Down).
    Done,
    /// Query wiped and box left (Esc).
    Cleared,
}

#[derive(Debug, Default)]
pub struct SearchBox {
    pub buffer: String,
    pub focused: bool,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (border, text_style) = if self.focused {
            (Color::Green, Style::default().fg(Color::Green))
        } else {
            (Color::DarkGray, Style::default().fg(Color::Gray))
        };
        let shown = if self.buffer.is_empty() && !self.focused {
            "Type or press / to search".to_string()
        } else {
            self.buffer.clone()
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title("Search");
        frame.render_widget(Paragraph::new(shown).style(text_style).block(block), area);

        if self.focused {
            let max_x = area.x + area.width.saturating_sub(2);
            let cursor_x = (area.x + 1 + self.buffer.width() as u16).min(max_x);
            frame.set_cursor_position((cursor_x, area.y + 1));
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Paste(text) => {
                // Queries are single-line
                self.buffer
                    .extend(text.chars().filter(|c| !c.is_control()));
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => self
                .buffer
                .pop()
                .map(|_| SearchEvent::Changed(self.buffer.clone())),
            TuiEvent::Submit | TuiEvent::CursorDown => Some(SearchEvent::Done),
            TuiEvent::Escape => {
                self.buffer.clear();
                Some(SearchEvent::Cleared)
            }
            _ => None,
        }
    }
}
