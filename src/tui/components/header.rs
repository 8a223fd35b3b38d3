//! # Header Component
//!
//! Title block for the current location: title and count on the first line,
//! description on the second, hashtags on the third.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::core::view::{CategoryHeader, hashtags};
use crate::tui::component::Component;

pub struct Header {
    pub header: CategoryHeader,
}

impl Header {
    pub fn new(header: CategoryHeader) -> Self {
        Self { header }
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_line = Line::from(vec![
            Span::styled(
                self.header.title.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", self.header.count_label),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        let lines = vec![
            title_line,
            Line::from(Span::styled(
                self.header.description.clone(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                hashtags(&self.header.tags),
                Style::default().fg(Color::Magenta),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
