//! # BreadcrumbBar Component
//!
//! Single top line: `Home › Postage Stamps › Stamps with Cities`, followed by
//! a spinner while a load is pending. The last entry is the current location
//! and is drawn bold.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::path::BreadcrumbEntry;
use crate::tui::component::Component;

const SEPARATOR: &str = " › ";
const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct BreadcrumbBar {
    pub entries: Vec<BreadcrumbEntry>,
    pub is_loading: bool,
    pub spinner_frame: usize,
}

impl BreadcrumbBar {
    pub fn new(entries: Vec<BreadcrumbEntry>, is_loading: bool, spinner_frame: usize) -> Self {
        Self {
            entries,
            is_loading,
            spinner_frame,
        }
    }

    fn line(&self) -> Line<'static> {
        let last = self.entries.len().saturating_sub(1);
        let mut spans = Vec::with_capacity(self.entries.len() * 2 + 2);
        for (index, entry) in self.entries.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));
            }
            let style = if index == last {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            spans.push(Span::styled(entry.title.clone(), style));
        }
        if self.is_loading {
            let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
            spans.push(Span::styled(
                format!("  {spinner} loading"),
                Style::default().fg(Color::Yellow),
            ));
        }
        Line::from(spans)
    }
}

impl Component for BreadcrumbBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, title: &str, level: usize) -> BreadcrumbEntry {
        BreadcrumbEntry {
            id: id.to_string(),
            title: title.to_string(),
            level,
        }
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_entries_joined_with_separator() {
        let bar = BreadcrumbBar::new(
            vec![entry("root", "Home", 0), entry("stamps", "Postage Stamps", 1)],
            false,
            0,
        );
        assert_eq!(text(&bar.line()), "Home › Postage Stamps");
    }

    #[test]
    fn test_spinner_only_while_loading() {
        let bar = BreadcrumbBar::new(vec![entry("root", "Home", 0)], true, 1);
        assert_eq!(text(&bar.line()), "Home  ◓ loading");
    }
}
