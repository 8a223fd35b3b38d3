//! # Detail Modal Component
//!
//! Centered overlay for a selected item: title, tags, description and the
//! metadata table. Dismissed with Esc, Enter or Backspace.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::view::{DetailView, hashtags};
use crate::tui::component::Component;

pub struct DetailModal<'a> {
    view: &'a DetailView,
}

impl<'a> DetailModal<'a> {
    pub fn new(view: &'a DetailView) -> Self {
        Self { view }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let view = self.view;
        let mut lines = vec![
            Line::from(Span::styled(
                view.title.as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                hashtags(&view.tags),
                Style::default().fg(Color::Magenta),
            )),
            Line::default(),
            Line::from(view.description.as_str()),
        ];
        if let Some(thumbnail) = &view.thumbnail {
            lines.push(Line::from(Span::styled(
                format!("Image: {thumbnail}"),
                Style::default().fg(Color::DarkGray),
            )));
        }
        if !view.metadata.is_empty() {
            lines.push(Line::default());
            let label_width = view
                .metadata
                .iter()
                .map(|row| row.label.chars().count())
                .max()
                .unwrap_or(0);
            for row in &view.metadata {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:<label_width$}  ", row.label),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(row.value.as_str()),
                ]));
            }
        }
        lines
    }
}

impl Component for DetailModal<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 70, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Details ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Esc Close ").centered())
            .padding(Padding::horizontal(1));

        let paragraph = Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::MetadataRow;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_metadata_labels_are_aligned() {
        let view = DetailView {
            title: "Louvre, 1993".to_string(),
            tags: vec!["paris".to_string()],
            description: "The Louvre museum".to_string(),
            thumbnail: None,
            metadata: vec![
                MetadataRow {
                    label: "Year".to_string(),
                    value: "1993".to_string(),
                },
                MetadataRow {
                    label: "Condition".to_string(),
                    value: "Used".to_string(),
                },
            ],
        };
        let modal = DetailModal::new(&view);
        let lines: Vec<String> = modal.lines().iter().map(text).collect();
        assert_eq!(lines[0], "Louvre, 1993");
        assert_eq!(lines[1], "#paris");
        assert!(lines.contains(&"Year       1993".to_string()));
        assert!(lines.contains(&"Condition  Used".to_string()));
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(70, 70, outer);
        assert_eq!(inner.width, 70);
        assert!(inner.x > 0 && inner.y > 0);
    }
}
