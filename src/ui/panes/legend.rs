//! Colour legend shown above the array

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const ENTRIES: [(&str, Color); 4] = [
    ("Red: being considered", DEFAULT_THEME.focus_primary),
    ("Green: being considered", DEFAULT_THEME.focus_secondary),
    ("Blue: unsorted", DEFAULT_THEME.unsorted),
    ("Yellow: sorted", DEFAULT_THEME.settled),
];

pub fn render_legend(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (label, color) in ENTRIES {
        spans.push(Span::styled("■ ", Style::default().fg(color)));
        spans.push(Span::styled(
            format!("{}   ", label),
            Style::default().fg(DEFAULT_THEME.fg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
