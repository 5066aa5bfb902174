//! Algorithm picker

use crate::steps::Algorithm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the algorithm list. `cursor` is the highlighted row, `active` the
/// algorithm currently loaded.
pub fn render_menu_pane(
    frame: &mut Frame,
    area: Rect,
    cursor: usize,
    active: Option<Algorithm>,
) {
    let block = Block::default()
        .title(" Algorithms ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let items: Vec<ListItem> = Algorithm::ALL
        .iter()
        .enumerate()
        .map(|(i, &algorithm)| {
            let key = if i == 9 { 0 } else { i + 1 };
            let marker = if i == cursor { "›" } else { " " };
            let text = format!("{}{} {}", marker, key, algorithm.name());

            let style = if active == Some(algorithm) {
                // like the green button of the running algorithm
                Style::default()
                    .bg(DEFAULT_THEME.success)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else if i == cursor {
                Style::default()
                    .fg(DEFAULT_THEME.border_focused)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(text).style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
