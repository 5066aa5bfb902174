//! Array pane: value boxes for short arrays, bars for longer ones

use crate::config::BOX_VIEW_MAX_LEN;
use crate::steps::Highlight;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Colour of element `index` under `highlight`
pub fn element_color(index: usize, highlight: Highlight) -> Color {
    if highlight.is_settled() {
        DEFAULT_THEME.settled
    } else if highlight.primary == Some(index) {
        DEFAULT_THEME.focus_primary
    } else if highlight.secondary == Some(index) {
        DEFAULT_THEME.focus_secondary
    } else {
        DEFAULT_THEME.unsorted
    }
}

/// Render the array pane. `snapshot` is `None` when nothing is loaded.
pub fn render_array_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    snapshot: Option<(&[i64], Highlight)>,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let Some((values, highlight)) = snapshot else {
        let paragraph = Paragraph::new("(nothing loaded: pick an algorithm)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    if values.len() <= BOX_VIEW_MAX_LEN {
        render_boxes(frame, area, block, values, highlight);
    } else {
        render_bars(frame, area, block, values, highlight);
    }
}

fn render_boxes(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    values: &[i64],
    highlight: Highlight,
) {
    let mut spans = Vec::with_capacity(values.len() * 2);
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("  {}  ", value),
            Style::default()
                .bg(element_color(i, highlight))
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    // Vertically centre the single row of boxes
    let inner_height = area.height.saturating_sub(2) as usize;
    let mut lines = vec![Line::raw(""); inner_height / 2];
    lines.push(Line::from(spans));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_bars(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    values: &[i64],
    highlight: Highlight,
) {
    // Bars cannot go below zero, so lift everything by the most negative value
    let floor = values.iter().copied().min().unwrap_or(0).min(0);
    let heights: Vec<u64> = values
        .iter()
        .map(|&v| v.abs_diff(floor).saturating_add(1))
        .collect();

    let bars: Vec<Bar> = values
        .iter()
        .zip(&heights)
        .enumerate()
        .map(|(i, (value, &height))| {
            let color = element_color(i, highlight);
            Bar::default()
                .value(height)
                .text_value(value.to_string())
                .style(Style::default().fg(color))
                .value_style(Style::default().bg(color).fg(Color::Black))
        })
        .collect();

    let count = u16::try_from(values.len()).unwrap_or(u16::MAX);
    let inner_width = area.width.saturating_sub(2);
    let bar_gap = if inner_width >= count.saturating_mul(2) { 1 } else { 0 };
    let gaps = bar_gap * count.saturating_sub(1);
    let bar_width = (inner_width.saturating_sub(gaps) / count.max(1)).max(1);

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(heights.iter().copied().max().unwrap_or(1))
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}
