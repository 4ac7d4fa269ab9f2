//! Fact Feed UI
//!
//! Renders the newest-first list of cat facts.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::logic::formatting::normalize_fact;
use crate::model::{FactFeed, FactNode};

fn node_lines(node: &FactNode) -> Vec<Line<'_>> {
    let text_style = if node.missing {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
    } else if node.is_fresh() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    vec![
        Line::from(vec![
            Span::styled(
                node.fetched_at.format("%H:%M:%S").to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(" "),
            Span::styled(normalize_fact(&node.text), text_style),
        ]),
        Line::raw(""),
    ]
}

/// Render the fact feed, starting at the feed's scroll offset
pub fn render_fact_feed(f: &mut Frame, area: Rect, feed: &FactFeed, focused: bool) {
    let title = if feed.is_empty() {
        " Cat Facts ".to_string()
    } else {
        format!(" Cat Facts ({}) ", feed.len())
    };

    let border_color = if focused { Color::Cyan } else { Color::Gray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));

    let lines: Vec<Line> = if feed.is_empty() {
        vec![Line::styled(
            "Press f to fetch a cat fact.",
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        feed.nodes().skip(feed.scroll).flat_map(node_lines).collect()
    };

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
