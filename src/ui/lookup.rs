//! Name Lookup UI
//!
//! Renders the name input box (with cursor) and the single result node.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::{LookupModel, LookupNodeKind};

/// Render the name input box
///
/// # Arguments
/// - `f`: Ratatui frame
/// - `area`: Rectangular area to render in
/// - `input`: Current field value
/// - `active`: Whether the field is receiving keystrokes
pub fn render_name_input(f: &mut Frame, area: Rect, input: &str, active: bool) {
    let title = if active {
        " Name - Enter to look up, Esc to leave "
    } else {
        " Name (n) "
    };
    let border_color = if active { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));

    let line = if active || !input.is_empty() {
        Line::from(Span::raw(input))
    } else {
        Line::from(Span::styled("type a first name", Style::default().fg(Color::DarkGray)))
    };

    f.render_widget(Paragraph::new(line).block(block), area);

    if active {
        // Place the terminal cursor after the last typed cell, clamped to the box
        let inner_width = area.width.saturating_sub(2);
        let offset = (input.width() as u16).min(inner_width.saturating_sub(1));
        f.set_cursor_position((area.x + 1 + offset, area.y + 1));
    }
}

/// Render the lookup result container
pub fn render_lookup_result(f: &mut Frame, area: Rect, lookup: &LookupModel) {
    let block = Block::default().borders(Borders::ALL).title(" Gender ");

    let line = match &lookup.result {
        None => Line::styled("No lookup yet.", Style::default().fg(Color::DarkGray)),
        Some(node) => {
            let style = match node.kind {
                LookupNodeKind::Answer => Style::default().add_modifier(Modifier::BOLD),
                LookupNodeKind::Guidance => Style::default().fg(Color::Yellow),
                LookupNodeKind::Error => Style::default().fg(Color::Red),
            };
            Line::styled(node.text.as_str(), style)
        }
    };

    let paragraph = Paragraph::new(line).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
