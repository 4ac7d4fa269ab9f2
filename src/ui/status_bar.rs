use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::logic::errors::error_type_label;
use crate::model::Model;

/// Build the status line text (extracted for testability)
pub fn build_status_line(model: &Model) -> Line<'static> {
    let mut spans = vec![Span::raw(format!("Facts: {}", model.feed.len()))];

    spans.push(Span::raw(" │ "));
    if model.ui.in_flight > 0 {
        spans.push(Span::styled(
            format!("{} request(s) pending", model.ui.in_flight),
            Style::default().fg(Color::Yellow),
        ));
    } else {
        spans.push(Span::styled("Idle", Style::default().fg(Color::Green)));
    }

    if let Some(error_type) = &model.ui.last_error {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("Last error: {}", error_type_label(error_type)),
            Style::default().fg(Color::Red),
        ));
    }

    Line::from(spans)
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, model: &Model) {
    let paragraph =
        Paragraph::new(build_status_line(model)).style(Style::default().fg(Color::Gray));
    f.render_widget(paragraph, area);
}
