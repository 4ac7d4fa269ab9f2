use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::Focus;

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(focus: Focus) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    match focus {
        Focus::Feed => {
            hotkey_spans.extend(vec![
                key("f"),
                Span::raw(":Cat Fact  "),
                key("n/Tab"),
                Span::raw(":Name Lookup  "),
                key("m"),
                Span::raw(":Reload Messages  "),
                key("↑/↓"),
                Span::raw(":Scroll  "),
                key("x"),
                Span::raw(":Clear Feed  "),
                key("q"),
                Span::raw(":Quit"),
            ]);
        }
        Focus::NameInput => {
            // Letters are text while typing, so only non-printing keys are listed
            hotkey_spans.extend(vec![
                key("Enter"),
                Span::raw(":Look Up  "),
                key("Esc/Tab"),
                Span::raw(":Back  "),
                key("^C"),
                Span::raw(":Quit"),
            ]);
        }
    }

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(focus: Focus) -> Paragraph<'static> {
    Paragraph::new(vec![Line::from(build_hotkey_spans(focus))])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, focus: Focus) {
    f.render_widget(build_legend_paragraph(focus), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, focus: Focus) -> u16 {
    // line_count() doesn't account for borders when a block is attached
    let paragraph_for_counting = Paragraph::new(vec![Line::from(build_hotkey_spans(focus))])
        .wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to convert spans to plain text for assertions
    fn spans_to_text(spans: &[Span]) -> String {
        spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<Vec<_>>()
            .join("")
    }

    #[test]
    fn test_feed_legend_lists_actions() {
        let text = spans_to_text(&build_hotkey_spans(Focus::Feed));
        assert!(text.contains("f:Cat Fact"), "got: {}", text);
        assert!(text.contains("m:Reload Messages"), "got: {}", text);
        assert!(text.contains("q:Quit"), "got: {}", text);
    }

    #[test]
    fn test_input_legend_hides_letter_commands() {
        let text = spans_to_text(&build_hotkey_spans(Focus::NameInput));
        assert!(text.contains("Enter:Look Up"), "got: {}", text);
        // 'q' would be typed into the field, so it must not be advertised
        assert!(!text.contains("q:Quit"), "got: {}", text);
    }

    #[test]
    fn test_legend_height_grows_on_narrow_terminal() {
        let wide = calculate_legend_height(200, Focus::Feed);
        let narrow = calculate_legend_height(30, Focus::Feed);
        assert_eq!(wide, 3);
        assert!(narrow > wide);
    }
}
