use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::model::MessageBoard;

/// Render the message board (one row per message, payload order)
pub fn render_message_board(f: &mut Frame, area: Rect, board: &MessageBoard) {
    let title = if board.loaded && board.error.is_none() {
        format!(" Messages ({}) ", board.messages.len())
    } else {
        " Messages ".to_string()
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    let items: Vec<ListItem> = if let Some(error) = &board.error {
        vec![ListItem::new(Line::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ))]
    } else if !board.loaded {
        vec![ListItem::new(Line::styled(
            "Press m to load messages.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else if board.messages.is_empty() {
        vec![ListItem::new(Line::styled(
            "No messages.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        board
            .messages
            .iter()
            .map(|message| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("#{} ", message.id),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(message.content.as_str()),
                ]))
            })
            .collect()
    };

    f.render_widget(List::new(items).block(block), area);
}
