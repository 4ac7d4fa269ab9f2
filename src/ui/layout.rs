use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Left pane: the accumulating fact feed
    pub feed_area: Rect,
    /// Name input box
    pub input_area: Rect,
    /// Lookup result container
    pub result_area: Rect,
    /// Message board
    pub board_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, legend_height: u16) -> LayoutInfo {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),                // Content area
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
            Constraint::Length(1),             // Status bar
        ])
        .split(terminal_size);

    // Feed gets the larger share; lookup and messages stack on the right
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_chunks[0]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input box (border, text, border)
            Constraint::Length(5), // Result (up to 3 wrapped lines)
            Constraint::Min(3),    // Messages
        ])
        .split(content_chunks[1]);

    LayoutInfo {
        feed_area: content_chunks[0],
        input_area: side_chunks[0],
        result_area: side_chunks[1],
        board_area: side_chunks[2],
        legend_area: main_chunks[1],
        status_area: main_chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_terminal() {
        let size = Rect::new(0, 0, 100, 30);
        let info = calculate_layout(size, 3);

        assert_eq!(info.status_area.height, 1);
        assert_eq!(info.status_area.y, 29);
        assert_eq!(info.legend_area.height, 3);
        assert_eq!(info.feed_area.width + info.input_area.width, 100);
        assert_eq!(info.input_area.height, 3);
        assert_eq!(info.result_area.height, 5);
        assert_eq!(info.feed_area.height, 26);
    }
}
