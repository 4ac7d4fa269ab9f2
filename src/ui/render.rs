use ratatui::Frame;

use super::{fact_feed, layout, legend, lookup, messages, status_bar, toast};
use crate::model::{Focus, Model};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, model: &Model) {
    let size = f.area();

    let legend_height = legend::calculate_legend_height(size.width, model.ui.focus);
    let layout_info = layout::calculate_layout(size, legend_height);

    let typing = model.ui.focus == Focus::NameInput;

    fact_feed::render_fact_feed(f, layout_info.feed_area, &model.feed, !typing);
    lookup::render_name_input(f, layout_info.input_area, &model.lookup.input, typing);
    lookup::render_lookup_result(f, layout_info.result_area, &model.lookup);
    messages::render_message_board(f, layout_info.board_area, &model.board);
    legend::render_legend(f, layout_info.legend_area, model.ui.focus);
    status_bar::render_status_bar(f, layout_info.status_area, model);

    // Toast goes last so it sits on top of everything
    if let Some((message, _)) = &model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
