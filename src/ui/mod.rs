// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (feed, lookup, board, legend, status)
// - render: Main orchestration function that coordinates all rendering
// - fact_feed: Renders the newest-first fact list
// - lookup: Renders the name input box and the lookup result
// - messages: Renders the message board
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar (pending requests, last error)
// - toast: Renders toast notifications (brief pop-up messages)

pub mod fact_feed;
pub mod layout;
pub mod legend;
pub mod lookup;
pub mod messages;
pub mod render;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
