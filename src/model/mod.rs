//! Application Model
//!
//! The display containers the actions write into, plus UI state. The model
//! is owned by the UI loop and handed to the actions at call time; nothing
//! looks a container up globally.
//!
//! - **FactFeed**: accumulating fact list (prepend)
//! - **LookupModel**: name input and replace-in-place result
//! - **MessageBoard**: replace-whole-list message container
//! - **UiModel**: focus, toast, preferences, request bookkeeping

pub mod board;
pub mod feed;
pub mod lookup;
pub mod ui;

pub use board::{MessageBoard, MessageNode};
pub use feed::{FactFeed, FactNode};
pub use lookup::{LookupModel, LookupNode, LookupNodeKind};
pub use ui::{Focus, UiModel};

use crate::config::Config;

/// Root application model composed of the display containers
#[derive(Clone, Debug, Default)]
pub struct Model {
    pub feed: FactFeed,
    pub lookup: LookupModel,
    pub board: MessageBoard,
    pub ui: UiModel,

    /// Last sequence number handed out to a trigger
    last_seq: u64,
}

impl Model {
    /// Create initial model with preferences taken from config
    pub fn new(config: &Config) -> Self {
        Self {
            ui: UiModel::new(config.gender_format, config.clear_input_on_success),
            ..Self::default()
        }
    }

    /// Monotonic sequence number for a new trigger
    pub fn next_seq(&mut self) -> u64 {
        self.last_seq += 1;
        self.last_seq
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.ui.dismiss_toast();
    }
}
