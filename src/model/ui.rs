//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, focus, toast and request bookkeeping.

use std::time::Instant;

use crate::config::GenderFormat;
use crate::logic::errors::ErrorType;

/// Which widget receives keystrokes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    /// Single-key actions (fetch, reload, quit)
    Feed,
    /// Typing into the name field
    NameInput,
}

/// UI preferences and transient state
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Phrasing of the lookup result
    pub gender_format: GenderFormat,

    /// Clear the name field after a successful lookup
    pub clear_input_on_success: bool,

    // ============================================
    // TRANSIENT STATE
    // ============================================
    pub focus: Focus,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Requests issued but not yet answered
    pub in_flight: usize,

    /// Most recent failure, for the status bar
    pub last_error: Option<ErrorType>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(gender_format: GenderFormat, clear_input_on_success: bool) -> Self {
        Self {
            gender_format,
            clear_input_on_success,
            focus: Focus::Feed,
            toast_message: None,
            in_flight: 0,
            last_error: None,
            should_quit: false,
        }
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }

    pub fn request_started(&mut self) {
        self.in_flight += 1;
    }

    pub fn request_finished(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new(GenderFormat::default(), true)
    }
}
