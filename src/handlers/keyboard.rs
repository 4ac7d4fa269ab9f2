//! Keyboard Input Handler
//!
//! Maps key presses to actions. Two modes: single-key commands while the
//! feed has focus, plain text entry while the name field has focus.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;

use super::actions::{trigger_fact, trigger_lookup, trigger_messages};
use crate::model::{Focus, Model};
use crate::services::api::ApiRequest;

/// Handle keyboard input
pub fn handle_key(model: &mut Model, key: KeyEvent, requests: &UnboundedSender<ApiRequest>) {
    // Release/repeat events arrive on some platforms; act on presses only
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        model.ui.should_quit = true;
        return;
    }

    match model.ui.focus {
        Focus::Feed => handle_feed_key(model, key, requests),
        Focus::NameInput => handle_input_key(model, key, requests),
    }
}

fn handle_feed_key(model: &mut Model, key: KeyEvent, requests: &UnboundedSender<ApiRequest>) {
    match key.code {
        KeyCode::Char('q') => model.ui.should_quit = true,
        KeyCode::Char('f') => {
            trigger_fact(model, requests);
        }
        KeyCode::Char('m') => {
            trigger_messages(model, requests);
        }
        KeyCode::Char('n') | KeyCode::Tab => model.ui.focus = Focus::NameInput,
        KeyCode::Char('x') => {
            model.feed.clear();
            model.show_toast("Feed cleared".to_string());
        }
        KeyCode::Down | KeyCode::Char('j') => model.feed.scroll_down(),
        KeyCode::Up | KeyCode::Char('k') => model.feed.scroll_up(),
        _ => {}
    }
}

fn handle_input_key(model: &mut Model, key: KeyEvent, requests: &UnboundedSender<ApiRequest>) {
    match key.code {
        KeyCode::Enter => {
            trigger_lookup(model, requests);
        }
        KeyCode::Esc | KeyCode::Tab => model.ui.focus = Focus::Feed,
        KeyCode::Backspace => model.lookup.pop_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            model.lookup.push_char(c)
        }
        _ => {}
    }
}
