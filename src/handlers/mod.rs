//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - actions: Triggers that issue one fetch each
//! - api: Responses from the background service, written into containers
//! - keyboard: User keyboard input
//!
//! Handlers take the model explicitly; the UI loop owns it and is the only
//! caller, so containers are mutated from one thread.

pub mod actions;
pub mod api;
pub mod keyboard;

// Re-export for convenience
pub use actions::{trigger_fact, trigger_lookup, trigger_messages};
pub use api::handle_api_response;
pub use keyboard::handle_key;
