//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Fetch error kinds and classification
//! - formatting: Display text derived from decoded payloads
//! - input: Pre-flight guard on the name field
//! - ui: Toast and highlight timing

pub mod errors;
pub mod formatting;
pub mod input;
pub mod ui;
