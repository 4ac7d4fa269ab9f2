//! fetchdeck
//!
//! A terminal board of small fetch-and-render actions: a random cat fact
//! feed, a first-name gender lookup and a local message list. Each action
//! issues one GET, decodes the JSON into a typed payload and writes it into
//! its display container.
//!
//! Modules are public so the integration tests can drive the actions
//! without a terminal.

pub mod api;
pub mod config;
pub mod handlers;
pub mod logic;
pub mod model;
pub mod services;
pub mod ui;
pub mod utils;
