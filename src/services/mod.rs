//! External Services
//!
//! This module contains services that interact with external systems:
//! - api: background worker issuing one task per fetch

pub mod api;

// Re-export commonly used types for convenience
pub use api::{ApiRequest, ApiResponse};
