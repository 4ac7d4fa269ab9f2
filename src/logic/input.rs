//! Pre-flight input guard
//!
//! The lookup action refuses to issue a request for a blank name.

use thiserror::Error;

/// Literal shown in the lookup container when the name field is blank
pub const EMPTY_NAME_GUIDANCE: &str = "Please enter a name.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a name.")]
    EmptyName,
}

/// Trim the raw input field value and reject it if nothing is left
///
/// # Examples
/// ```
/// use fetchdeck::logic::input::{validate_name, InputError};
///
/// assert_eq!(validate_name("  alice "), Ok("alice".to_string()));
/// assert_eq!(validate_name("   "), Err(InputError::EmptyName));
/// ```
pub fn validate_name(raw: &str) -> Result<String, InputError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(InputError::EmptyName);
    }
    Ok(name.to_string())
}
