//! UI timing logic
//!
//! Pure functions deciding how long transient visual states last.

/// Toast notifications disappear after this many milliseconds
pub const TOAST_DURATION_MS: u128 = 1500;

/// A freshly prepended fact stays highlighted for this long
pub const FACT_HIGHLIGHT_MS: u128 = 1200;

/// Check whether a toast that has been visible for `elapsed_ms` should go away
///
/// # Examples
/// ```
/// use fetchdeck::logic::ui::should_dismiss_toast;
///
/// assert!(!should_dismiss_toast(100));
/// assert!(should_dismiss_toast(1500));
/// ```
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Check whether a fact node fetched `elapsed_ms` ago is still "new"
pub fn should_highlight_fact(elapsed_ms: u128) -> bool {
    elapsed_ms < FACT_HIGHLIGHT_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_boundary() {
        assert!(!should_dismiss_toast(TOAST_DURATION_MS - 1));
        assert!(should_dismiss_toast(TOAST_DURATION_MS));
    }

    #[test]
    fn test_fact_highlight_boundary() {
        assert!(should_highlight_fact(0));
        assert!(!should_highlight_fact(FACT_HIGHLIGHT_MS));
    }
}
