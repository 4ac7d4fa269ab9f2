//! Utility functions used throughout the application

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

pub fn set_debug_mode(enabled: bool) {
    DEBUG_MODE.store(enabled, Ordering::Relaxed);
}

pub fn debug_mode() -> bool {
    DEBUG_MODE.load(Ordering::Relaxed)
}

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("fetchdeck-debug.log");
    path
}

/// Append a line to the debug log (no-op unless `--debug` was given)
///
/// The terminal belongs to the TUI, so diagnostics never go to stdout/stderr.
pub fn log_debug(msg: &str) {
    if !debug_mode() {
        return;
    }

    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(get_debug_log_path())
    {
        let _ = writeln!(
            file,
            "{} {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            msg
        );
    }
}
