//! Best-effort clipboard integration for the presentation shell.
//!
//! A failed write (headless session, denied permission, missing provider)
//! is logged for developers and otherwise ignored; it never affects the
//! already-rendered response.

use arboard::Clipboard;
use tracing::warn;

/// Places `text` on the system clipboard exactly as given, with no trimming
/// or reformatting. Returns whether the write succeeded.
pub fn copy_text(text: &str) -> bool {
    let mut clipboard = match Clipboard::new() {
        Ok(clipboard) => clipboard,
        Err(err) => {
            warn!("Clipboard unavailable: {err}");
            return false;
        }
    };
    match clipboard.set_text(text) {
        Ok(()) => true,
        Err(err) => {
            warn!("Failed to copy response to clipboard: {err}");
            false
        }
    }
}
