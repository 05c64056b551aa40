//! System clipboard access

use crate::errors::{ArchlinksError, Result};

/// Write text to the system clipboard.
///
/// A fresh context per call: clipboard handles are not long-lived on all
/// platforms, and copies are rare one-shot operations here.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| ArchlinksError::clipboard(format!("clipboard unavailable: {}", e)))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| ArchlinksError::clipboard(format!("copy failed: {}", e)))
}
