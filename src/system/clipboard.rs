//! Clipboard access.

use crate::errors::{LinkdeckError, Result};

/// Write `text` to the system clipboard.
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LinkdeckError::clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| LinkdeckError::clipboard(e.to_string()))
}
