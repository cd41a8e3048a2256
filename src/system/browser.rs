//! Opening URLs in the host browser.

use crate::errors::{LinkdeckError, Result};

/// Open `url` in a new browsing context via the platform handler.
pub fn open_url(url: &str) -> Result<()> {
    open::that(url)
        .map_err(|e| LinkdeckError::browser(format!("failed to open '{}': {}", url, e)))
}
