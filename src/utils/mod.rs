//! Small display helpers.

use chrono::{DateTime, Utc};

/// Cap a URL at `max_length` characters, appending an ellipsis when cut.
pub fn truncate_url(url: &str, max_length: usize) -> String {
    if url.chars().count() <= max_length {
        return url.to_string();
    }
    let truncated: String = url.chars().take(max_length).collect();
    format!("{}...", truncated)
}

/// Humanize a creation timestamp relative to now.
///
/// Anything older than a week falls back to the plain date; timestamps from
/// the future (server clock ahead of ours) read as "just now".
pub fn relative_time(when: DateTime<Utc>) -> String {
    let delta = Utc::now().signed_duration_since(when);

    if delta.num_seconds() < 60 {
        "just now".to_string()
    } else if delta.num_minutes() < 60 {
        format!("{}m ago", delta.num_minutes())
    } else if delta.num_hours() < 24 {
        format!("{}h ago", delta.num_hours())
    } else if delta.num_days() < 7 {
        format!("{}d ago", delta.num_days())
    } else {
        when.format("%Y-%m-%d").to_string()
    }
}
