mod structs;

pub use structs::{ApiConfig, LoggingConfig, StaticConfig, UiConfig};

/// Page sizes the list view may request. The server caps `per_page` anyway,
/// but the selector cycles through exactly these.
pub const PAGE_SIZE_OPTIONS: [u64; 4] = [5, 10, 25, 50];
