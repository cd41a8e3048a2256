use std::fmt;

#[derive(Debug, Clone)]
pub enum LinkdeckError {
    Config(String),
    FileOperation(String),
    Serialization(String),
    Browser(String),
    Clipboard(String),
}

impl LinkdeckError {
    pub fn code(&self) -> &'static str {
        match self {
            LinkdeckError::Config(_) => "E001",
            LinkdeckError::FileOperation(_) => "E002",
            LinkdeckError::Serialization(_) => "E003",
            LinkdeckError::Browser(_) => "E004",
            LinkdeckError::Clipboard(_) => "E005",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            LinkdeckError::Config(_) => "Configuration Error",
            LinkdeckError::FileOperation(_) => "File Operation Error",
            LinkdeckError::Serialization(_) => "Serialization Error",
            LinkdeckError::Browser(_) => "Browser Launch Error",
            LinkdeckError::Clipboard(_) => "Clipboard Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            LinkdeckError::Config(msg) => msg,
            LinkdeckError::FileOperation(msg) => msg,
            LinkdeckError::Serialization(msg) => msg,
            LinkdeckError::Browser(msg) => msg,
            LinkdeckError::Clipboard(msg) => msg,
        }
    }

    /// Compact single-line format, suitable for the TUI status bar.
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LinkdeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinkdeckError {}

// Convenience constructors
impl LinkdeckError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Serialization(msg.into())
    }

    pub fn browser<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Browser(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Clipboard(msg.into())
    }
}

impl From<std::io::Error> for LinkdeckError {
    fn from(err: std::io::Error) -> Self {
        LinkdeckError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for LinkdeckError {
    fn from(err: serde_json::Error) -> Self {
        LinkdeckError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for LinkdeckError {
    fn from(err: toml::ser::Error) -> Self {
        LinkdeckError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkdeckError>;
