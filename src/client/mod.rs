//! Client layer for the shortener API.
//!
//! All substantive shortening logic (slug generation, uniqueness enforcement,
//! persistence, redirect resolution) lives server-side; this layer only moves
//! JSON over HTTP and classifies what came back.
//!
//! The store depends on the [`LinkApi`] trait rather than the concrete
//! [`ApiClient`] so tests can drive it with a stub.

mod api;
mod types;

pub use api::ApiClient;
pub use types::{CreateLinkRequest, Link, LinkPage, ResolvedTarget, SlugStatus};

use std::fmt;

use async_trait::async_trait;

/// Errors from the API client.
///
/// The four classes matter to callers in different ways: `NotFound` gets its
/// own user-facing message, `Server` messages are shown verbatim, and
/// `Transport`/`Decode` both collapse into a generic retry prompt.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// The server answered 404 for the requested resource.
    NotFound,
    /// The server rejected the request and supplied a message.
    Server { message: String },
    /// Connection, TLS or timeout failure before a response arrived.
    Transport(String),
    /// The response body did not match the expected shape.
    Decode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }

    /// The server-supplied rejection message, if there is one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message } => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::Server { message } => write!(f, "server rejected request: {}", message),
            ApiError::Transport(msg) => write!(f, "transport error: {}", msg),
            ApiError::Decode(msg) => write!(f, "malformed response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// The four operations the shortener service exposes to this client.
#[async_trait]
pub trait LinkApi: Send + Sync {
    /// Fetch one page of links, optionally filtered by a search term.
    async fn list_links(
        &self,
        page: u64,
        per_page: u64,
        search: Option<&str>,
    ) -> Result<LinkPage, ApiError>;

    /// Create a new short link; `slug: None` lets the server pick one.
    async fn create_link(&self, url: &str, slug: Option<&str>) -> Result<Link, ApiError>;

    /// Ask whether a candidate slug is free. Callers must not probe slugs
    /// shorter than four characters.
    async fn check_slug(&self, slug: &str) -> Result<SlugStatus, ApiError>;

    /// Look up the original URL behind a slug.
    async fn resolve_redirect(&self, slug: &str) -> Result<ResolvedTarget, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Server {
            message: "slug already taken".into(),
        };
        assert!(err.to_string().contains("slug already taken"));

        let err = ApiError::Transport("connection refused".into());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_is_not_found() {
        assert!(ApiError::NotFound.is_not_found());
        assert!(!ApiError::Transport("x".into()).is_not_found());
    }

    #[test]
    fn test_server_message() {
        let err = ApiError::Server {
            message: "nope".into(),
        };
        assert_eq!(err.server_message(), Some("nope"));
        assert_eq!(ApiError::NotFound.server_message(), None);
    }
}
