//! Wire types for the shortener API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A short link as the server reports it. Created and read by this client,
/// never edited or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: u64,
    pub url: String,
    pub slug: String,
    #[serde(default)]
    pub shortened_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Link {
    /// The shareable short URL: the server-provided one when present,
    /// otherwise built from the public redirect base.
    pub fn short_url(&self, public_base_url: &str) -> String {
        match &self.shortened_url {
            Some(url) => url.clone(),
            None => format!("{}/r/{}", public_base_url.trim_end_matches('/'), self.slug),
        }
    }
}

/// One page of links plus the metadata locating it within the collection.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkPage {
    pub data: Vec<Link>,
    pub current_page: u64,
    pub last_page: u64,
    pub per_page: u64,
    pub total: u64,
}

/// Result of a slug availability probe.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SlugStatus {
    pub available: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Resolved redirect target for a slug.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolvedTarget {
    pub url: String,
}

/// Body for `POST /links`. `slug: None` serializes as `null`, which asks the
/// server to generate one.
#[derive(Debug, Serialize)]
pub struct CreateLinkRequest<'a> {
    pub url: &'a str,
    pub slug: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_short_url_prefers_server_value() {
        let link: Link = serde_json::from_value(serde_json::json!({
            "id": 1,
            "url": "https://example.com/long",
            "slug": "abcd",
            "shortened_url": "https://sho.rt/abcd",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z",
        }))
        .unwrap();

        assert_eq!(link.short_url("http://localhost:8000"), "https://sho.rt/abcd");
    }

    #[test]
    fn test_link_short_url_falls_back_to_public_base() {
        let link: Link = serde_json::from_value(serde_json::json!({
            "id": 2,
            "url": "https://example.com/long",
            "slug": "wxyz",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z",
        }))
        .unwrap();

        assert_eq!(
            link.short_url("http://localhost:8000/"),
            "http://localhost:8000/r/wxyz"
        );
    }

    #[test]
    fn test_create_request_serializes_missing_slug_as_null() {
        let body = CreateLinkRequest {
            url: "https://example.com",
            slug: None,
        };
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["slug"], serde_json::Value::Null);
    }

    #[test]
    fn test_page_deserializes_laravel_shape() {
        let page: LinkPage = serde_json::from_value(serde_json::json!({
            "data": [],
            "current_page": 2,
            "last_page": 7,
            "per_page": 10,
            "total": 65,
        }))
        .unwrap();

        assert_eq!(page.current_page, 2);
        assert_eq!(page.last_page, 7);
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_slug_status_without_error_field() {
        let status: SlugStatus = serde_json::from_str(r#"{"available": true}"#).unwrap();
        assert!(status.available);
        assert!(status.error.is_none());
    }
}
