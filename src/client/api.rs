//! HTTP implementation of [`LinkApi`] over reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{self, HeaderValue};
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::errors::{LinkdeckError, Result};

use super::{ApiError, CreateLinkRequest, Link, LinkApi, LinkPage, ResolvedTarget, SlugStatus};

/// Concrete API client.
///
/// Holds one connection-pooling `reqwest::Client`; cloning is cheap and all
/// methods take `&self`, so a single instance serves every spawned request.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    public_base_url: String,
}

/// Error payload shape used by the server for rejections. Some endpoints use
/// `error`, others `message`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("linkdeck/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LinkdeckError::config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Classify a non-success response: 404 is its own class, anything else
    /// carries whatever message the server put in `error`/`message`.
    async fn rejection(resp: Response) -> ApiError {
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return ApiError::NotFound;
        }

        let message = match resp.json::<ErrorBody>().await {
            Ok(body) => body.error.or(body.message),
            Err(_) => None,
        };

        match message {
            Some(message) => ApiError::Server { message },
            None => ApiError::Server {
                message: format!("request failed with status {}", status),
            },
        }
    }
}

#[async_trait]
impl LinkApi for ApiClient {
    async fn list_links(
        &self,
        page: u64,
        per_page: u64,
        search: Option<&str>,
    ) -> std::result::Result<LinkPage, ApiError> {
        let mut request = self
            .http
            .get(format!("{}/links", self.base_url))
            .query(&[("page", page.to_string()), ("per_page", per_page.to_string())]);

        if let Some(term) = search
            && !term.trim().is_empty()
        {
            request = request.query(&[("search", term)]);
        }

        debug!(page, per_page, search = ?search, "listing links");
        let resp = request.send().await?;
        if !resp.status().is_success() {
            let err = Self::rejection(resp).await;
            warn!("list links failed: {}", err);
            return Err(err);
        }

        Ok(resp.json::<LinkPage>().await?)
    }

    async fn create_link(
        &self,
        url: &str,
        slug: Option<&str>,
    ) -> std::result::Result<Link, ApiError> {
        let body = CreateLinkRequest { url, slug };

        debug!(url, slug = ?slug, "creating link");
        let resp = self
            .http
            .post(format!("{}/links", self.base_url))
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let err = Self::rejection(resp).await;
            warn!("create link failed: {}", err);
            return Err(err);
        }

        Ok(resp.json::<Link>().await?)
    }

    async fn check_slug(&self, slug: &str) -> std::result::Result<SlugStatus, ApiError> {
        // Cache-busting timestamp: availability must never come from an
        // intermediary cache.
        let cachebust = chrono::Utc::now().timestamp_millis();

        let resp = self
            .http
            .get(format!("{}/links/check-slug/{}", self.base_url, slug))
            .query(&[("_t", cachebust.to_string())])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::rejection(resp).await);
        }

        Ok(resp.json::<SlugStatus>().await?)
    }

    async fn resolve_redirect(&self, slug: &str) -> std::result::Result<ResolvedTarget, ApiError> {
        debug!(slug, "resolving redirect");
        let resp = self
            .http
            .get(format!("{}/r/{}", self.public_base_url, slug))
            .send()
            .await?;

        if !resp.status().is_success() {
            let err = Self::rejection(resp).await;
            warn!("redirect resolution for '{}' failed: {}", slug, err);
            return Err(err);
        }

        Ok(resp.json::<ResolvedTarget>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slashes() {
        let config = ApiConfig {
            base_url: "http://localhost:8000/api/".to_string(),
            public_base_url: "http://localhost:8000/".to_string(),
            timeout_secs: 10,
        };
        let client = ApiClient::new(&config).unwrap();

        assert_eq!(client.base_url, "http://localhost:8000/api");
        assert_eq!(client.public_base_url, "http://localhost:8000");
    }

    #[test]
    fn test_error_body_accepts_either_field() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "slug taken"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("slug taken"));

        let body: ErrorBody = serde_json::from_str(r#"{"message": "invalid url"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("invalid url"));

        let body: ErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert!(body.error.is_none() && body.message.is_none());
    }
}
