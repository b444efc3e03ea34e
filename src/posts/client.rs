//! Client for the remote posts collection.
//!
//! `GET {base}/posts?limit={L}&skip={S}` → `{ posts, total, limit, skip }`.
//! There is no retry and no response cache: every call hits the server so
//! a page always reflects current server state.

use async_trait::async_trait;

use crate::adapters::ReqwestHttpClient;
use crate::error::FetchError;
use crate::models::{Page, PostsResponse};
use crate::route::skip_for;
use crate::traits::{Headers, HttpClient, PostSource};

/// Public demo API the application points at by default.
pub const DEFAULT_API_URL: &str = "https://dummyjson.com";

/// Paginated posts client over any [`HttpClient`].
#[derive(Debug, Clone)]
pub struct PostsClient<C = ReqwestHttpClient> {
    base_url: String,
    http: C,
}

impl PostsClient<ReqwestHttpClient> {
    /// Client for [`DEFAULT_API_URL`] using reqwest.
    pub fn new() -> Self {
        Self::with_http(DEFAULT_API_URL, ReqwestHttpClient::new())
    }
}

impl Default for PostsClient<ReqwestHttpClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: HttpClient> PostsClient<C> {
    pub fn with_http(base_url: impl Into<String>, http: C) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of one page of posts.
    pub fn posts_url(&self, limit: u32, skip: u32) -> String {
        format!("{}/posts?limit={}&skip={}", self.base_url, limit, skip)
    }

    fn no_cache_headers() -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("Cache-Control".to_string(), "no-store".to_string());
        headers.insert("Pragma".to_string(), "no-cache".to_string());
        headers
    }
}

#[async_trait]
impl<C: HttpClient> PostSource for PostsClient<C> {
    async fn fetch_page(&self, limit: u32, page: u32) -> Result<Page, FetchError> {
        if limit == 0 {
            return Err(FetchError::InvalidRequest("limit must be positive".to_string()));
        }
        if page == 0 {
            return Err(FetchError::InvalidRequest("pages start at 1".to_string()));
        }

        let skip = skip_for(limit, page);
        let url = self.posts_url(limit, skip);
        tracing::debug!(limit, skip, "Fetching posts");

        let response = self
            .http
            .get(&url, &Self::no_cache_headers())
            .await
            .map_err(|e| {
                tracing::warn!("Posts request to {} failed: {}", url, e);
                FetchError::from(e)
            })?;

        if !response.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status = response.status, "Posts request rejected");
            return Err(FetchError::Status {
                status: response.status,
                message,
            });
        }

        let body: PostsResponse = response.json()?;
        let mut page = Page::from(body);
        // Some backends echo back limit 0 or omit it; keep the requested size.
        if page.limit == 0 {
            page.limit = limit;
        }
        Ok(page)
    }
}
