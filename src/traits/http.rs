//! HTTP seam under the posts client.
//!
//! Fetching a page of posts is one GET, so that is the whole trait. The
//! reqwest adapter serves the app; tests swap in
//! [`crate::adapters::mock::MockHttpClient`].

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use thiserror::Error;

/// Request or response header map.
pub type Headers = HashMap<String, String>;

/// What came back from the posts endpoint, whatever the status.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: Headers,
    /// Raw body; a posts payload on success, an error text otherwise
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: Bytes) -> Self {
        Self::with_headers(status, Headers::new(), body)
    }

    pub fn with_headers(status: u16, headers: Headers, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// 2xx. Anything else becomes `FetchError::Status` in the posts client.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as UTF-8, used for the message of a rejected request.
    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.to_vec())
    }

    /// Decode the body, e.g. into a `PostsResponse`.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// The request never produced a response. Error statuses are not errors
/// here; they arrive as a [`Response`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Request timeout: {0}")]
    Timeout(String),
    /// The body could not be read to the end
    #[error("IO error: {0}")]
    Io(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("HTTP error: {0}")]
    Other(String),
}

/// GET-only HTTP client.
///
/// ```ignore
/// use postpager::traits::{Headers, HttpClient};
///
/// let response = http.get("https://dummyjson.com/posts?limit=5&skip=0", &Headers::new()).await?;
/// let body: PostsResponse = response.json()?;
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;
}
