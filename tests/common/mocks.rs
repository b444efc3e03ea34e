//! Mock implementations for test fixtures.
//!
//! Re-exports the mocks from `postpager::adapters::mock` and adds a builder
//! for canned posts responses.

#![allow(dead_code)]

pub use postpager::adapters::mock::{InMemoryPostSource, MockHttpClient, MockResponse};
pub use postpager::traits::{Headers, HttpClient, HttpError, Response};

use bytes::Bytes;

use postpager::posts::PostsClient;

/// Base URL the mock client answers for.
pub const MOCK_BASE: &str = "https://posts.test";

/// Configuration for setting up mock HTTP responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Answer `limit`/`skip` with the given JSON body.
    pub fn with_page(self, limit: u32, skip: u32, status: u16, json: &str) -> Self {
        self.client.set_response(
            &page_url(limit, skip),
            MockResponse::Success(Response::new(status, Bytes::from(json.to_string()))),
        );
        self
    }

    /// Fail `limit`/`skip` at the transport level.
    pub fn with_transport_error(self, limit: u32, skip: u32, error: HttpError) -> Self {
        self.client
            .set_response(&page_url(limit, skip), MockResponse::Error(error));
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }

    /// Posts client over the configured mock plus a handle for assertions.
    pub fn into_posts_client(self) -> (PostsClient<MockHttpClient>, MockHttpClient) {
        let http = self.client;
        (PostsClient::with_http(MOCK_BASE, http.clone()), http)
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub fn page_url(limit: u32, skip: u32) -> String {
    format!("{}/posts?limit={}&skip={}", MOCK_BASE, limit, skip)
}
