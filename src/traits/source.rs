//! Paginated data source abstraction.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::Page;

/// A read-only, paginated collection of posts.
///
/// Implemented by [`crate::posts::PostsClient`] for the real API and by
/// [`crate::adapters::mock::InMemoryPostSource`] for tests.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch 1-based `page` of size `limit`.
    async fn fetch_page(&self, limit: u32, page: u32) -> Result<Page, FetchError>;
}
