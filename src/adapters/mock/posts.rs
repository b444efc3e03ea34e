//! In-memory post collection for tests.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

use crate::error::FetchError;
use crate::models::{Page, Post};
use crate::route::skip_for;
use crate::traits::{HttpError, PostSource};

/// A [`PostSource`] over a fixed vector of posts.
///
/// Records every `(limit, page)` it is asked for and can be told to fail
/// specific pages, which is how loader and app tests exercise error paths
/// without a network.
#[derive(Debug)]
pub struct InMemoryPostSource {
    posts: Vec<Post>,
    reported_total: Option<u32>,
    failing_pages: Mutex<HashSet<u32>>,
    calls: Mutex<Vec<(u32, u32)>>,
}

impl InMemoryPostSource {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            reported_total: None,
            failing_pages: Mutex::new(HashSet::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `count` posts with ids `1..=count`.
    pub fn with_count(count: u32) -> Self {
        let posts = (1..=count as u64)
            .map(|id| Post::new(id, format!("Post {}", id), format!("Body of post {}", id)))
            .collect();
        Self::new(posts)
    }

    /// Report `total` instead of the real collection size.
    pub fn with_reported_total(mut self, total: u32) -> Self {
        self.reported_total = Some(total);
        self
    }

    /// Make every fetch of `page` fail with a connection error.
    pub fn fail_page(&self, page: u32) {
        self.failing_pages.lock().unwrap().insert(page);
    }

    /// Let `page` succeed again.
    pub fn heal_page(&self, page: u32) {
        self.failing_pages.lock().unwrap().remove(&page);
    }

    /// Every `(limit, page)` requested so far, in order.
    pub fn calls(&self) -> Vec<(u32, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PostSource for InMemoryPostSource {
    async fn fetch_page(&self, limit: u32, page: u32) -> Result<Page, FetchError> {
        self.calls.lock().unwrap().push((limit, page));

        if self.failing_pages.lock().unwrap().contains(&page) {
            return Err(FetchError::Transport(HttpError::ConnectionFailed(
                "simulated outage".to_string(),
            )));
        }

        let skip = skip_for(limit, page);
        let items: Vec<Post> = self
            .posts
            .iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        let total = self.reported_total.unwrap_or(self.posts.len() as u32);

        Ok(Page::new(items, total, limit, skip))
    }
}
