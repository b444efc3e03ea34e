//! Accumulating list with single-flight incremental loading.
//!
//! ```text
//!            sentinel visible, !exhausted
//!   Idle ─────────────────────────────────▶ Loading
//!    ▲                                         │
//!    └──────── fetch completed or failed ──────┘
//! ```
//!
//! The loader is Exhausted once the accumulated count reaches the server's
//! total; from then on visibility triggers are ignored.

use crate::error::FetchError;
use crate::models::{Page, Post};
use crate::route::skip_for;
use crate::traits::PostSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    Idle,
    Loading,
}

/// What the footer of the list should say.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderStatus {
    /// A fetch is in flight
    Loading,
    /// Every post has been loaded
    Exhausted,
    /// Scroll further to load more
    MoreAvailable,
}

/// A fetch the loader wants issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u32,
    pub page: u32,
}

impl PageRequest {
    /// `page × limit − limit`, the same offset paged mode uses for `page`.
    pub fn skip(&self) -> u32 {
        skip_for(self.limit, self.page)
    }
}

#[derive(Debug, Clone)]
pub struct InfiniteLoader {
    items: Vec<Post>,
    total: u32,
    limit: u32,
    next_page: u32,
    state: LoaderState,
    /// Set when the server returned an empty page before `total` was reached.
    drained: bool,
}

impl InfiniteLoader {
    /// Start from the first page of the collection, already fetched.
    pub fn new(limit: u32, first_page: Page) -> Self {
        let mut loader = Self {
            items: Vec::new(),
            total: first_page.total,
            limit: limit.max(1),
            next_page: 1,
            state: LoaderState::Idle,
            drained: false,
        };
        loader.append(first_page);
        loader
    }

    pub fn items(&self) -> &[Post] {
        &self.items
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    pub fn state(&self) -> LoaderState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoaderState::Loading
    }

    pub fn is_exhausted(&self) -> bool {
        self.drained || self.items.len() as u32 >= self.total
    }

    pub fn status(&self) -> LoaderStatus {
        if self.is_loading() {
            LoaderStatus::Loading
        } else if self.is_exhausted() {
            LoaderStatus::Exhausted
        } else {
            LoaderStatus::MoreAvailable
        }
    }

    /// The sentinel became visible. Moves to Loading and returns the fetch
    /// to issue, or `None` while a load is in flight or nothing is left.
    pub fn begin_load(&mut self) -> Option<PageRequest> {
        if self.is_loading() || self.is_exhausted() {
            return None;
        }
        self.state = LoaderState::Loading;
        Some(PageRequest {
            limit: self.limit,
            page: self.next_page,
        })
    }

    /// Apply the outcome of the fetch started by [`begin_load`](Self::begin_load)
    /// and return to Idle. Returns how many posts were appended.
    ///
    /// Failures are logged and otherwise dropped; `next_page` stays put so
    /// the user retries the same page by scrolling the sentinel back into
    /// view.
    pub fn finish_load(&mut self, result: Result<Page, FetchError>) -> usize {
        self.state = LoaderState::Idle;
        match result {
            Ok(page) => self.append(page),
            Err(e) => {
                tracing::warn!(
                    page = self.next_page,
                    code = e.error_code(),
                    "Incremental load failed: {}",
                    e
                );
                0
            }
        }
    }

    /// Run one full load cycle against `source`.
    ///
    /// Returns `None` if no load was started.
    pub async fn load_more<S: PostSource + ?Sized>(&mut self, source: &S) -> Option<usize> {
        let request = self.begin_load()?;
        let result = source.fetch_page(request.limit, request.page).await;
        Some(self.finish_load(result))
    }

    fn append(&mut self, page: Page) -> usize {
        self.total = page.total;
        self.next_page += 1;

        if page.items.is_empty() {
            if (self.items.len() as u32) < self.total {
                tracing::warn!(
                    loaded = self.items.len(),
                    total = self.total,
                    "Server returned an empty page before the end; stopping"
                );
            }
            self.drained = true;
            return 0;
        }

        let room = self.total.saturating_sub(self.items.len() as u32) as usize;
        let take = page.items.len().min(room);
        self.items.extend(page.items.into_iter().take(take));
        tracing::debug!(loaded = self.items.len(), total = self.total, "Appended posts");
        take
    }
}
