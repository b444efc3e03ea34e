//! Type definitions for the application state.

use crate::error::FetchError;
use crate::infinite::InfiniteLoader;
use crate::models::Page;

/// What the page body currently shows.
#[derive(Debug, Clone, Default)]
pub enum PageView {
    /// The route's first fetch is in flight
    #[default]
    Loading,
    /// One numbered page of results
    Paged(Page),
    /// The accumulating infinite-scroll list
    Infinite(InfiniteLoader),
    /// The route's first fetch failed; rendered as a full-page error
    Failed(FetchError),
}

impl PageView {
    /// Collection size reported by the server, when known.
    pub fn total(&self) -> Option<u32> {
        match self {
            PageView::Paged(page) => Some(page.total),
            PageView::Infinite(loader) => Some(loader.total()),
            PageView::Loading | PageView::Failed(_) => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            PageView::Loading => true,
            PageView::Infinite(loader) => loader.is_loading(),
            _ => false,
        }
    }
}
