//! AppMessage enum for async communication within the application.

use crate::error::FetchError;
use crate::models::Page;
use crate::route::RouteParams;

/// Messages posted back to the UI task by fetch tasks and the visibility
/// observer.
///
/// Every message carries the load generation it belongs to; the app drops
/// messages from a generation that is no longer current.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The page for `route` finished loading (paged page or infinite seed)
    PageLoaded {
        generation: u64,
        route: RouteParams,
        result: Result<Page, FetchError>,
    },
    /// An incremental infinite-scroll fetch finished
    ChunkLoaded {
        generation: u64,
        result: Result<Page, FetchError>,
    },
    /// The infinite-scroll sentinel came into view
    SentinelVisible { generation: u64 },
}

impl AppMessage {
    pub fn generation(&self) -> u64 {
        match self {
            AppMessage::PageLoaded { generation, .. }
            | AppMessage::ChunkLoaded { generation, .. }
            | AppMessage::SentinelVisible { generation } => *generation,
        }
    }
}
