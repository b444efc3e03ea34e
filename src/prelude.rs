//! Prelude module for convenient imports.
//!
//! ```ignore
//! use postpager::prelude::*;
//! ```

// Core application types
pub use crate::app::{App, AppMessage, PageView};

// Address state
pub use crate::route::{DisplayMode, RouteParams};

// Model and error types
pub use crate::error::FetchError;
pub use crate::models::{Page, Post};

// Pagination and infinite scroll
pub use crate::infinite::{InfiniteLoader, LoaderStatus, ViewportObserver};
pub use crate::pagination::{page_window, PageToken, PaginationControls};

// Seams and their implementations
pub use crate::adapters::{InMemoryPostSource, MemoryRouter, ReqwestHttpClient};
pub use crate::posts::PostsClient;
pub use crate::traits::{HttpClient, PostSource, Router, VisibilityObserver};
