//! Numbered-page navigation.
//!
//! [`window`] decides which page numbers to show; [`controls`] turns user
//! intent (previous, next, a page token) into router navigations.

pub mod controls;
pub mod window;

pub use controls::PaginationControls;
pub use window::{page_window, total_pages, EllipsisSlot, PageToken};
