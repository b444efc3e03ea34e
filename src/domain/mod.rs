//! Domain objects for the TUI application.
//!
//! - [`ScrollState`] - Scroll position over the rendered post list

pub mod scroll;

pub use scroll::{ScrollBoundary, ScrollState};
