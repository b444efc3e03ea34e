//! Infinite scroll.
//!
//! [`loader`] owns the growing list and the Idle/Loading state machine;
//! [`observer`] reports when the sentinel at the end of the list scrolls
//! into view.

pub mod loader;
pub mod observer;

pub use loader::{InfiniteLoader, LoaderState, LoaderStatus, PageRequest};
pub use observer::{Region, ViewportObserver};

use crate::traits::ElementId;

/// The marker element after the last post whose visibility triggers a load.
pub const SENTINEL: ElementId = ElementId("infinite-sentinel");

/// Fraction of the sentinel that must be on screen to count as visible.
pub const SENTINEL_THRESHOLD: f32 = 0.1;
