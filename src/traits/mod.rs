//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET operations
//! - [`PostSource`] - Paginated posts collection
//! - [`Router`] - Address parameters (`current_params` / `navigate`)
//! - [`VisibilityObserver`] - Element visibility subscriptions

pub mod http;
pub mod router;
pub mod source;
pub mod visibility;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use router::Router;
pub use source::PostSource;
pub use visibility::{ElementId, Subscription, VisibilityObserver, VisibleCallback};
