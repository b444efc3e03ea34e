//! Test doubles.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`InMemoryPostSource`] - Post collection with injectable failures

pub mod http;
pub mod posts;

pub use http::{MockHttpClient, MockResponse};
pub use posts::InMemoryPostSource;
