//! Concrete implementations of trait abstractions.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`MemoryRouter`] - In-process address bar with history
//!
//! The [`mock`] submodule provides test doubles.

pub mod memory_router;
pub mod mock;
pub mod reqwest_http;

pub use memory_router::MemoryRouter;
pub use mock::{InMemoryPostSource, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
