//! Posts API client.

mod client;

pub use client::{PostsClient, DEFAULT_API_URL};
