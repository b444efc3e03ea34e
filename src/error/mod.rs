//! Error types.
//!
//! Library code returns typed errors; the binary wraps everything in
//! `color_eyre::Result` at the top level.
//!
//! | Error | Raised by | Surfaced to user |
//! |-------|-----------|------------------|
//! | [`HttpError`](crate::traits::HttpError) | transport adapters | via `FetchError` |
//! | [`FetchError`] | posts client | page loads only; incremental loads are logged |

mod fetch;

pub use fetch::FetchError;
