//! Startup: configuration and wiring of the application's collaborators.
//!
//! - [`config`] - [`AppConfig`] builder with environment overrides
//!
//! [`create_app`] builds the real HTTP stack from a config; tests build an
//! [`App`] directly around an in-memory source instead.

pub mod config;

pub use config::AppConfig;

use std::sync::Arc;

use crate::adapters::{MemoryRouter, ReqwestHttpClient};
use crate::app::App;
use crate::posts::PostsClient;

/// Build the app for `config`: reqwest client, posts client and router.
pub fn create_app(config: &AppConfig) -> App {
    tracing::info!(
        api_url = %config.api_url,
        route = %config.initial_route,
        "Starting postpager"
    );

    let http = ReqwestHttpClient::with_timeout(config.request_timeout);
    let source = PostsClient::with_http(config.api_url.clone(), http);
    let router = Arc::new(MemoryRouter::new(config.initial_route));

    App::new(router, Arc::new(source))
}
