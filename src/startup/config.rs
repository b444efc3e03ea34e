//! Startup configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::posts::DEFAULT_API_URL;
use crate::route::RouteParams;

/// Environment variable overriding the posts API base URL.
pub const ENV_API_URL: &str = "POSTPAGER_API_URL";

/// Environment variable holding the tracing filter.
pub const ENV_LOG_FILTER: &str = "POSTPAGER_LOG";

/// Environment variable overriding the log file path.
pub const ENV_LOG_FILE: &str = "POSTPAGER_LOG_FILE";

/// Default tracing filter.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Configuration for one run of the application.
///
/// Use the builder methods to customize it.
///
/// # Example
///
/// ```
/// use postpager::route::RouteParams;
/// use postpager::startup::AppConfig;
///
/// let config = AppConfig::default()
///     .with_api_url("http://localhost:8080")
///     .with_initial_route(RouteParams::parse("page=2&limit=10"));
/// assert_eq!(config.initial_route.page, 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the posts API (without `/posts`)
    pub api_url: String,
    /// Route shown at startup
    pub initial_route: RouteParams,
    /// Log file; `None` resolves to the default under the data directory
    pub log_file: Option<PathBuf>,
    /// Tracing filter directive
    pub log_filter: String,
    /// Per-request timeout for the HTTP client
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            initial_route: RouteParams::default(),
            log_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_initial_route(mut self, route: RouteParams) -> Self {
        self.initial_route = route;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Defaults overridden by `POSTPAGER_API_URL`, `POSTPAGER_LOG` and
    /// `POSTPAGER_LOG_FILE`. Empty values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = env_value(ENV_API_URL) {
            config = config.with_api_url(url);
        }
        if let Some(filter) = env_value(ENV_LOG_FILTER) {
            config = config.with_log_filter(filter);
        }
        if let Some(path) = env_value(ENV_LOG_FILE) {
            config = config.with_log_file(path);
        }
        config
    }

    /// The log file to write, falling back to
    /// `<data_local_dir>/postpager/postpager.log`.
    pub fn resolved_log_file(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            dirs::data_local_dir().map(|dir| dir.join("postpager").join("postpager.log"))
        })
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
