//! Version and help output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
postpager - numbered pages vs. infinite scroll, in your terminal

USAGE:
    postpager [OPTIONS]

OPTIONS:
    --page <N>                 Start on page N (default 1)
    --limit <N>                Posts per page (default 5)
    --style <infinite|paged>   Pagination style (default paged)
    --query <QS>               Start from a query string, e.g. \"page=2&limit=10\"
    --api-url <URL>            Posts API base URL (default https://dummyjson.com)
    -V, --version              Print version
    -h, --help                 Print this help

ENVIRONMENT:
    POSTPAGER_API_URL          Posts API base URL
    POSTPAGER_LOG              Log filter (default info)
    POSTPAGER_LOG_FILE         Log file path
";

/// `postpager <version>`
pub fn version_string() -> String {
    format!("postpager {}", VERSION)
}
