//! Command-line argument parsing.
//!
//! Flags take their value either as the next argument (`--page 2`) or inline
//! (`--page=2`). Unknown flags are ignored.

use thiserror::Error;

use crate::route::{DisplayMode, RouteParams};
use crate::startup::AppConfig;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    Run(RunOptions),
}

/// Overrides for a TUI run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub style: Option<DisplayMode>,
    pub query: Option<String>,
    pub api_url: Option<String>,
}

/// Malformed command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("invalid value {value:?} for {flag}: expected {expected}")]
    InvalidValue {
        flag: String,
        value: String,
        expected: &'static str,
    },
}

impl RunOptions {
    /// Apply these overrides on top of `config`.
    ///
    /// `--query` replaces the starting route; the individual flags are then
    /// applied over it.
    pub fn apply(&self, config: AppConfig) -> AppConfig {
        let mut route = match &self.query {
            Some(query) => RouteParams::parse(query),
            None => config.initial_route,
        };
        if let Some(limit) = self.limit {
            route.limit = limit;
        }
        if let Some(page) = self.page {
            route.page = page;
        }
        if let Some(style) = self.style {
            route.mode = style;
        }

        let config = config.with_initial_route(route);
        match &self.api_url {
            Some(url) => config.with_api_url(url.clone()),
            None => config,
        }
    }
}

/// Parse command-line arguments (including the program name).
///
/// # Examples
///
/// ```
/// use postpager::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["postpager".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--page" | "--limit" | "--style" | "--query" | "--api-url" => {
                let value = match inline {
                    Some(value) => value,
                    None => args.next().ok_or_else(|| ArgsError::MissingValue(flag.clone()))?,
                };
                match flag.as_str() {
                    "--page" => options.page = Some(positive(&flag, &value)?),
                    "--limit" => options.limit = Some(positive(&flag, &value)?),
                    "--style" => options.style = Some(style(&flag, &value)?),
                    "--query" => options.query = Some(value),
                    _ => options.api_url = Some(value),
                }
            }
            _ => {}
        }
    }

    Ok(CliCommand::Run(options))
}

fn positive(flag: &str, value: &str) -> Result<u32, ArgsError> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| ArgsError::InvalidValue {
            flag: flag.to_string(),
            value: value.to_string(),
            expected: "a positive integer",
        })
}

fn style(flag: &str, value: &str) -> Result<DisplayMode, ArgsError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "infinite" => Ok(DisplayMode::Infinite),
        "paged" => Ok(DisplayMode::Paged),
        _ => Err(ArgsError::InvalidValue {
            flag: flag.to_string(),
            value: value.to_string(),
            expected: "infinite or paged",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, ArgsError> {
        let args: Vec<String> = std::iter::once("postpager")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        parse_args(args.into_iter())
    }

    fn run(args: &[&str]) -> RunOptions {
        match parse(args) {
            Ok(CliCommand::Run(options)) => options,
            other => panic!("expected run options, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_version_and_help() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["-h"]), Ok(CliCommand::Help));
        assert_eq!(parse(&["--page", "2", "--help"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), Ok(CliCommand::Run(RunOptions::default())));
    }

    #[test]
    fn test_parse_values() {
        let options = run(&["--page", "3", "--limit=10", "--style", "infinite", "--api-url", "http://x"]);
        assert_eq!(options.page, Some(3));
        assert_eq!(options.limit, Some(10));
        assert_eq!(options.style, Some(DisplayMode::Infinite));
        assert_eq!(options.api_url.as_deref(), Some("http://x"));
    }

    #[test]
    fn test_parse_query_keeps_inner_equals() {
        let options = run(&["--query=page=2&limit=20"]);
        assert_eq!(options.query.as_deref(), Some("page=2&limit=20"));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse(&["--page"]), Err(ArgsError::MissingValue("--page".to_string())));
        assert!(matches!(parse(&["--limit", "0"]), Err(ArgsError::InvalidValue { .. })));
        assert!(matches!(parse(&["--style", "grid"]), Err(ArgsError::InvalidValue { .. })));
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(parse(&["--unknown"]), Ok(CliCommand::Run(RunOptions::default())));
    }

    #[test]
    fn test_apply_flags_over_query() {
        let options = run(&["--query", "page=4&limit=20&style=infinite", "--page", "2"]);
        let config = options.apply(AppConfig::default());
        assert_eq!(config.initial_route, RouteParams::new(2, 20, DisplayMode::Infinite));
    }

    #[test]
    fn test_apply_keeps_config_defaults() {
        let config = AppConfig::default().with_api_url("http://env.test");
        let config = run(&["--limit", "50"]).apply(config);
        assert_eq!(config.api_url, "http://env.test");
        assert_eq!(config.initial_route, RouteParams::new(1, 50, DisplayMode::Paged));
    }
}
