//! Address parameters.
//!
//! Everything the page needs to know about "where the user is" lives in the
//! query string: `page`, `limit` and `style`. [`RouteParams`] is the parsed
//! form; it is the only shareable state in the application.

use std::fmt;

/// Page shown when the `page` parameter is absent or invalid.
pub const DEFAULT_PAGE: u32 = 1;

/// Posts per page when the `limit` parameter is absent or invalid.
pub const DEFAULT_LIMIT: u32 = 5;

/// Page sizes offered by the page-size selector, in cycling order.
pub const LIMIT_OPTIONS: [u32; 4] = [5, 10, 20, 50];

/// Which pagination pattern is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Numbered pages with previous/next controls
    #[default]
    Paged,
    /// One growing list that loads more as the end scrolls into view
    Infinite,
}

impl DisplayMode {
    /// Parse the `style` parameter. Only `infinite` selects infinite scroll;
    /// anything else is the paged default.
    pub fn from_param(value: &str) -> Self {
        if value.eq_ignore_ascii_case("infinite") {
            DisplayMode::Infinite
        } else {
            DisplayMode::Paged
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::Paged => "Numbered pages",
            DisplayMode::Infinite => "Infinite scroll",
        }
    }
}

/// Parsed address parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteParams {
    /// 1-based page number
    pub page: u32,
    /// Posts per page, always > 0
    pub limit: u32,
    pub mode: DisplayMode,
}

impl Default for RouteParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            mode: DisplayMode::Paged,
        }
    }
}

impl RouteParams {
    pub fn new(page: u32, limit: u32, mode: DisplayMode) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
            mode,
        }
    }

    /// Parse a query string such as `page=2&limit=10&style=infinite`.
    ///
    /// A leading `?` or `/?` is accepted. Missing, malformed and non-positive
    /// values fall back to the defaults; unknown keys are ignored.
    pub fn parse(query: &str) -> Self {
        let query = query
            .trim()
            .trim_start_matches('/')
            .trim_start_matches('?');

        let mut params = Self::default();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode(raw_key);
            let value = decode(raw_value);

            match key.as_str() {
                "page" => params.page = parse_positive(&value).unwrap_or(DEFAULT_PAGE),
                "limit" => params.limit = parse_positive(&value).unwrap_or(DEFAULT_LIMIT),
                "style" => params.mode = DisplayMode::from_param(&value),
                _ => {}
            }
        }
        params
    }

    /// Format as a query string (without the leading `?`).
    ///
    /// The paged mode is the absence of `style`, so it is never written out.
    pub fn to_query(&self) -> String {
        let mut query = format!("page={}&limit={}", self.page, self.limit);
        if self.mode == DisplayMode::Infinite {
            query.push_str("&style=infinite");
        }
        query
    }

    /// Zero-based offset of the first post on `page`.
    pub fn skip(&self) -> u32 {
        skip_for(self.limit, self.page)
    }

    /// Same route on another page.
    pub fn with_page(self, page: u32) -> Self {
        Self { page, ..self }
    }

    /// Same route with another page size, back on page 1.
    pub fn with_limit(self, limit: u32) -> Self {
        Self::new(DEFAULT_PAGE, limit, self.mode)
    }

    /// Flip between paged and infinite mode, leaving `page` and `limit` alone.
    pub fn toggle_style(self) -> Self {
        let mode = match self.mode {
            DisplayMode::Paged => DisplayMode::Infinite,
            DisplayMode::Infinite => DisplayMode::Paged,
        };
        Self { mode, ..self }
    }
}

impl fmt::Display for RouteParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/?{}", self.to_query())
    }
}

/// `skip = (page − 1) × limit`, saturating at zero for page 0.
pub fn skip_for(limit: u32, page: u32) -> u32 {
    page.saturating_sub(1).saturating_mul(limit)
}

/// Next entry of [`LIMIT_OPTIONS`] after (or before) `current`, wrapping around.
///
/// A `current` that is not one of the options snaps to the nearest option in
/// the requested direction.
pub fn cycle_limit(current: u32, forward: bool) -> u32 {
    let count = LIMIT_OPTIONS.len();
    match LIMIT_OPTIONS.iter().position(|&l| l == current) {
        Some(i) if forward => LIMIT_OPTIONS[(i + 1) % count],
        Some(i) => LIMIT_OPTIONS[(i + count - 1) % count],
        None if forward => LIMIT_OPTIONS
            .iter()
            .copied()
            .find(|&l| l > current)
            .unwrap_or(LIMIT_OPTIONS[0]),
        None => LIMIT_OPTIONS
            .iter()
            .rev()
            .copied()
            .find(|&l| l < current)
            .unwrap_or(LIMIT_OPTIONS[count - 1]),
    }
}

fn decode(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    urlencoding::decode(&raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.clone())
}

fn parse_positive(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|&n| n > 0)
}
