//! Page-window calculator.
//!
//! Maps `(current_page, total_pages)` to the list of page buttons to show:
//! the first page, up to two neighbours on each side of the current page,
//! the last page, and ellipsis markers where pages are skipped.
//!
//! ```text
//! current 5 of 10:  1 … 3 4 [5] 6 7 … 10
//! current 2 of 3:   1 [2] 3
//! ```

/// Pages shown on each side of the current page.
const NEIGHBOURS: u32 = 2;

/// Which gap an ellipsis stands for. The two markers need distinct identities
/// so list keys stay stable when both are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EllipsisSlot {
    /// Between page 1 and the window around the current page
    Leading,
    /// Between the window and the last page
    Trailing,
}

/// One entry of the page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageToken {
    Page(u32),
    Ellipsis(EllipsisSlot),
}

impl PageToken {
    /// Stable key for list rendering.
    pub fn key(&self) -> String {
        match self {
            PageToken::Page(n) => format!("page-{}", n),
            PageToken::Ellipsis(EllipsisSlot::Leading) => "ellipsis-leading".to_string(),
            PageToken::Ellipsis(EllipsisSlot::Trailing) => "ellipsis-trailing".to_string(),
        }
    }

    pub fn label(&self) -> String {
        match self {
            PageToken::Page(n) => n.to_string(),
            PageToken::Ellipsis(_) => "…".to_string(),
        }
    }

    pub fn page(&self) -> Option<u32> {
        match self {
            PageToken::Page(n) => Some(*n),
            PageToken::Ellipsis(_) => None,
        }
    }
}

/// `ceil(total_items / limit)`, never less than one page.
pub fn total_pages(total_items: u32, limit: u32) -> u32 {
    if limit == 0 {
        return 1;
    }
    total_items.div_ceil(limit).max(1)
}

/// Compute the page window for `current_page` out of `total_pages`.
///
/// Both inputs are treated as at least 1. The numeric range is clamped to
/// `2..=total_pages - 1`, so page 1 and the last page are never emitted
/// twice and numeric tokens are strictly increasing.
pub fn page_window(current_page: u32, total_pages: u32) -> Vec<PageToken> {
    let current = current_page.max(1);
    let total = total_pages.max(1);

    let mut tokens = vec![PageToken::Page(1)];

    if current > NEIGHBOURS + 2 {
        tokens.push(PageToken::Ellipsis(EllipsisSlot::Leading));
    }

    let start = current.saturating_sub(NEIGHBOURS).max(2);
    let end = (current + NEIGHBOURS).min(total.saturating_sub(1));
    tokens.extend((start..=end).map(PageToken::Page));

    if current + NEIGHBOURS + 1 < total {
        tokens.push(PageToken::Ellipsis(EllipsisSlot::Trailing));
    }

    if total > 1 {
        tokens.push(PageToken::Page(total));
    }

    tokens
}
