//! UI rendering for postpager
//!
//! One full-screen page:
//! - Header with the style toggle, the route bar and the page-size selector
//! - Body: loading panel, error panel, numbered page or infinite list
//! - Footer with keybind hints
//!
//! Hit areas are re-registered on every draw, and the infinite view reports
//! its geometry to the visibility observer; the event loop evaluates the
//! observer right after each draw.

pub mod components;
mod error;
mod header;
mod infinite;
pub mod interaction;
mod paged;
mod posts;
pub mod text_wrapping;
mod theme;

pub use header::{toggle_label, HEADER_HEIGHT};
pub use infinite::{loaded_text, render_infinite, sentinel_indicator};
pub use paged::{pagination_bar, showing_text};
pub use posts::{post_lines, posts_lines};
pub use theme::*;

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, PageView};
use crate::domain::ScrollBoundary;
use crate::infinite::SENTINEL;
use crate::pagination::PaginationControls;
use crate::route::DisplayMode;
use crate::traits::Router;
use components::{render_status_indicator, StatusIndicatorType};

/// Ticks a scroll boundary hint stays visible
pub const BOUNDARY_HINT_TICKS: u64 = 30;

/// Render the whole page.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_registry.clear();

    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let spinner_frame = app.spinner_frame();
    let tick = app.tick_count;
    let mode = app.route.mode;
    let App {
        router,
        view,
        scroll,
        observer,
        hit_registry,
        ..
    } = app;

    header::render_header(frame, header_area, router.current_params(), hit_registry);

    if !matches!(view, PageView::Infinite(_)) {
        observer.remove_region(SENTINEL);
    }

    match view {
        PageView::Loading => render_loading(frame, body_area, spinner_frame),
        PageView::Failed(error) => error::render_error_panel(frame, body_area, error, hit_registry),
        PageView::Paged(page) => {
            let controls = PaginationControls::new(&**router, page.total);
            paged::render_paged(frame, body_area, page, &controls, scroll, hit_registry);
        }
        PageView::Infinite(loader) => {
            infinite::render_infinite(frame, body_area, loader, scroll, observer, spinner_frame);
        }
    }

    let boundary = scroll.recent_boundary_hit(tick, BOUNDARY_HINT_TICKS);
    render_footer(frame, footer_area, mode, boundary);
}

fn render_loading(frame: &mut Frame, area: Rect, spinner_frame: usize) {
    let lines = render_status_indicator(&StatusIndicatorType::spinner("Loading posts…", spinner_frame));
    let [area] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_footer(frame: &mut Frame, area: Rect, mode: DisplayMode, boundary: Option<ScrollBoundary>) {
    let line = match boundary {
        Some(ScrollBoundary::Top) => Line::styled(" Top of list", Style::default().fg(COLOR_BOUNDARY)),
        Some(ScrollBoundary::Bottom) => {
            Line::styled(" End of list", Style::default().fg(COLOR_BOUNDARY))
        }
        None => keybind_hints(mode),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Footer hints for the active mode.
pub fn keybind_hints(mode: DisplayMode) -> Line<'static> {
    let hints: &[(&str, &str)] = match mode {
        DisplayMode::Paged => &[
            ("←/→", "page"),
            ("Home/End", "first/last"),
            ("↑/↓", "scroll"),
            ("[ ]", "page size"),
            ("t", "infinite scroll"),
            ("r", "reload"),
            ("⌫", "back"),
            ("q", "quit"),
        ],
        DisplayMode::Infinite => &[
            ("↑/↓", "scroll"),
            ("PgUp/PgDn", "page"),
            ("Home/End", "top/bottom"),
            ("[ ]", "page size"),
            ("t", "numbered pages"),
            ("r", "reload"),
            ("⌫", "back"),
            ("q", "quit"),
        ],
    };

    let mut spans = vec![Span::raw(" ")];
    for (key, action) in hints {
        spans.push(Span::styled(*key, Style::default().fg(COLOR_ACCENT)));
        spans.push(Span::styled(format!(" {}  ", action), Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}
