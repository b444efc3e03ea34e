//! Infinite-scroll view.
//!
//! Draws the accumulated posts followed by the sentinel line, and reports the
//! viewport and the sentinel's position to the visibility observer so the app
//! can load more once the sentinel scrolls into view.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::domain::ScrollState;
use crate::infinite::{InfiniteLoader, LoaderStatus, Region, ViewportObserver, SENTINEL};
use crate::ui::components::{status_line, StatusIndicatorType};
use crate::ui::posts::posts_lines;
use crate::ui::theme::COLOR_DIM;

/// Render the accumulated list and update the observer's geometry.
pub fn render_infinite(
    frame: &mut Frame,
    area: Rect,
    loader: &InfiniteLoader,
    scroll: &mut ScrollState,
    observer: &ViewportObserver,
    spinner_frame: usize,
) {
    let [list_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

    let mut lines = posts_lines(loader.items(), list_area.width as usize);
    let sentinel_line = lines.len();
    lines.push(
        status_line(&sentinel_indicator(loader.status(), spinner_frame)).alignment(Alignment::Center),
    );

    let viewport_height = list_area.height as usize;
    scroll.update_limits(lines.len(), viewport_height);

    observer.set_viewport(Region::new(scroll.offset(), viewport_height));
    observer.set_region(SENTINEL, Region::new(sentinel_line, 1));

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(scroll.offset())
        .take(viewport_height)
        .collect();
    frame.render_widget(Paragraph::new(visible), list_area);

    let status = Paragraph::new(Line::styled(
        loaded_text(loader),
        Style::default().fg(COLOR_DIM),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(status, status_area);
}

/// What the sentinel line says in each loader state.
pub fn sentinel_indicator(status: LoaderStatus, spinner_frame: usize) -> StatusIndicatorType {
    match status {
        LoaderStatus::Loading => StatusIndicatorType::spinner("Loading more posts…", spinner_frame),
        LoaderStatus::Exhausted => StatusIndicatorType::success("End of results"),
        LoaderStatus::MoreAvailable => StatusIndicatorType::info("Scroll down to load more"),
    }
}

/// "Loaded N of T posts".
pub fn loaded_text(loader: &InfiniteLoader) -> String {
    format!("Loaded {} of {} posts", loader.items().len(), loader.total())
}
