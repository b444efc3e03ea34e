//! Numbered-page view: the current page's posts, the pagination bar and the
//! "Showing A–B of T posts" status line.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::domain::ScrollState;
use crate::models::Page;
use crate::pagination::{PageToken, PaginationControls};
use crate::traits::Router;
use crate::ui::components::{ButtonRow, ButtonState};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::posts::posts_lines;
use crate::ui::theme::COLOR_DIM;

/// Render a page of posts with its pagination controls.
pub fn render_paged<R: Router + ?Sized>(
    frame: &mut Frame,
    area: Rect,
    page: &Page,
    controls: &PaginationControls<'_, R>,
    scroll: &mut ScrollState,
    registry: &mut HitAreaRegistry,
) {
    let [list_area, bar_area, status_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_post_list(frame, list_area, page, scroll);
    pagination_bar(controls).render(frame, bar_area, Alignment::Center, registry);

    let status = Paragraph::new(Line::styled(
        showing_text(page),
        Style::default().fg(COLOR_DIM),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(status, status_area);
}

fn render_post_list(frame: &mut Frame, area: Rect, page: &Page, scroll: &mut ScrollState) {
    let lines = if page.is_empty() {
        vec![
            Line::from(""),
            Line::styled("  No posts on this page.", Style::default().fg(COLOR_DIM)),
        ]
    } else {
        posts_lines(&page.items, area.width as usize)
    };

    scroll.update_limits(lines.len(), area.height as usize);
    let visible: Vec<Line> = lines
        .into_iter()
        .skip(scroll.offset())
        .take(area.height as usize)
        .collect();
    frame.render_widget(Paragraph::new(visible), area);
}

/// `‹ Prev  1 … 3 4 5 6 7 … 10  Next ›` with hit areas for every enabled
/// button.
pub fn pagination_bar<R: Router + ?Sized>(controls: &PaginationControls<'_, R>) -> ButtonRow {
    let previous = if controls.can_go_previous() {
        ButtonState::Enabled
    } else {
        ButtonState::Disabled
    };
    let next = if controls.can_go_next() {
        ButtonState::Enabled
    } else {
        ButtonState::Disabled
    };
    let current = controls.current_page();

    let mut row = ButtonRow::new()
        .button("‹ Prev", previous, ClickAction::PreviousPage)
        .text(" ", Style::default());

    for token in controls.tokens() {
        row = match token {
            PageToken::Page(n) => {
                let state = if n == current {
                    ButtonState::Active
                } else {
                    ButtonState::Enabled
                };
                row.button(format!(" {} ", n), state, ClickAction::GoToPage(n))
            }
            PageToken::Ellipsis(_) => row.text(" … ", Style::default().fg(COLOR_DIM)),
        };
    }

    row.text(" ", Style::default())
        .button("Next ›", next, ClickAction::NextPage)
}

/// "Showing A–B of T posts", or "No posts" for an empty page.
pub fn showing_text(page: &Page) -> String {
    match page.item_range() {
        Some((first, last)) => format!("Showing {}–{} of {} posts", first, last, page.total),
        None => format!("No posts to show ({} in total)", page.total),
    }
}
