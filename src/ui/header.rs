//! Header: title, style toggle button, route bar and page-size selector.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::route::{DisplayMode, RouteParams};
use crate::ui::components::{ButtonRow, ButtonState};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_ROUTE};

/// Rows taken by the header, including its bottom border.
pub const HEADER_HEIGHT: u16 = 3;

pub fn render_header(frame: &mut Frame, area: Rect, route: RouteParams, registry: &mut HitAreaRegistry) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title_row, route_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);

    let title = Line::from(vec![
        Span::styled(
            " postpager ",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("· {}", route.mode.label()), Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(title), title_row);

    ButtonRow::new()
        .button(toggle_label(route.mode), ButtonState::Enabled, ClickAction::ToggleStyle)
        .text(" ", Style::default())
        .render(frame, title_row, Alignment::Right, registry);

    let address = Line::from(vec![
        Span::styled(" ⌂ ", Style::default().fg(COLOR_DIM)),
        Span::styled(route.to_string(), Style::default().fg(COLOR_ROUTE)),
    ]);
    frame.render_widget(Paragraph::new(address), route_row);

    ButtonRow::new()
        .button(
            format!("[ {} per page ]", route.limit),
            ButtonState::Enabled,
            ClickAction::CycleLimit,
        )
        .text(" ", Style::default())
        .render(frame, route_row, Alignment::Right, registry);
}

/// Label of the style toggle for the current mode.
pub fn toggle_label(mode: DisplayMode) -> &'static str {
    match mode {
        DisplayMode::Paged => "[ Switch to infinite scroll ]",
        DisplayMode::Infinite => "[ Switch to numbered pages ]",
    }
}
