//! Full-page error boundary shown when a route's first fetch fails.

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::error::FetchError;
use crate::ui::components::{render_status_indicator, ButtonRow, ButtonState, StatusIndicatorType};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{COLOR_DIM, COLOR_ERROR};

const PANEL_WIDTH: u16 = 60;

pub fn render_error_panel(
    frame: &mut Frame,
    area: Rect,
    error: &FetchError,
    registry: &mut HitAreaRegistry,
) {
    let indicator = StatusIndicatorType::error("Something went wrong", Some(error.user_message()));
    let mut lines = render_status_indicator(&indicator);
    lines.push(Line::styled(
        format!("{} · {}", error.error_code(), error),
        Style::default().fg(COLOR_DIM),
    ));
    lines.push(Line::from(""));

    // Borders plus a row for the reload button.
    let height = (lines.len() as u16 + 3).min(area.height);
    let [panel] = Layout::horizontal([Constraint::Length(PANEL_WIDTH.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [panel] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ERROR));
    let inner = block.inner(panel);
    frame.render_widget(Clear, panel);
    frame.render_widget(block, panel);

    let [text_area, button_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        text_area,
    );

    ButtonRow::new()
        .button("[ Reload ]", ButtonState::Enabled, ClickAction::Reload)
        .text("  or press r", Style::default().fg(COLOR_DIM))
        .render(frame, button_area, Alignment::Center, registry);
}
