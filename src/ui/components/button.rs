//! Clickable button rows.
//!
//! A [`ButtonRow`] lays out text and buttons on one line. When rendered it
//! registers a hit area for every enabled button, so clicks line up with
//! what is drawn.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BUTTON, COLOR_BUTTON_HOVER_BG, COLOR_CURRENT_PAGE_BG, COLOR_DISABLED,
};

/// How a button is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Enabled,
    /// Drawn dimmed, not clickable
    Disabled,
    /// Highlighted (the current page), not clickable
    Active,
}

#[derive(Debug, Clone)]
enum Segment {
    Text(String, Style),
    Button {
        label: String,
        state: ButtonState,
        action: ClickAction,
    },
}

/// One line of text and buttons.
#[derive(Debug, Clone, Default)]
pub struct ButtonRow {
    segments: Vec<Segment>,
}

impl ButtonRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>, style: Style) -> Self {
        self.segments.push(Segment::Text(text.into(), style));
        self
    }

    pub fn button(mut self, label: impl Into<String>, state: ButtonState, action: ClickAction) -> Self {
        self.segments.push(Segment::Button {
            label: label.into(),
            state,
            action,
        });
        self
    }

    /// Total width in columns.
    pub fn width(&self) -> u16 {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(text, _) => text.width(),
                Segment::Button { label, .. } => label.width(),
            })
            .sum::<usize>()
            .min(u16::MAX as usize) as u16
    }

    /// Draw into the first line of `area` and register hit areas.
    pub fn render(self, frame: &mut Frame, area: Rect, alignment: Alignment, registry: &mut HitAreaRegistry) {
        render_button(frame, area, alignment, self, registry);
    }
}

/// Draw a button row. See [`ButtonRow::render`].
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    alignment: Alignment,
    row: ButtonRow,
    registry: &mut HitAreaRegistry,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let width = row.width().min(area.width);
    let start = match alignment {
        Alignment::Left => area.x,
        Alignment::Center => area.x + (area.width - width) / 2,
        Alignment::Right => area.x + area.width - width,
    };
    let right_edge = area.x + area.width;

    let mut spans = Vec::with_capacity(row.segments.len());
    let mut x = start;
    for segment in row.segments {
        match segment {
            Segment::Text(text, style) => {
                x = x.saturating_add(text.width() as u16);
                spans.push(Span::styled(text, style));
            }
            Segment::Button {
                label,
                state,
                action,
            } => {
                let label_width = label.width() as u16;
                let rect = Rect::new(x, area.y, label_width.min(right_edge.saturating_sub(x)), 1);
                let style = button_style(state, registry.is_hovered(rect));
                if state == ButtonState::Enabled && rect.width > 0 {
                    registry.register(rect, action);
                }
                x = x.saturating_add(label_width);
                spans.push(Span::styled(label, style));
            }
        }
    }

    let line_area = Rect::new(start, area.y, right_edge - start, 1);
    frame.render_widget(Paragraph::new(Line::from(spans)), line_area);
}

fn button_style(state: ButtonState, hovered: bool) -> Style {
    match state {
        ButtonState::Enabled if hovered => Style::default()
            .fg(COLOR_ACCENT)
            .bg(COLOR_BUTTON_HOVER_BG)
            .add_modifier(Modifier::BOLD),
        ButtonState::Enabled => Style::default().fg(COLOR_BUTTON),
        ButtonState::Disabled => Style::default().fg(COLOR_DISABLED),
        ButtonState::Active => Style::default()
            .fg(COLOR_ACCENT)
            .bg(COLOR_CURRENT_PAGE_BG)
            .add_modifier(Modifier::BOLD),
    }
}
