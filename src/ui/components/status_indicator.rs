//! Status Indicator Component
//!
//! Renders spinner, success, info and error status lines. Used for the
//! initial loading panel, the infinite-scroll footer and the error panel.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_BODY, COLOR_DIM, COLOR_DONE, COLOR_ERROR, COLOR_LOADING};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Status indicator types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner { message: String, frame: usize },
    /// Success indicator with message
    Success { message: String },
    /// Error indicator with a header and optional details
    Error {
        header: String,
        details: Option<String>,
    },
    /// Dim informational message
    Info { message: String },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, frame: usize) -> Self {
        Self::Spinner {
            message: message.into(),
            frame,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn error(header: impl Into<String>, details: Option<String>) -> Self {
        Self::Error {
            header: header.into(),
            details,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Info {
            message: message.into(),
        }
    }
}

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// The indicator's headline as a single line.
pub fn status_line(indicator: &StatusIndicatorType) -> Line<'static> {
    match indicator {
        StatusIndicatorType::Spinner { message, frame } => Line::from(vec![
            Span::styled(
                format!("{} ", get_spinner_char(*frame)),
                Style::default().fg(COLOR_LOADING),
            ),
            Span::styled(
                message.clone(),
                Style::default()
                    .fg(COLOR_LOADING)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        StatusIndicatorType::Success { message } => Line::from(vec![
            Span::styled("\u{25CF} ", Style::default().fg(COLOR_DONE)),
            Span::styled(message.clone(), Style::default().fg(COLOR_DONE)),
        ]),
        StatusIndicatorType::Error { header, .. } => Line::from(vec![
            Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
            Span::styled(
                header.clone(),
                Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
            ),
        ]),
        StatusIndicatorType::Info { message } => {
            Line::from(Span::styled(message.clone(), Style::default().fg(COLOR_DIM)))
        }
    }
}

/// Render a status indicator as a padded block of lines for a panel.
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(""), status_line(indicator)];

    if let StatusIndicatorType::Error {
        details: Some(details),
        ..
    } = indicator
    {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            details.clone(),
            Style::default().fg(COLOR_BODY),
        )));
    }

    lines.push(Line::from(""));
    lines
}
