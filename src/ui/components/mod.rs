//! Reusable UI Components
//!
//! - `StatusIndicator` - Spinner, success, info and error indicators
//! - `Button` - Clickable label that registers a hit area

mod button;
mod status_indicator;

pub use button::{render_button, ButtonRow, ButtonState};
pub use status_indicator::{
    get_spinner_char, render_status_indicator, status_line, StatusIndicatorType,
};
