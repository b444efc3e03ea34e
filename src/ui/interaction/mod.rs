//! Mouse interaction for the TUI.
//!
//! Components register hit areas during rendering; the event loop hit-tests
//! clicks against them and dispatches the resulting [`ClickAction`].

mod click_handler;
mod hit_area;

pub use click_handler::handle_click_action;
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
