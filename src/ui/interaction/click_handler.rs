//! Click action handler.
//!
//! Translates actions from the hit area registry into App calls.

use super::hit_area::ClickAction;
use crate::app::App;

/// Handle a click action by updating App state.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    app.mark_dirty();

    match action {
        ClickAction::PreviousPage => {
            tracing::debug!("Click: PreviousPage");
            app.previous_page();
        }
        ClickAction::NextPage => {
            tracing::debug!("Click: NextPage");
            app.next_page();
        }
        ClickAction::GoToPage(page) => {
            tracing::debug!("Click: GoToPage({})", page);
            app.go_to_page(page);
        }
        ClickAction::ToggleStyle => {
            tracing::debug!("Click: ToggleStyle");
            app.toggle_style();
        }
        ClickAction::CycleLimit => {
            tracing::debug!("Click: CycleLimit");
            app.cycle_limit(true);
        }
        ClickAction::Reload => {
            tracing::debug!("Click: Reload");
            app.reload();
        }
    }
}
